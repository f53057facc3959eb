//! Performance Report Module
//! Derived tables for the yearly airline performance report.

use crate::data::columns::{
    AIR_TIME, CANCELLATION_CODE, DEST_STATE, DIV_AIRPORT_LANDINGS, FLIGHTS, MONTH, ORIGIN_STATE,
    REPORTING_AIRLINE,
};
use crate::reports::{grouped_mean, grouped_sum};
use polars::prelude::*;

/// The five derived tables of the performance report.
#[derive(Debug, Clone)]
pub struct PerformanceTables {
    /// Cancelled flights per (month, cancellation code).
    pub cancellations: DataFrame,
    /// Mean airtime in minutes per (month, airline).
    pub airtime: DataFrame,
    /// Row subset with a nonzero diverted-landing count.
    pub diversions: DataFrame,
    /// Total flights per origin state.
    pub origin_flights: DataFrame,
    /// Total flights per (destination state, airline).
    pub dest_airline_flights: DataFrame,
}

/// Compute the performance report over a year-filtered table.
///
/// Pure and deterministic: grouped tables carry one row per grouping-key
/// combination present in the input and are sorted by those keys.
pub fn performance_tables(df: &DataFrame) -> PolarsResult<PerformanceTables> {
    let cancellations = grouped_sum(df, &[MONTH, CANCELLATION_CODE], FLIGHTS)?;
    let airtime = grouped_mean(df, &[MONTH, REPORTING_AIRLINE], AIR_TIME)?;
    let diversions = df
        .clone()
        .lazy()
        .filter(col(DIV_AIRPORT_LANDINGS).neq(lit(0.0)))
        .collect()?;
    let origin_flights = grouped_sum(df, &[ORIGIN_STATE], FLIGHTS)?;
    let dest_airline_flights = grouped_sum(df, &[DEST_STATE, REPORTING_AIRLINE], FLIGHTS)?;

    Ok(PerformanceTables {
        cancellations,
        airtime,
        diversions,
        origin_flights,
        dest_airline_flights,
    })
}

//! Delay Report Module
//! Monthly mean delay minutes per airline, one table per delay cause.

use crate::data::columns::{
    CARRIER_DELAY, LATE_AIRCRAFT_DELAY, MONTH, NAS_DELAY, REPORTING_AIRLINE, SECURITY_DELAY,
    WEATHER_DELAY,
};
use crate::reports::grouped_mean;
use polars::prelude::*;

/// The five derived tables of the delay report.
///
/// Each table is `(month, airline) -> mean minutes` for one delay cause.
#[derive(Debug, Clone)]
pub struct DelayTables {
    pub carrier: DataFrame,
    pub weather: DataFrame,
    pub nas: DataFrame,
    pub security: DataFrame,
    pub late_aircraft: DataFrame,
}

/// Compute the delay report over a year-filtered table. Pure, deterministic.
pub fn delay_tables(df: &DataFrame) -> PolarsResult<DelayTables> {
    let keys = [MONTH, REPORTING_AIRLINE];

    Ok(DelayTables {
        carrier: grouped_mean(df, &keys, CARRIER_DELAY)?,
        weather: grouped_mean(df, &keys, WEATHER_DELAY)?,
        nas: grouped_mean(df, &keys, NAS_DELAY)?,
        security: grouped_mean(df, &keys, SECURITY_DELAY)?,
        late_aircraft: grouped_mean(df, &keys, LATE_AIRCRAFT_DELAY)?,
    })
}

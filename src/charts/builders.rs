//! Chart Builders Module
//! Maps the derived report tables onto the five dashboard charts.

use crate::charts::{ChartKind, ChartSpec};
use crate::data::columns::{
    AIR_TIME, CANCELLATION_CODE, CARRIER_DELAY, DEST_STATE, FLIGHTS, LATE_AIRCRAFT_DELAY, MONTH,
    NAS_DELAY, ORIGIN_STATE, REPORTING_AIRLINE, SECURITY_DELAY, WEATHER_DELAY,
};
use crate::reports::{DelayTables, PerformanceTables};
use polars::prelude::*;

/// Build the five performance charts: cancellations bar, airtime lines,
/// diversion pie, origin-state choropleth and destination treemap.
pub fn performance_charts(tables: &PerformanceTables) -> PolarsResult<[ChartSpec; 5]> {
    let bar = ChartSpec::new(
        "Monthly Flight Cancellation",
        ChartKind::Bar {
            x: MONTH.into(),
            y: FLIGHTS.into(),
            color: CANCELLATION_CODE.into(),
        },
        tables.cancellations.clone(),
    );

    let line = ChartSpec::new(
        "Average monthly flight time (minutes) by airline",
        ChartKind::Line {
            x: MONTH.into(),
            y: AIR_TIME.into(),
            color: REPORTING_AIRLINE.into(),
        },
        tables.airtime.clone(),
    );

    let pie = ChartSpec::new(
        "% of flights by reporting airline",
        ChartKind::Pie {
            values: FLIGHTS.into(),
            names: REPORTING_AIRLINE.into(),
        },
        tables.diversions.clone(),
    );

    // Color range pinned to [0, max] so states compare on an absolute scale.
    let max_flights = tables
        .origin_flights
        .column(FLIGHTS)?
        .f64()?
        .max()
        .unwrap_or(0.0);
    let map = ChartSpec::new(
        "Number of flights from origin state",
        ChartKind::Choropleth {
            locations: ORIGIN_STATE.into(),
            color: FLIGHTS.into(),
            color_scale: "GnBu".into(),
            range_color: [0.0, max_flights],
        },
        tables.origin_flights.clone(),
    );

    let treemap = ChartSpec::new(
        "Flight count by airline to destination state",
        ChartKind::Treemap {
            path: vec![DEST_STATE.into(), REPORTING_AIRLINE.into()],
            values: FLIGHTS.into(),
            color: FLIGHTS.into(),
            color_scale: "YlGnBu".into(),
        },
        tables.dest_airline_flights.clone(),
    );

    Ok([bar, line, pie, map, treemap])
}

/// Build the five delay charts, one line chart per delay cause.
pub fn delay_charts(tables: &DelayTables) -> PolarsResult<[ChartSpec; 5]> {
    let line = |title: &str, y: &str, data: &DataFrame| {
        ChartSpec::new(
            title,
            ChartKind::Line {
                x: MONTH.into(),
                y: y.into(),
                color: REPORTING_AIRLINE.into(),
            },
            data.clone(),
        )
    };

    Ok([
        line(
            "Average carrier delay time (minutes) by airline",
            CARRIER_DELAY,
            &tables.carrier,
        ),
        line(
            "Average weather delay time (minutes) by airline",
            WEATHER_DELAY,
            &tables.weather,
        ),
        line(
            "Average NAS delay time (minutes) by airline",
            NAS_DELAY,
            &tables.nas,
        ),
        line(
            "Average security delay time (minutes) by airline",
            SECURITY_DELAY,
            &tables.security,
        ),
        line(
            "Average late aircraft delay time (minutes) by airline",
            LATE_AIRCRAFT_DELAY,
            &tables.late_aircraft,
        ),
    ])
}

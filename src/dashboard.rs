//! Dashboard Module
//! Maps a (report type, year) selection onto the five report charts.

use crate::charts::{delay_charts, performance_charts, ChartSpec};
use crate::data::{filter_year, SUPPORTED_YEARS};
use crate::reports::{delay_tables, performance_tables};
use polars::prelude::*;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No report type selected")]
    MissingReportType,
    #[error("No year selected")]
    MissingYear,
    #[error("Year {0} is outside the supported range 2005-2020")]
    UnsupportedYear(u16),
    #[error("No flights recorded for {0}")]
    NoFlights(u16),
    #[error("Aggregation failed: {0}")]
    Polars(#[from] PolarsError),
}

/// Which yearly report to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Performance,
    Delay,
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "performance" => Ok(ReportType::Performance),
            "delay" => Ok(ReportType::Delay),
            other => Err(format!("unknown report type '{other}'")),
        }
    }
}

/// User selection state. Either field may still be unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection {
    pub report: Option<ReportType>,
    pub year: Option<u16>,
}

impl Selection {
    pub fn new(report: ReportType, year: u16) -> Self {
        Self {
            report: Some(report),
            year: Some(year),
        }
    }
}

/// The interaction handler: holds the immutable flight table and answers
/// selections with five chart specifications.
pub struct Dashboard {
    flights: DataFrame,
}

impl Dashboard {
    /// Wrap the loaded flight table. The table is never mutated; every
    /// render works on a per-request filtered copy.
    pub fn new(flights: DataFrame) -> Self {
        Self { flights }
    }

    /// Number of flight-leg records backing the dashboard.
    pub fn row_count(&self) -> usize {
        self.flights.height()
    }

    /// Compute the five charts for a selection.
    ///
    /// Incomplete or empty selections come back as explicit error values for
    /// the caller to present; nothing here panics on user input.
    pub fn render(&self, selection: &Selection) -> Result<[ChartSpec; 5], DashboardError> {
        let report = selection.report.ok_or(DashboardError::MissingReportType)?;
        let year = selection.year.ok_or(DashboardError::MissingYear)?;
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(DashboardError::UnsupportedYear(year));
        }

        let filtered = filter_year(&self.flights, year)?;
        if filtered.height() == 0 {
            return Err(DashboardError::NoFlights(year));
        }
        debug!(year, rows = filtered.height(), ?report, "rendering report");

        let charts = match report {
            ReportType::Performance => performance_charts(&performance_tables(&filtered)?)?,
            ReportType::Delay => delay_charts(&delay_tables(&filtered)?)?,
        };
        Ok(charts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::columns::{
        AIR_TIME, CANCELLATION_CODE, CARRIER_DELAY, DEST_STATE, DIV_AIRPORT_LANDINGS, FLIGHTS,
        LATE_AIRCRAFT_DELAY, MONTH, NAS_DELAY, ORIGIN_STATE, REPORTING_AIRLINE, SECURITY_DELAY,
        WEATHER_DELAY, YEAR,
    };

    fn dashboard() -> Dashboard {
        let flights = df!(
            YEAR => &[2019i32, 2019, 2019, 2020],
            MONTH => &[1i32, 1, 2, 1],
            REPORTING_AIRLINE => &["AA", "DL", "AA", "AA"],
            ORIGIN_STATE => &["TX", "GA", "TX", "CA"],
            DEST_STATE => &["CA", "TX", "GA", "TX"],
            FLIGHTS => &[1.0f64, 1.0, 1.0, 1.0],
            AIR_TIME => &[120.0f64, 95.0, 110.0, 100.0],
            CANCELLATION_CODE => &["A", "B", "A", "C"],
            DIV_AIRPORT_LANDINGS => &[0.0f64, 1.0, 0.0, 0.0],
            CARRIER_DELAY => &[10.0f64, 5.0, 0.0, 3.0],
            WEATHER_DELAY => &[0.0f64, 4.0, 2.0, 0.0],
            NAS_DELAY => &[1.0f64, 2.0, 0.0, 5.0],
            SECURITY_DELAY => &[0.0f64, 1.0, 0.0, 0.0],
            LATE_AIRCRAFT_DELAY => &[12.0f64, 7.0, 9.0, 2.0],
        )
        .unwrap();
        Dashboard::new(flights)
    }

    #[test]
    fn performance_selection_yields_five_charts() {
        let charts = dashboard()
            .render(&Selection::new(ReportType::Performance, 2019))
            .unwrap();
        assert_eq!(charts.len(), 5);
        assert_eq!(charts[0].kind.name(), "bar");
    }

    #[test]
    fn delay_selection_yields_five_line_charts() {
        let charts = dashboard()
            .render(&Selection::new(ReportType::Delay, 2020))
            .unwrap();
        assert!(charts.iter().all(|c| c.kind.name() == "line"));
    }

    #[test]
    fn unset_year_is_an_explicit_error() {
        let selection = Selection {
            report: Some(ReportType::Performance),
            year: None,
        };
        let err = dashboard().render(&selection).unwrap_err();
        assert!(matches!(err, DashboardError::MissingYear));
    }

    #[test]
    fn unset_report_type_is_an_explicit_error() {
        let selection = Selection {
            report: None,
            year: Some(2019),
        };
        let err = dashboard().render(&selection).unwrap_err();
        assert!(matches!(err, DashboardError::MissingReportType));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let err = dashboard()
            .render(&Selection::new(ReportType::Delay, 2021))
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnsupportedYear(2021)));
    }

    #[test]
    fn year_without_rows_reports_empty_result() {
        let err = dashboard()
            .render(&Selection::new(ReportType::Performance, 2007))
            .unwrap_err();
        assert!(matches!(err, DashboardError::NoFlights(2007)));
    }

    #[test]
    fn report_type_parses_case_insensitively() {
        assert_eq!("Performance".parse(), Ok(ReportType::Performance));
        assert_eq!("DELAY".parse(), Ok(ReportType::Delay));
        assert!("weather".parse::<ReportType>().is_err());
    }
}

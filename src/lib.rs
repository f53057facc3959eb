//! Flightboard - US Domestic Airline Performance & Delay Report Engine
//!
//! The computation core of an airline statistics dashboard: load the flight
//! record table once, then answer (report type, year) selections with five
//! declarative chart specifications.

pub mod charts;
pub mod dashboard;
pub mod data;
pub mod reports;

pub use charts::{ChartKind, ChartSpec};
pub use dashboard::{Dashboard, DashboardError, ReportType, Selection};
pub use data::{DatasetLoader, LoadError};

//! Data module - dataset loading and the flight record table

mod loader;
mod table;

pub use loader::{DatasetLoader, LoadError};
pub use table::{columns, filter_year, AIRLINE_DATA_URL, SUPPORTED_YEARS};

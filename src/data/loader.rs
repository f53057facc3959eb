//! Dataset Loader Module
//! One-time download and parse of the airline CSV using Polars.

use polars::prelude::*;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to download dataset: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Dataset contains no rows")]
    Empty,
}

/// Downloads and parses the flight record table.
///
/// The loader runs once at startup; the resulting DataFrame is immutable and
/// shared read-only by every report computation. There is no retry policy:
/// without data the application has nothing to show, so a failed fetch is
/// fatal to the caller.
pub struct DatasetLoader {
    type_hints: Schema,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader with the column type hints the airline extract needs.
    ///
    /// The diversion airport/tail-number columns are almost entirely null, so
    /// schema inference flips between types across samples; pin them to
    /// String.
    pub fn new() -> Self {
        let type_hints = Schema::from_iter([
            Field::new("Div1Airport".into(), DataType::String),
            Field::new("Div1TailNum".into(), DataType::String),
            Field::new("Div2Airport".into(), DataType::String),
            Field::new("Div2TailNum".into(), DataType::String),
        ]);

        Self { type_hints }
    }

    /// Fetch the CSV resource over HTTP and materialize it.
    pub fn fetch(&self, url: &str) -> Result<DataFrame, LoadError> {
        info!(url, "downloading airline dataset");
        let response = reqwest::blocking::get(url)?.error_for_status()?;
        let bytes = response.bytes()?;
        debug!(bytes = bytes.len(), "download complete");

        self.parse(&bytes)
    }

    /// Parse CSV bytes into a DataFrame.
    ///
    /// The source file is ISO-8859-1 encoded, hence the lossy decoding.
    pub fn parse(&self, bytes: &[u8]) -> Result<DataFrame, LoadError> {
        let df = CsvReadOptions::default()
            .with_infer_schema_length(Some(10_000))
            .with_ignore_errors(true)
            .with_schema_overwrite(Some(Arc::new(self.type_hints.clone())))
            .map_parse_options(|opts| opts.with_encoding(CsvEncoding::LossyUtf8))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()?;

        if df.height() == 0 {
            return Err(LoadError::Empty);
        }

        info!(rows = df.height(), cols = df.width(), "dataset loaded");
        Ok(df)
    }
}

//! Flightboard - US Domestic Airline Performance & Delay Report Engine
//!
//! Loads the airline dataset once, then answers interactive selections of
//! the form `<report> <year>` with the five charts of that report.

use anyhow::{Context, Result};
use flightboard::data::AIRLINE_DATA_URL;
use flightboard::{Dashboard, DatasetLoader, Selection};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flights = DatasetLoader::new()
        .fetch(AIRLINE_DATA_URL)
        .context("failed to load the airline dataset")?;
    let dashboard = Dashboard::new(flights);
    info!(rows = dashboard.row_count(), "dashboard ready");

    println!("US Domestic Airline Flights Performance");
    println!("Enter a selection: <performance|delay> <2005-2020>, or 'quit'.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        match dashboard.render(&parse_selection(line)) {
            Ok(charts) => {
                for chart in &charts {
                    println!("\n{} [{}]", chart.title, chart.kind.name());
                    println!("{}", chart.data);
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Parse a `<report> <year>` line; unrecognized tokens leave the field unset
/// so the dashboard reports the missing selection.
fn parse_selection(line: &str) -> Selection {
    let mut tokens = line.split_whitespace();
    Selection {
        report: tokens.next().and_then(|t| t.parse().ok()),
        year: tokens.next().and_then(|t| t.parse().ok()),
    }
}

//! Reports module - yearly performance and delay aggregations

mod delay;
mod performance;

pub use delay::{delay_tables, DelayTables};
pub use performance::{performance_tables, PerformanceTables};

use polars::prelude::*;

/// Group by `keys` and sum `value`, sorted by the grouping keys.
pub(crate) fn grouped_sum(df: &DataFrame, keys: &[&str], value: &str) -> PolarsResult<DataFrame> {
    let by: Vec<Expr> = keys.iter().map(|k| col(*k)).collect();
    df.clone()
        .lazy()
        .group_by(by.clone())
        .agg([col(value).sum()])
        .sort_by_exprs(by, SortMultipleOptions::default())
        .collect()
}

/// Group by `keys` and average `value`, sorted by the grouping keys.
pub(crate) fn grouped_mean(df: &DataFrame, keys: &[&str], value: &str) -> PolarsResult<DataFrame> {
    let by: Vec<Expr> = keys.iter().map(|k| col(*k)).collect();
    df.clone()
        .lazy()
        .group_by(by.clone())
        .agg([col(value).mean()])
        .sort_by_exprs(by, SortMultipleOptions::default())
        .collect()
}

//! Charts module - declarative chart specifications

mod builders;
mod spec;

pub use builders::{delay_charts, performance_charts};
pub use spec::{ChartKind, ChartSpec};

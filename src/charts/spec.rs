//! Chart Specification Module
//! Renderer-independent chart descriptions: kind, data, bindings, title.

use polars::prelude::*;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Chart kind with its column bindings.
///
/// Bindings name columns of the chart's derived table, mirroring the
/// conventions of declarative plotting front ends.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    Bar {
        x: String,
        y: String,
        color: String,
    },
    Line {
        x: String,
        y: String,
        color: String,
    },
    Pie {
        values: String,
        names: String,
    },
    Choropleth {
        locations: String,
        color: String,
        color_scale: String,
        range_color: [f64; 2],
    },
    Treemap {
        path: Vec<String>,
        values: String,
        color: String,
        color_scale: String,
    },
}

impl ChartKind {
    /// Short kind name for display.
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar { .. } => "bar",
            ChartKind::Line { .. } => "line",
            ChartKind::Pie { .. } => "pie",
            ChartKind::Choropleth { .. } => "choropleth",
            ChartKind::Treemap { .. } => "treemap",
        }
    }
}

/// A renderable chart: a derived table plus its bindings and title.
///
/// Ephemeral; rebuilt on every interaction and handed straight to whatever
/// renders it.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub data: DataFrame,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, kind: ChartKind, data: DataFrame) -> Self {
        Self {
            title: title.into(),
            kind,
            data,
        }
    }

    /// Serialize the spec for a downstream renderer.
    ///
    /// Data is column-oriented: `{"data": {column: [values...]}}`.
    pub fn to_json(&self) -> Value {
        let mut data = Map::new();
        for column in self.data.get_columns() {
            let series = column.as_materialized_series();
            let values: Vec<Value> = (0..series.len())
                .map(|i| {
                    series
                        .get(i)
                        .map(any_value_to_json)
                        .unwrap_or(Value::Null)
                })
                .collect();
            data.insert(column.name().to_string(), Value::Array(values));
        }

        let mut spec = Map::new();
        spec.insert("title".to_string(), Value::String(self.title.clone()));
        spec.insert(
            "chart".to_string(),
            serde_json::to_value(&self.kind).unwrap_or(Value::Null),
        );
        spec.insert("data".to_string(), Value::Object(data));
        Value::Object(spec)
    }
}

fn any_value_to_json(av: AnyValue) -> Value {
    match av {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int8(v) => Value::from(v),
        AnyValue::Int16(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt8(v) => Value::from(v),
        AnyValue::UInt16(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => Number::from_f64(v as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        AnyValue::Float64(v) => Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        other => Value::String(other.to_string().trim_matches('"').to_string()),
    }
}

//! Sample row types for irisgen.
//!
//! One invocation produces a batch of rows that all share the invocation's
//! logical timestamp; everything else is drawn fresh per row.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Closed interval a measurement field is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl MeasurementRange {
    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Interval for `sepal_length`.
pub const SEPAL_LENGTH: MeasurementRange = MeasurementRange { min: 4.0, max: 8.0 };

/// Interval for `sepal_width`.
pub const SEPAL_WIDTH: MeasurementRange = MeasurementRange { min: 2.0, max: 4.5 };

/// Interval for `petal_length`.
pub const PETAL_LENGTH: MeasurementRange = MeasurementRange { min: 1.0, max: 7.0 };

/// Interval for `petal_width`.
pub const PETAL_WIDTH: MeasurementRange = MeasurementRange { min: 0.1, max: 2.6 };

/// Iris-like label buckets.
///
/// The label set is fixed; every row carries exactly one of these three,
/// chosen uniformly and independently per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    /// Every label a row can carry.
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Lowercase label exactly as written to the output file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

/// One generated record: four bounded measurements, a label, and the
/// logical timestamp of the invocation that produced it.
///
/// Field order matches the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    /// Within [`SEPAL_LENGTH`], rounded to 2 decimal places
    pub sepal_length: f64,

    /// Within [`SEPAL_WIDTH`], rounded to 2 decimal places
    pub sepal_width: f64,

    /// Within [`PETAL_LENGTH`], rounded to 2 decimal places
    pub petal_length: f64,

    /// Within [`PETAL_WIDTH`], rounded to 2 decimal places
    pub petal_width: f64,

    /// Label bucket, uniform over [`Species::ALL`]
    pub label: Species,

    /// Logical timestamp shared by all rows of one invocation
    pub generated_at: DateTime<FixedOffset>,
}

impl SampleRow {
    /// Output column header, in serialization order.
    pub const HEADER: [&'static str; 6] = [
        "sepal_length",
        "sepal_width",
        "petal_length",
        "petal_width",
        "label",
        "generated_at",
    ];
}

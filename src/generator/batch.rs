//! Batch generation of sample rows.

use chrono::{DateTime, FixedOffset};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::{
    MeasurementRange, SampleRow, Species, PETAL_LENGTH, PETAL_WIDTH, SEPAL_LENGTH, SEPAL_WIDTH,
};

/// Draw one measurement uniformly from its closed interval, rounded to
/// 2 decimal places.
fn draw_measurement<R: Rng + ?Sized>(rng: &mut R, range: MeasurementRange) -> f64 {
    let value = rng.random_range(range.min..=range.max);
    (value * 100.0).round() / 100.0
}

/// Generate one batch of sample rows.
///
/// Every row is stamped with `generated_at`, the logical timestamp of the
/// invocation. Measurements are drawn independently per field and per row;
/// the label is uniform over the three species. The caller owns the RNG, so
/// a seeded `StdRng` yields a reproducible batch.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    generated_at: DateTime<FixedOffset>,
) -> Vec<SampleRow> {
    let mut batch = Vec::with_capacity(rows);
    for _ in 0..rows {
        batch.push(SampleRow {
            sepal_length: draw_measurement(rng, SEPAL_LENGTH),
            sepal_width: draw_measurement(rng, SEPAL_WIDTH),
            petal_length: draw_measurement(rng, PETAL_LENGTH),
            petal_width: draw_measurement(rng, PETAL_WIDTH),
            label: *Species::ALL.choose(rng).expect("label set is non-empty"),
            generated_at,
        });
    }
    batch
}

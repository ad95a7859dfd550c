//! One scheduled invocation: generate a batch, append it, report.

use chrono::{DateTime, FixedOffset};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::generator::{append_batch, generate_batch};
use crate::models::{Config, Result};

/// Summary of one invocation, consumed by logging and the CLI only.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Data rows appended
    pub rows_written: usize,

    /// Whether this invocation created the file and wrote the header
    pub header_written: bool,

    /// Output file the rows were appended to
    pub output_path: PathBuf,

    /// Wall-clock duration of the invocation in milliseconds
    pub elapsed_ms: u64,
}

/// Execute one invocation for the given logical timestamp.
///
/// The whole batch is built in memory first, then appended in a single
/// buffered write. Retries and overlap prevention belong to the external
/// scheduler; a failure here propagates and the process exits nonzero.
pub fn run(
    config: &Config,
    logical_ts: DateTime<FixedOffset>,
    seed: Option<u64>,
) -> Result<RunReport> {
    let start = Instant::now();
    let output_path = config.output.path();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let rows = generate_batch(&mut rng, config.generation.rows_per_run, logical_ts);
    let report = append_batch(&output_path, &rows)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    info!(
        rows = report.rows_written,
        header = report.header_written,
        path = %output_path.display(),
        logical_ts = %logical_ts.to_rfc3339(),
        elapsed_ms,
        "Invocation complete"
    );

    Ok(RunReport {
        rows_written: report.rows_written,
        header_written: report.header_written,
        output_path,
        elapsed_ms,
    })
}

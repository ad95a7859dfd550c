//! irisgen - Scheduled generation of synthetic iris-like training rows.
//!
//! One invocation corresponds to one tick of an external scheduler: draw a
//! batch of uniformly-random sample rows stamped with the tick's logical
//! timestamp, then append them to a CSV file, writing the column header only
//! when the file is first created.
//!
//! Scheduling itself stays outside this crate. Cadence, bounded retries, and
//! the no-concurrent-runs guarantee are the scheduler's contract; irisgen
//! records that contract as explicit configuration and can render a crontab
//! integration line for it.

pub mod generator;
pub mod models;

// Re-exports for convenience
pub use generator::{append_batch, generate_batch, run, AppendReport, RunReport};
pub use models::{Config, ConfigError, IrisgenError, Result, SampleRow, Species};

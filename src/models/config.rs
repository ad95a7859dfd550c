//! Configuration models for irisgen.
//!
//! Every knob the original task hardcoded is an explicit configuration
//! value here, including the contract handed to the external scheduler.
//! A missing config file falls back to the compiled defaults, so a bare
//! cron invocation needs no file at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration for irisgen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Output file location
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch generation settings
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Contract consumed by the external scheduler
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Output file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the output file lives in (created on first use)
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Output file name
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated_data")
}

fn default_output_filename() -> String {
    "iris_training_data.csv".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_output_filename(),
        }
    }
}

impl OutputConfig {
    /// Full path of the output file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Batch generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Data rows appended per invocation
    #[serde(default = "default_rows_per_run")]
    pub rows_per_run: usize,
}

fn default_rows_per_run() -> usize {
    100
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rows_per_run: default_rows_per_run(),
        }
    }
}

/// Contract consumed by the external scheduler.
///
/// irisgen never schedules itself; these values describe how the scheduler
/// should invoke `generate` and are surfaced by `validate` and `schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Owner recorded for the scheduled task
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Cron cadence `generate` should run at
    #[serde(default = "default_cron")]
    pub cron: String,

    /// Bounded retries the scheduler applies on failure
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Fixed delay between scheduler retries, in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Maximum concurrently active runs (1 = runs are serialized)
    #[serde(default = "default_max_active_runs")]
    pub max_active_runs: u32,

    /// Whether ticks missed before first enablement are executed
    #[serde(default)]
    pub catchup: bool,
}

fn default_owner() -> String {
    "student".to_string()
}

fn default_cron() -> String {
    "* * * * *".to_string()
}

fn default_retries() -> u32 {
    2
}

fn default_retry_delay_secs() -> u64 {
    60
}

fn default_max_active_runs() -> u32 {
    1
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            cron: default_cron(),
            retries: default_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            max_active_runs: default_max_active_runs(),
            catchup: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Load from `path`, falling back to the compiled defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_original_task() {
        let config = Config::default();
        assert_eq!(config.output.dir, PathBuf::from("generated_data"));
        assert_eq!(config.output.filename, "iris_training_data.csv");
        assert_eq!(
            config.output.path(),
            PathBuf::from("generated_data/iris_training_data.csv")
        );
        assert_eq!(config.generation.rows_per_run, 100);
        assert_eq!(config.schedule.owner, "student");
        assert_eq!(config.schedule.cron, "* * * * *");
        assert_eq!(config.schedule.retries, 2);
        assert_eq!(config.schedule.retry_delay_secs, 60);
        assert_eq!(config.schedule.max_active_runs, 1);
        assert!(!config.schedule.catchup);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generation.rows_per_run, 100);
        assert_eq!(config.schedule.retries, 2);
    }

    #[test]
    fn test_partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [output]
            dir = "/var/lib/irisgen"

            [schedule]
            cron = "*/5 * * * *"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.dir, PathBuf::from("/var/lib/irisgen"));
        assert_eq!(config.output.filename, "iris_training_data.csv");
        assert_eq!(config.schedule.cron, "*/5 * * * *");
        assert_eq!(config.schedule.owner, "student");
    }

    #[test]
    fn test_from_file_and_load_or_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("irisgen.toml");

        // Missing file falls back to defaults
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.generation.rows_per_run, 100);

        std::fs::write(&path, "[generation]\nrows_per_run = 25\n").unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.generation.rows_per_run, 25);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("irisgen.toml");
        std::fs::write(&path, "[output\ndir =").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

//! irisgen CLI - scheduled generation of synthetic iris-like training rows.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::{Parser, Subcommand};
use irisgen::{run, Config, IrisgenError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "irisgen")]
#[command(version)]
#[command(about = "Generate synthetic iris-like training rows on an external schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "irisgen.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scheduled invocation: append a batch of rows to the output file
    Generate {
        /// Logical timestamp of this tick (ISO-8601); defaults to current UTC time
        #[arg(short, long)]
        timestamp: Option<String>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate configuration file
    Validate,

    /// Print the crontab line wiring `generate` to the configured cadence
    Schedule,

    /// Show example configuration
    Example,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# irisgen configuration file

[output]
dir = "generated_data"
filename = "iris_training_data.csv"

[generation]
rows_per_run = 100

# Contract consumed by the external scheduler; irisgen never schedules itself.
[schedule]
owner = "student"
cron = "* * * * *"   # every minute
retries = 2
retry_delay_secs = 60
max_active_runs = 1
catchup = false
"#;
    println!("{example}");
}

/// Resolve the logical timestamp for this invocation.
///
/// The scheduler normally injects one; a bare cron invocation cannot, so
/// the wall clock stands in for the tick time.
fn parse_logical_timestamp(value: Option<String>) -> Result<DateTime<FixedOffset>, IrisgenError> {
    match value {
        Some(value) => DateTime::parse_from_rfc3339(&value)
            .map_err(|source| IrisgenError::InvalidTimestamp { value, source }),
        None => {
            let now = Utc::now().fixed_offset();
            debug!(logical_ts = %now.to_rfc3339(), "No logical timestamp provided, using wall clock");
            Ok(now)
        }
    }
}

/// Render the crontab entry for the configured cadence.
///
/// `flock -n` carries the no-concurrent-runs contract into plain cron;
/// retries and catchup stay with whichever scheduler honors them.
fn crontab_line(config: &Config, config_path: &Path) -> String {
    let lock = if config.schedule.max_active_runs <= 1 {
        format!("flock -n {}.lock ", config.output.path().display())
    } else {
        String::new()
    };
    format!(
        "{} {}irisgen generate --config {}",
        config.schedule.cron,
        lock,
        config_path.display()
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
            return Ok(());
        }

        Commands::Validate => {
            let config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            info!("Configuration is valid");
            info!("  Output:    {}", config.output.path().display());
            info!("  Rows/run:  {}", config.generation.rows_per_run);
            info!(
                "  Schedule:  '{}' (owner: {}, retries: {}, retry delay: {}s)",
                config.schedule.cron,
                config.schedule.owner,
                config.schedule.retries,
                config.schedule.retry_delay_secs
            );
            info!(
                "  Max active runs: {}, catchup: {}",
                config.schedule.max_active_runs, config.schedule.catchup
            );
            return Ok(());
        }

        Commands::Schedule => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
            println!("{}", crontab_line(&config, &cli.config));
            return Ok(());
        }

        Commands::Generate { timestamp, seed } => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

            let logical_ts = parse_logical_timestamp(timestamp)?;
            let report = run(&config, logical_ts, seed)?;

            println!(
                "Wrote {} rows to {} at {}",
                report.rows_written,
                report.output_path.display(),
                logical_ts.to_rfc3339()
            );
        }
    }

    Ok(())
}

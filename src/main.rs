//! Paa Perfect Hash - command-line entrypoint.
//!
//! Builds perfect hash tables from JSON item files, answers lookups against them
//! and manages the tool's configuration file.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use paa_phf_lib::config::{self, ConfigLoader, LogConfig, PaaConfig, ENV_PREFIX};
use paa_phf_lib::error::{report_error, ErrorContext, PaaError, PaaResult};
use paa_phf_lib::item_file;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Paa perfect hash tool.
#[derive(Parser, Debug)]
#[clap(name = "paa_phf", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a table from an item file and report its statistics
    Build {
        /// JSON item file: an object or an array of [key, value] pairs
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Write the seed and slot layout as JSON to this path
        #[clap(short, long, value_parser)]
        layout: Option<PathBuf>,
    },

    /// Build a table from an item file and look up one key
    Lookup {
        /// JSON item file: an object or an array of [key, value] pairs
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Key to look up
        #[clap(short, long)]
        key: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> PaaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PaaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn build(input: &Path, layout: Option<&Path>) -> PaaResult<()> {
    let table_config = config::get_global_config().get().build.to_table_config();
    let table = item_file::build_from_file(input, table_config)?;
    let stats = table.stats();

    info!(
        items = stats.item_count,
        slots = stats.slot_count,
        buckets = stats.bucket_count,
        empty_buckets = stats.empty_buckets,
        largest_bucket = stats.largest_bucket,
        total_attempts = stats.total_attempts,
        max_bucket_attempts = stats.max_bucket_attempts,
        load_factor = stats.load_factor(),
        "Table built"
    );

    if let Some(path) = layout {
        let json = serde_json::to_string_pretty(&table.layout())?;
        std::fs::write(path, json)?;
        info!("Layout written to {:?}", path);
    }

    Ok(())
}

fn lookup(input: &Path, key: &str) -> PaaResult<()> {
    let table_config = config::get_global_config().get().build.to_table_config();
    let table = item_file::build_from_file(input, table_config)?;

    match table.get(key) {
        Some(value) => println!("{value}"),
        None => {
            info!(key, "Key not found");
            process::exit(2);
        }
    }
    Ok(())
}

fn gen_config(output: &Path) -> PaaResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&PaaConfig::default())
        .map_err(|e| PaaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> PaaResult<()> {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;

    if let Command::GenConfig { output } = &args.command {
        return gen_config(output);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    paa_phf_lib::init(config);

    let result = match &args.command {
        Command::Build { input, layout } => build(input, layout.as_deref()),
        Command::Lookup { input, key } => lookup(input, key),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    };

    if let Err(e) = result {
        report_error(ErrorContext::new(e, "paa_phf").with_details(format!("{:?}", args.command)));
        process::exit(1);
    }
    Ok(())
}

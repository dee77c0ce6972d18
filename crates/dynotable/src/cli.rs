//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;

/// Create and manage DynamoDB tables from JSON schemas.
#[derive(Debug, Parser)]
#[command(name = "dynotable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Prefix prepended to table names.
    #[arg(long, env = "DYNOTABLE_PREFIX")]
    pub prefix: Option<String>,

    /// Separator between prefix and table name.
    #[arg(long, env = "DYNOTABLE_DELIMITER", default_value = ".")]
    pub delimiter: String,

    /// AWS region.
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom endpoint URL (e.g., http://localhost:8000 for local DynamoDB).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Delay between status polls in milliseconds.
    #[arg(long, env = "DYNOTABLE_POLL_INTERVAL_MS", default_value = "1000")]
    pub poll_interval_ms: u64,

    /// Maximum number of status polls when waiting.
    #[arg(long, env = "DYNOTABLE_MAX_WAIT_ATTEMPTS", default_value = "60")]
    pub max_wait_attempts: u32,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Connection configuration from the parsed options.
    pub fn config(&self) -> Config {
        Config {
            prefix: self.prefix.clone().filter(|p| !p.is_empty()),
            delimiter: self.delimiter.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            poll_interval_ms: self.poll_interval_ms,
            max_wait_attempts: self.max_wait_attempts,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a table from a JSON schema file.
    Create {
        /// Path to the schema file.
        #[arg(long, short)]
        schema: PathBuf,

        /// Table name to use instead of the schema's `TableName`.
        #[arg(long)]
        name: Option<String>,

        /// Do not apply the prefix.
        #[arg(long)]
        raw: bool,

        /// Wait until the table is active.
        #[arg(long)]
        wait: bool,
    },
    /// Show a table's status.
    Describe {
        /// Table name.
        table: String,

        /// Do not apply the prefix.
        #[arg(long)]
        raw: bool,
    },
    /// Delete a table.
    Drop {
        /// Table name.
        table: String,

        /// Do not apply the prefix.
        #[arg(long)]
        raw: bool,

        /// Wait until the table is gone.
        #[arg(long)]
        wait: bool,
    },
    /// List tables under the prefix.
    List,
}

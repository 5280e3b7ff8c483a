//! CLI parser and config loading.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "aqi-bot")]
#[command(about = "LINE air-quality bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the webhook on port 8000 (secrets from env).
    Run {
        /// File whose contents are appended to every reply [default: aqi-status]
        #[arg(short, long)]
        status_file: Option<PathBuf>,
    },
}

/// Load BotConfig from environment. `status_file` overrides the default status file if provided.
pub fn load_config(status_file: Option<PathBuf>) -> Result<BotConfig> {
    BotConfig::load(status_file)
}

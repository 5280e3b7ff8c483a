//! Binary for the air-quality LINE bot.

use anyhow::Result;
use aqbot_core::init_tracing;
use aqi_bot::{load_config, run_bot, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { status_file } => {
            let config = load_config(status_file)?;
            init_tracing(&config.log_file)?;
            run_bot(config).await
        }
    }
}

//! # Air-quality LINE bot application
//!
//! Wires the dataset fetcher, handlers, handler chain and LINE channel. Loads config from env
//! and serves the webhook callback.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use runner::{build_state, run_bot};

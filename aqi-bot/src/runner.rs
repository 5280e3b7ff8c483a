//! Wiring: fetcher → AqiHandler (owning snapshot + status note) → chain → LINE server.

use std::sync::Arc;

use anyhow::Result;
use aqi_dataset::HttpDatasetFetcher;
use aqi_handlers::{load_status_note, AqiHandler, LoggingHandler};
use handler_chain::HandlerChain;
use line_channel::{mask_token, run_server, AppState, LineBotAdapter};
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Builds the server state: the handler chain (logging, then dispatch) and the LINE reply adapter.
pub fn build_state(config: &BotConfig, status_note: String) -> AppState {
    let source = Arc::new(HttpDatasetFetcher::with_url(config.data_url.clone()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(AqiHandler::new(source, status_note)));
    let bot = Arc::new(LineBotAdapter::with_api_base(
        config.line.channel_access_token.clone(),
        config.line.api_base().to_string(),
    ));
    AppState::new(config.line.channel_secret.clone(), chain, bot)
}

/// Validates config, reads the status note once, and serves until the server fails.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    let status_note = load_status_note(&config.status_file);
    info!(
        access_token = %mask_token(&config.line.channel_access_token),
        api_base = %config.line.api_base(),
        data_url = %config.data_url,
        status_note_len = status_note.len(),
        "Bot created"
    );

    run_server(build_state(&config, status_note)).await
}

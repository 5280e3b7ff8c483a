//! Bot config: LINE channel, data source, logging and status file. Loaded from env.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use aqi_dataset::DEFAULT_DATA_URL;
use aqi_handlers::DEFAULT_STATUS_FILE;
use line_channel::LineConfig;

/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "logs/aqi-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// ChannelSecret, ChannelAccessToken, LINE_API_URL
    pub line: LineConfig,
    /// AQI_DATA_URL; the EPA open-data feed when unset
    pub data_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// Status note file, read once at startup
    pub status_file: PathBuf,
}

impl BotConfig {
    /// Load from environment variables. `status_file` overrides the default `aqi-status` if provided.
    pub fn load(status_file: Option<PathBuf>) -> Result<Self> {
        let line = LineConfig::from_env()?;
        let data_url = env::var("AQI_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let status_file = status_file.unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_FILE));

        Ok(Self {
            line,
            data_url,
            log_file,
            status_file,
        })
    }

    /// Validate config (channel secrets present, URLs well-formed).
    pub fn validate(&self) -> Result<()> {
        self.line.validate()?;
        if reqwest::Url::parse(&self.data_url).is_err() {
            anyhow::bail!("AQI_DATA_URL is set but not a valid URL: {}", self.data_url);
        }
        Ok(())
    }
}

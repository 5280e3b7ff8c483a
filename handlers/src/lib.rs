//! # Handlers for the air-quality bot
//!
//! Parses a text command into a [`Query`], resolves it against the current dataset snapshot and
//! renders the reply. [`AqiHandler`] is the dispatch handler that drives parse → refresh →
//! resolve → format for each message; [`LoggingHandler`] logs traffic around it.

mod aqi_handler;
mod logging;
mod query;
mod reply;
mod resolver;
mod status;

#[cfg(test)]
mod test;

pub use aqi_handler::AqiHandler;
pub use logging::LoggingHandler;
pub use query::{parse_query, Metric, Query};
pub use reply::{
    format_metric, format_text_reply, FORMAT_ERROR_REPLY, NO_DATA_REPLY, STICKER_ACK_TEXT,
    STICKER_PACKAGE_ID, STICKER_ID,
};
pub use resolver::{find_site, resolve};
pub use status::{load_status_note, DEFAULT_STATUS_FILE};

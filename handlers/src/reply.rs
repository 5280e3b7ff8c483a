//! User-facing reply strings. These are the bot's whole output vocabulary and must stay byte-exact.

use aqi_dataset::AirQualityRecord;

use crate::query::Metric;

/// Reply when the command does not parse.
pub const FORMAT_ERROR_REPLY: &str = "輸入格式錯誤，AQI格式需為: 地區; PM2.5格式需為: 地區 PM2.5";

/// Reply when no record carries the requested site name.
pub const NO_DATA_REPLY: &str = "無此地區的空氣品質資訊";

/// Text sent back for any sticker.
pub const STICKER_ACK_TEXT: &str = "測試測試";
pub const STICKER_PACKAGE_ID: &str = "1";
pub const STICKER_ID: &str = "1";

/// Renders the requested metric of `record`.
pub fn format_metric(metric: Metric, record: &AirQualityRecord) -> String {
    match metric {
        Metric::Aqi => format!("{}的 AQI(空氣品質指標) 數值為 {}", record.site_name, record.aqi),
        Metric::Pm25 => format!("{}的 PM2.5 數值為 {}", record.site_name, record.pm25),
    }
}

/// First reply part for a text message: the inbound message id, then the reply text.
pub fn format_text_reply(message_id: &str, reply: &str) -> String {
    format!("{}: {}", message_id, reply)
}

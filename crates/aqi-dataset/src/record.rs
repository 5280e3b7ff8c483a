//! One monitoring site's latest readings, exactly as the open-data feed ships them.

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered snapshot of site records; upstream order is kept.
pub type Dataset = Vec<AirQualityRecord>;

/// Latest readings for one site. Every field is text (numbers included) and is never
/// parsed or validated; fields missing or `null` upstream are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirQualityRecord {
    #[serde(rename = "SiteName", deserialize_with = "text")]
    pub site_name: String,
    #[serde(rename = "County", deserialize_with = "text")]
    pub county: String,
    #[serde(rename = "AQI", deserialize_with = "text")]
    pub aqi: String,
    #[serde(rename = "Pollutant", deserialize_with = "text")]
    pub pollutant: String,
    #[serde(rename = "Status", deserialize_with = "text")]
    pub status: String,
    #[serde(rename = "SO2", deserialize_with = "text")]
    pub so2: String,
    #[serde(rename = "CO", deserialize_with = "text")]
    pub co: String,
    #[serde(rename = "CO_8hr", deserialize_with = "text")]
    pub co_8hr: String,
    #[serde(rename = "O3", deserialize_with = "text")]
    pub o3: String,
    #[serde(rename = "O3_8hr", deserialize_with = "text")]
    pub o3_8hr: String,
    #[serde(rename = "PM10", deserialize_with = "text")]
    pub pm10: String,
    #[serde(rename = "PM2.5", deserialize_with = "text")]
    pub pm25: String,
    #[serde(rename = "NO2", deserialize_with = "text")]
    pub no2: String,
    #[serde(rename = "NOx", deserialize_with = "text")]
    pub nox: String,
    #[serde(rename = "NO", deserialize_with = "text")]
    pub no: String,
    #[serde(rename = "WindSpeed", deserialize_with = "text")]
    pub wind_speed: String,
    #[serde(rename = "WindDirec", deserialize_with = "text")]
    pub wind_direction: String,
    #[serde(rename = "PublishTime", deserialize_with = "text")]
    pub publish_time: String,
    #[serde(rename = "PM2.5_AVG", deserialize_with = "text")]
    pub pm25_avg: String,
    #[serde(rename = "PM10_AVG", deserialize_with = "text")]
    pub pm10_avg: String,
    #[serde(rename = "Latitude", deserialize_with = "text")]
    pub latitude: String,
    #[serde(rename = "Longitude", deserialize_with = "text")]
    pub longitude: String,
}

/// `null` becomes an empty string; any other non-string value is a decode error.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a feed body (a JSON array of records) into a [`Dataset`].
pub fn decode_dataset(body: &str) -> crate::Result<Dataset> {
    Ok(serde_json::from_str(body)?)
}

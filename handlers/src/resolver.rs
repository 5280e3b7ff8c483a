//! Site lookup over a dataset snapshot.

use aqi_dataset::AirQualityRecord;

use crate::query::Metric;
use crate::reply::{format_metric, NO_DATA_REPLY};

/// First record, in dataset order, whose site name equals `site_name` exactly.
/// Later records with the same name are never consulted.
pub fn find_site<'a>(records: &'a [AirQualityRecord], site_name: &str) -> Option<&'a AirQualityRecord> {
    records.iter().find(|r| r.site_name == site_name)
}

/// Reply text for `metric` at `site_name`, or [`NO_DATA_REPLY`] when no record matches.
pub fn resolve(metric: Metric, site_name: &str, records: &[AirQualityRecord]) -> String {
    match find_site(records, site_name) {
        Some(record) => format_metric(metric, record),
        None => NO_DATA_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site_name: &str, aqi: &str, pm25: &str) -> AirQualityRecord {
        AirQualityRecord {
            site_name: site_name.to_string(),
            aqi: aqi.to_string(),
            pm25: pm25.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_aqi_and_pm25() {
        let records = vec![record("台北", "42", "15")];
        assert_eq!(
            resolve(Metric::Aqi, "台北", &records),
            "台北的 AQI(空氣品質指標) 數值為 42"
        );
        assert_eq!(resolve(Metric::Pm25, "台北", &records), "台北的 PM2.5 數值為 15");
    }

    #[test]
    fn test_resolve_empty_dataset() {
        for metric in [Metric::Aqi, Metric::Pm25] {
            assert_eq!(resolve(metric, "台北", &[]), NO_DATA_REPLY);
        }
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let records = vec![record("Taipei", "42", "15"), record("台北市", "50", "20")];
        assert_eq!(resolve(Metric::Aqi, "taipei", &records), NO_DATA_REPLY);
        assert_eq!(resolve(Metric::Aqi, "台北", &records), NO_DATA_REPLY);
        assert_eq!(resolve(Metric::Aqi, " Taipei", &records), NO_DATA_REPLY);
    }

    #[test]
    fn test_resolve_first_duplicate_wins() {
        let records = vec![
            record("B", "7", "1"),
            record("A", "10", "2"),
            record("A", "99", "3"),
        ];
        assert_eq!(
            resolve(Metric::Aqi, "A", &records),
            "A的 AQI(空氣品質指標) 數值為 10"
        );
        assert_eq!(resolve(Metric::Pm25, "A", &records), "A的 PM2.5 數值為 2");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let records = vec![record("台北", "42", "15"), record("高雄", "97", "33")];
        let first = resolve(Metric::Pm25, "高雄", &records);
        for _ in 0..5 {
            assert_eq!(resolve(Metric::Pm25, "高雄", &records), first);
        }
    }
}

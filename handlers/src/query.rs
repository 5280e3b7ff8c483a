//! Command grammar: `<site>` asks for AQI, `<site> PM2.5` asks for PM2.5. Nothing else parses.

use std::fmt;

/// Measurement a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Aqi,
    Pm25,
}

impl Metric {
    /// Name as users type it and as it appears in replies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Aqi => "AQI",
            Metric::Pm25 => "PM2.5",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command: which metric, for which site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub metric: Metric,
    pub site_name: String,
}

/// Parses a text command. Tokens are split on whitespace only; the site name and the
/// `PM2.5` keyword are matched exactly (no case folding). Returns `None` for anything that
/// is not one token, or two tokens ending in `PM2.5`.
pub fn parse_query(text: &str) -> Option<Query> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [site] => Some(Query {
            metric: Metric::Aqi,
            site_name: (*site).to_string(),
        }),
        [site, keyword] if *keyword == Metric::Pm25.as_str() => Some(Query {
            metric: Metric::Pm25,
            site_name: (*site).to_string(),
        }),
        _ => None,
    }
}

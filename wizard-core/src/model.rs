use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::Condition;

/// A fully normalized current-weather observation for one location.
///
/// Temperatures are stored in Fahrenheit (every upstream request uses
/// `units=imperial`); Celsius is derived on demand for display. A reading is
/// only ever constructed from a complete upstream payload, so callers never
/// see a partially populated one.
#[derive(Debug, Clone)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    pub temp_f: f64,
    pub feels_like_f: f64,
    pub temp_min_f: f64,
    pub temp_max_f: f64,
    pub condition: Condition,
    /// Free-text description with the first character capitalized.
    pub description: String,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub cloudiness_pct: u8,
    pub wind_speed_mph: f64,
    pub wind_deg: u16,
    pub observed_at: DateTime<Utc>,
}

/// One entry of the recent-searches list.
///
/// Duplicates are allowed and insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub city: String,
    pub country: String,
}

impl RecentEntry {
    /// The query string used to look this entry up again, e.g. "Paris,FR".
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_entry_query_joins_city_and_country() {
        let entry = RecentEntry { city: "Paris".into(), country: "FR".into() };
        assert_eq!(entry.query(), "Paris,FR");
    }
}

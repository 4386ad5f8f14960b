use serde::{Deserialize, Serialize};

use crate::clients::weather::DailyForecast;
use crate::entities::weathers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub forecast: Option<String>,
    /// Calendar date of the forecast day, `YYYY-MM-DD`.
    pub time: String,
}

impl WeatherEntry {
    pub fn from_daily(day: &DailyForecast) -> Self {
        let time = chrono::DateTime::from_timestamp(day.time, 0)
            .map(|dt| dt.date_naive().to_string())
            .unwrap_or_default();

        Self {
            forecast: day.summary.clone(),
            time,
        }
    }
}

impl From<weathers::Model> for WeatherEntry {
    fn from(row: weathers::Model) -> Self {
        Self {
            forecast: row.forecast,
            time: row.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_to_calendar_date() {
        let day = DailyForecast {
            summary: Some("Partly cloudy".to_string()),
            time: 86_400,
        };

        let entry = WeatherEntry::from_daily(&day);
        assert_eq!(entry.time, "1970-01-02");
        assert_eq!(entry.forecast.as_deref(), Some("Partly cloudy"));
    }

    #[test]
    fn test_missing_summary() {
        let day = DailyForecast {
            summary: None,
            time: 0,
        };

        let entry = WeatherEntry::from_daily(&day);
        assert_eq!(entry.forecast, None);
        assert_eq!(entry.time, "1970-01-01");
    }
}

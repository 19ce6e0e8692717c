//! Weather data shown next to the map

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Current conditions at the selected location. Display only; never fed into scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: GpsCoordinates,
    /// Short condition, e.g. "Rain"
    pub condition: String,
    /// Longer description, e.g. "light rain"
    pub description: String,
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<i32>,
    pub rain_1h_mm: Option<f64>,
    pub rain_3h_mm: Option<f64>,
}

impl WeatherSnapshot {
    /// Most recent rain volume: the 1h reading, else the 3h reading, else zero
    pub fn rain_mm(&self) -> f64 {
        self.rain_1h_mm
            .filter(|mm| *mm > 0.0)
            .or(self.rain_3h_mm.filter(|mm| *mm > 0.0))
            .unwrap_or(0.0)
    }

    /// "31°C", or "--" when the temperature is unknown
    pub fn temperature_display(&self) -> String {
        match self.temperature_celsius {
            Some(t) => format!("{}°C", t.round()),
            None => "--".to_string(),
        }
    }

    /// "64%", or "--" when the humidity is unknown
    pub fn humidity_display(&self) -> String {
        match self.humidity_percent {
            Some(h) => format!("{}%", h),
            None => "--".to_string(),
        }
    }

    pub fn rain_display(&self) -> String {
        format!("{} mm", self.rain_mm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rain_1h_mm: Option<f64>, rain_3h_mm: Option<f64>) -> WeatherSnapshot {
        WeatherSnapshot {
            location: GpsCoordinates::new(31.1471, 75.3412),
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
            temperature_celsius: Some(27.6),
            humidity_percent: Some(81),
            rain_1h_mm,
            rain_3h_mm,
        }
    }

    #[test]
    fn test_rain_prefers_one_hour_reading() {
        assert_eq!(snapshot(Some(1.2), Some(4.0)).rain_mm(), 1.2);
        assert_eq!(snapshot(None, Some(4.0)).rain_mm(), 4.0);
        assert_eq!(snapshot(None, None).rain_mm(), 0.0);
        assert_eq!(snapshot(None, None).rain_display(), "0 mm");
    }

    #[test]
    fn test_display_values() {
        let weather = snapshot(None, None);
        assert_eq!(weather.temperature_display(), "28°C");
        assert_eq!(weather.humidity_display(), "81%");

        let unknown = WeatherSnapshot {
            temperature_celsius: None,
            humidity_percent: None,
            ..weather
        };
        assert_eq!(unknown.temperature_display(), "--");
        assert_eq!(unknown.humidity_display(), "--");
    }
}

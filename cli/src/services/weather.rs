//! Weather service for the location panel
//!
//! Best effort: one request, no retry, failures reported inline.

use shared::Location;

use crate::config::WeatherConfig;
use crate::error::AppResult;
use crate::external::weather::{CurrentWeather, WeatherClient};

/// Weather lookups for the selected location
#[derive(Clone)]
pub struct WeatherService {
    config: WeatherConfig,
}

impl WeatherService {
    /// Create a new WeatherService with explicit API configuration
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Current conditions at the location
    pub async fn current(&self, location: &Location) -> AppResult<CurrentWeather> {
        let client = WeatherClient::from_config(&self.config)?;

        match client
            .get_current_weather(location.latitude, location.longitude)
            .await
        {
            Ok(current) => Ok(current),
            Err(e) => {
                tracing::warn!(location = %location.display_name, "Weather lookup failed: {}", e);
                Err(e)
            }
        }
    }
}

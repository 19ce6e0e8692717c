//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap "current weather" endpoint. The result
//! is display-only and never feeds into scoring.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{GpsCoordinates, WeatherSnapshot};
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current conditions plus where and when they were observed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub station_name: String,
    pub observed_at: DateTime<Utc>,
    pub snapshot: WeatherSnapshot,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    coord: OWMCoord,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    main: Option<OWMMain>,
    rain: Option<OWMRain>,
    dt: i64,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: Option<f64>,
    humidity: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a client from explicit configuration; fails when no key is set
    pub fn from_config(config: &WeatherConfig) -> AppResult<Self> {
        let api_key = config.api_key().ok_or(AppError::WeatherApiKeyMissing)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::WeatherService(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        let url = format!("{}/weather", self.base_url);

        tracing::debug!(latitude, longitude, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherService(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherService(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Parse a raw OpenWeatherMap body into our format
pub fn parse_current_weather(body: &str) -> AppResult<CurrentWeather> {
    let data: OWMCurrentResponse = serde_json::from_str(body)
        .map_err(|e| AppError::WeatherService(format!("Failed to parse weather response: {}", e)))?;
    Ok(convert_current_response(data))
}

/// Convert OpenWeatherMap current response to our format
fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
    let weather = data.weather.first();

    CurrentWeather {
        station_name: data.name,
        observed_at: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        snapshot: WeatherSnapshot {
            location: GpsCoordinates::new(data.coord.lat, data.coord.lon),
            condition: weather
                .map(|w| w.main.clone())
                .unwrap_or_else(|| "Weather".to_string()),
            description: weather.map(|w| w.description.clone()).unwrap_or_default(),
            temperature_celsius: data.main.as_ref().and_then(|m| m.temp),
            humidity_percent: data.main.as_ref().and_then(|m| m.humidity),
            rain_1h_mm: data.rain.as_ref().and_then(|r| r.one_hour),
            rain_3h_mm: data.rain.as_ref().and_then(|r| r.three_hour),
        },
    }
}

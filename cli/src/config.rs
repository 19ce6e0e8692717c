//! Configuration management for FarmSight
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARMSIGHT_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Simulated analysis configuration
    pub simulation: SimulationConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Delay before a prediction resolves, in milliseconds
    pub prediction_delay_ms: u64,

    /// Delay before an identification resolves, in milliseconds
    pub identification_delay_ms: u64,

    /// Fixed seed for reproducible results; entropy when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// OpenWeatherMap API key
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARMSIGHT_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("simulation.prediction_delay_ms", shared::PREDICTION_DELAY_MS)?
            .set_default(
                "simulation.identification_delay_ms",
                shared::IDENTIFICATION_DELAY_MS,
            )?
            .set_default("weather.api_endpoint", WeatherConfig::DEFAULT_ENDPOINT)?
            .set_default("weather.timeout_secs", 10)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARMSIGHT_ prefix)
            .add_source(
                Environment::with_prefix("FARMSIGHT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            simulation: SimulationConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// No delays and a fixed seed
    pub fn instant(seed: u64) -> Self {
        Self {
            prediction_delay_ms: 0,
            identification_delay_ms: 0,
            seed: Some(seed),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            prediction_delay_ms: shared::PREDICTION_DELAY_MS,
            identification_delay_ms: shared::IDENTIFICATION_DELAY_MS,
            seed: None,
        }
    }
}

impl WeatherConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.openweathermap.org/data/2.5";

    /// The configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

//! Error handling for FarmSight
//!
//! Every failure carries a short user-facing message alongside the detailed
//! error that goes to the log.

use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Parse(#[from] shared::ParseError),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    // External service errors
    #[error("Weather API key is not configured")]
    WeatherApiKeyMissing,

    #[error("Weather service error: {0}")]
    WeatherService(String),

    // Local errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Error payload printed in JSON mode
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub detail: String,
}

impl AppError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Parse(_) => "INVALID_SELECTION",
            AppError::UnknownRegion(_) => "UNKNOWN_REGION",
            AppError::WeatherApiKeyMissing => "WEATHER_API_KEY_MISSING",
            AppError::WeatherService(_) => "WEATHER_SERVICE_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Message meant for the person at the keyboard
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) => (*message).to_string(),
            AppError::Parse(e) => format!("{}. Please pick a value from the list.", e),
            AppError::UnknownRegion(_) => {
                "Unknown region. Use `farmsight regions` to list the presets.".to_string()
            }
            AppError::WeatherApiKeyMissing => {
                "Please configure your OpenWeatherMap API key (FARMSIGHT__WEATHER__API_KEY)."
                    .to_string()
            }
            AppError::WeatherService(_) => {
                "Could not fetch weather data. Invalid key or quota exceeded.".to_string()
            }
            AppError::Io(_) | AppError::Serialization(_) | AppError::Configuration(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.user_message(),
                detail: self.to_string(),
            },
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let error = AppError::Validation("Please select a location");
        assert_eq!(error.user_message(), "Please select a location");
        assert_eq!(error.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_weather_failure_is_generic() {
        let error = AppError::WeatherService("API returned 401".to_string());
        assert_eq!(
            error.user_message(),
            "Could not fetch weather data. Invalid key or quota exceeded."
        );
        let response = error.to_response();
        assert_eq!(response.error.code, "WEATHER_SERVICE_ERROR");
        assert!(response.error.detail.contains("401"));
    }

    #[test]
    fn test_parse_error_converts() {
        let error: AppError = "Sugarcane".parse::<shared::Crop>().unwrap_err().into();
        assert_eq!(error.code(), "INVALID_SELECTION");
        assert!(error.user_message().starts_with("Unknown crop: Sugarcane"));
    }
}

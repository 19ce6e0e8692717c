//! Errors raised when turning user-facing names into domain types

use thiserror::Error;

/// Failure to parse a name picked from a selection control
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Unknown water crop: {0}")]
    UnknownWaterCrop(String),

    #[error("Unknown growth stage: {0}")]
    UnknownGrowthStage(String),

    #[error("Invalid image data: {0}")]
    InvalidImage(String),
}

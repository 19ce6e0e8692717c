//! Crop success prediction models

use serde::{Deserialize, Serialize};

use crate::models::{Crop, Month, Season};
use crate::types::Location;

/// Everything the success predictor needs from the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub crop_name: Crop,
    pub location: Location,
    pub season: Season,
    /// Must be one of `season.months()`
    pub month: Month,
}

impl PredictionRequest {
    pub fn new(crop_name: Crop, location: Location, season: Season, month: Month) -> Self {
        Self {
            crop_name,
            location,
            season,
            month,
        }
    }
}

/// Simulated suitability analysis for one request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub crop_name: Crop,
    pub location_name: String,
    pub season: Season,
    pub month: Month,
    /// 50..=98
    pub suitability_score: u8,
    /// 50..=98
    pub success_rate: u8,
    /// 3..=10
    pub soil_compatibility: u8,
    /// e.g. "4.5 tons per hectare"
    pub yield_estimate: String,
    pub alternative_crops: Vec<String>,
    pub rainfall: RainfallBand,
    pub humidity: HumidityBand,
    pub recommendations: String,
}

impl PredictionResult {
    pub fn suitability_label(&self) -> SuitabilityLabel {
        SuitabilityLabel::from_score(self.suitability_score)
    }

    pub fn soil_label(&self) -> SoilLabel {
        SoilLabel::from_score(self.soil_compatibility)
    }
}

/// Typical annual rainfall of a region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RainfallBand {
    #[serde(rename = "Low (300-500mm)")]
    Low,
    #[serde(rename = "Moderate (500-1000mm)")]
    Moderate,
    #[serde(rename = "High (>1000mm)")]
    High,
}

impl std::fmt::Display for RainfallBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainfallBand::Low => write!(f, "Low (300-500mm)"),
            RainfallBand::Moderate => write!(f, "Moderate (500-1000mm)"),
            RainfallBand::High => write!(f, "High (>1000mm)"),
        }
    }
}

/// Typical relative humidity of a region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HumidityBand {
    #[serde(rename = "Low (30-50%)")]
    Low,
    #[serde(rename = "Moderate (50-60%)")]
    Moderate,
    #[serde(rename = "High (70-80%)")]
    High,
}

impl std::fmt::Display for HumidityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HumidityBand::Low => write!(f, "Low (30-50%)"),
            HumidityBand::Moderate => write!(f, "Moderate (50-60%)"),
            HumidityBand::High => write!(f, "High (70-80%)"),
        }
    }
}

/// Headline shown under the suitability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityLabel {
    HighlySuitable,
    Suitable,
    ModeratelySuitable,
    NotSuitable,
}

impl SuitabilityLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => SuitabilityLabel::HighlySuitable,
            60..=79 => SuitabilityLabel::Suitable,
            40..=59 => SuitabilityLabel::ModeratelySuitable,
            _ => SuitabilityLabel::NotSuitable,
        }
    }
}

impl std::fmt::Display for SuitabilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitabilityLabel::HighlySuitable => write!(f, "Highly Suitable"),
            SuitabilityLabel::Suitable => write!(f, "Suitable"),
            SuitabilityLabel::ModeratelySuitable => write!(f, "Moderately Suitable"),
            SuitabilityLabel::NotSuitable => write!(f, "Not Suitable"),
        }
    }
}

/// Headline shown under the soil compatibility gauge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilLabel {
    Good,
    Average,
    Poor,
}

impl SoilLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            7.. => SoilLabel::Good,
            5..=6 => SoilLabel::Average,
            _ => SoilLabel::Poor,
        }
    }
}

impl std::fmt::Display for SoilLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilLabel::Good => write!(f, "Good"),
            SoilLabel::Average => write!(f, "Average"),
            SoilLabel::Poor => write!(f, "Poor"),
        }
    }
}

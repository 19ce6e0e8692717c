//! Daily irrigation estimate from crop coefficients

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Water need of bare soil before applying the crop coefficient (L/m²/day)
pub const BASE_WATER_NEED: f64 = 5.0;

/// Crops covered by the water calculator and the SMS alert form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WaterCrop {
    #[default]
    Wheat,
    Corn,
    Rice,
    Cotton,
    Sugarcane,
    Soybean,
}

impl WaterCrop {
    pub const ALL: [WaterCrop; 6] = [
        WaterCrop::Wheat,
        WaterCrop::Corn,
        WaterCrop::Rice,
        WaterCrop::Cotton,
        WaterCrop::Sugarcane,
        WaterCrop::Soybean,
    ];

    /// Crop coefficient (Kc) at the given growth stage
    pub fn coefficient(&self, stage: GrowthStage) -> f64 {
        let [initial, development, middle, late] = match self {
            WaterCrop::Wheat => [0.3, 0.7, 1.15, 0.4],
            WaterCrop::Corn => [0.3, 0.7, 1.2, 0.6],
            WaterCrop::Rice => [1.05, 1.2, 1.3, 0.9],
            WaterCrop::Cotton => [0.35, 0.7, 1.2, 0.7],
            WaterCrop::Sugarcane => [0.4, 0.9, 1.25, 0.75],
            WaterCrop::Soybean => [0.4, 0.8, 1.15, 0.5],
        };
        match stage {
            GrowthStage::Initial => initial,
            GrowthStage::Development => development,
            GrowthStage::Middle => middle,
            GrowthStage::Late => late,
        }
    }
}

impl std::fmt::Display for WaterCrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterCrop::Wheat => write!(f, "wheat"),
            WaterCrop::Corn => write!(f, "corn"),
            WaterCrop::Rice => write!(f, "rice"),
            WaterCrop::Cotton => write!(f, "cotton"),
            WaterCrop::Sugarcane => write!(f, "sugarcane"),
            WaterCrop::Soybean => write!(f, "soybean"),
        }
    }
}

impl FromStr for WaterCrop {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        WaterCrop::ALL
            .into_iter()
            .find(|crop| crop.to_string() == wanted)
            .ok_or_else(|| ParseError::UnknownWaterCrop(s.to_string()))
    }
}

/// Growth stage of the crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    #[default]
    Initial,
    Development,
    Middle,
    Late,
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStage::Initial => write!(f, "initial"),
            GrowthStage::Development => write!(f, "development"),
            GrowthStage::Middle => write!(f, "middle"),
            GrowthStage::Late => write!(f, "late"),
        }
    }
}

impl FromStr for GrowthStage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "initial" => Ok(GrowthStage::Initial),
            "development" => Ok(GrowthStage::Development),
            "middle" => Ok(GrowthStage::Middle),
            "late" => Ok(GrowthStage::Late),
            _ => Err(ParseError::UnknownGrowthStage(s.to_string())),
        }
    }
}

/// Input for the water requirement calculator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterRequirementInput {
    pub crop: WaterCrop,
    pub growth_stage: GrowthStage,
    pub area_hectares: f64,
}

/// Estimated daily water need
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterRequirement {
    pub crop: WaterCrop,
    pub growth_stage: GrowthStage,
    pub area_hectares: f64,
    pub coefficient: f64,
    pub liters_per_day: u64,
}

/// Daily water requirement, rounded to whole liters.
///
/// The area must already have passed `validate_area_size`.
pub fn calculate_water_requirement(input: &WaterRequirementInput) -> WaterRequirement {
    let coefficient = input.crop.coefficient(input.growth_stage);
    let liters = BASE_WATER_NEED * coefficient * input.area_hectares;

    WaterRequirement {
        crop: input.crop,
        growth_stage: input.growth_stage,
        area_hectares: input.area_hectares,
        coefficient,
        liters_per_day: liters.round().max(0.0) as u64,
    }
}

//! Crops offered by the crop selector

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Crops the success predictor can analyse
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crop {
    Rice,
    Wheat,
    Maize,
    Chickpea,
    #[serde(rename = "Kidney Bean")]
    KidneyBean,
    #[serde(rename = "Pigeon Pea")]
    PigeonPea,
    #[serde(rename = "Moth Bean")]
    MothBean,
    #[serde(rename = "Mung Bean")]
    MungBean,
    #[serde(rename = "Black Gram")]
    BlackGram,
    Lentil,
    Pomegranate,
    Banana,
    Mango,
    Grapes,
    Watermelon,
    Muskmelon,
    Apple,
    Orange,
    Papaya,
    Coconut,
    Cotton,
    Jute,
    Coffee,
}

impl Crop {
    /// Every crop, in selector order
    pub const ALL: [Crop; 23] = [
        Crop::Rice,
        Crop::Wheat,
        Crop::Maize,
        Crop::Chickpea,
        Crop::KidneyBean,
        Crop::PigeonPea,
        Crop::MothBean,
        Crop::MungBean,
        Crop::BlackGram,
        Crop::Lentil,
        Crop::Pomegranate,
        Crop::Banana,
        Crop::Mango,
        Crop::Grapes,
        Crop::Watermelon,
        Crop::Muskmelon,
        Crop::Apple,
        Crop::Orange,
        Crop::Papaya,
        Crop::Coconut,
        Crop::Cotton,
        Crop::Jute,
        Crop::Coffee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Maize => "Maize",
            Crop::Chickpea => "Chickpea",
            Crop::KidneyBean => "Kidney Bean",
            Crop::PigeonPea => "Pigeon Pea",
            Crop::MothBean => "Moth Bean",
            Crop::MungBean => "Mung Bean",
            Crop::BlackGram => "Black Gram",
            Crop::Lentil => "Lentil",
            Crop::Pomegranate => "Pomegranate",
            Crop::Banana => "Banana",
            Crop::Mango => "Mango",
            Crop::Grapes => "Grapes",
            Crop::Watermelon => "Watermelon",
            Crop::Muskmelon => "Muskmelon",
            Crop::Apple => "Apple",
            Crop::Orange => "Orange",
            Crop::Papaya => "Papaya",
            Crop::Coconut => "Coconut",
            Crop::Cotton => "Cotton",
            Crop::Jute => "Jute",
            Crop::Coffee => "Coffee",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Crop {
    type Err = ParseError;

    /// Case-insensitive; accepts "Mung Bean", "mung bean" and "mung-bean"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ").to_lowercase();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.name().to_lowercase() == wanted)
            .ok_or_else(|| ParseError::UnknownCrop(s.to_string()))
    }
}

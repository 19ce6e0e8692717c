//! Plant identification models and the simulated identifier

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::PlantImage;

/// Result of identifying a plant photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantIdentification {
    pub plant_name: String,
    pub scientific_name: String,
    /// 0.0..=100.0
    pub confidence_percent: f64,
    pub description: String,
}

impl PlantIdentification {
    /// Confidence as shown to the user, e.g. "96% match"
    pub fn display_confidence(&self) -> u8 {
        self.confidence_percent.round().clamp(0.0, 100.0) as u8
    }
}

/// Catalog record the identifier draws from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogPlant {
    pub plant_name: &'static str,
    pub scientific_name: &'static str,
    pub confidence_percent: f64,
    pub description: &'static str,
}

impl From<&CatalogPlant> for PlantIdentification {
    fn from(plant: &CatalogPlant) -> Self {
        PlantIdentification {
            plant_name: plant.plant_name.to_string(),
            scientific_name: plant.scientific_name.to_string(),
            confidence_percent: plant.confidence_percent,
            description: plant.description.to_string(),
        }
    }
}

pub const PLANT_CATALOG: [CatalogPlant; 5] = [
    CatalogPlant {
        plant_name: "Rice",
        scientific_name: "Oryza sativa",
        confidence_percent: 95.8,
        description: "Rice is the seed of the grass species Oryza sativa. As a cereal grain, it is the most widely consumed staple food for a large part of the world's human population, especially in Asia and Africa.",
    },
    CatalogPlant {
        plant_name: "Wheat",
        scientific_name: "Triticum aestivum",
        confidence_percent: 92.3,
        description: "Wheat is a grass widely cultivated for its seed, a cereal grain which is a worldwide staple food. The many species of wheat together make up the genus Triticum.",
    },
    CatalogPlant {
        plant_name: "Maize (Corn)",
        scientific_name: "Zea mays",
        confidence_percent: 94.6,
        description: "Maize, also known as corn, is a cereal grain first domesticated by indigenous peoples in southern Mexico about 10,000 years ago.",
    },
    CatalogPlant {
        plant_name: "Cotton",
        scientific_name: "Gossypium hirsutum",
        confidence_percent: 88.7,
        description: "Cotton is a soft, fluffy staple fiber that grows in a boll, or protective case, around the seeds of the cotton plants. It is a natural fiber most commonly harvested from cotton plants.",
    },
    CatalogPlant {
        plant_name: "Chickpea",
        scientific_name: "Cicer arietinum",
        confidence_percent: 87.2,
        description: "The chickpea is an annual legume of the family Fabaceae. It is one of the earliest cultivated legumes, and currently grown in many countries worldwide.",
    },
];

/// Simulated plant identifier.
///
/// The image is accepted for interface compatibility only; the answer is a
/// uniform draw from [`PLANT_CATALOG`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantIdentifier;

impl PlantIdentifier {
    pub fn new() -> Self {
        Self
    }

    pub fn identify<R: Rng + ?Sized>(&self, _image: &PlantImage, rng: &mut R) -> PlantIdentification {
        let index = rng.gen_range(0..PLANT_CATALOG.len());
        PlantIdentification::from(&PLANT_CATALOG[index])
    }
}

//! Crop success scoring
//!
//! Produces the simulated suitability analysis shown by the success
//! predictor. Scores are random draws nudged by two small affinity tables;
//! everything else is looked up from fixed regional tables. The random
//! source is injected so results are reproducible under a fixed seed.

use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    Crop, HumidityBand, PredictionRequest, PredictionResult, RainfallBand, Season,
};

/// Highest suitability score or success rate ever reported
pub const MAX_SCORE: u8 = 98;
/// Highest soil compatibility ever reported
pub const MAX_SOIL_COMPATIBILITY: u8 = 10;

const REGIONAL_SCORE_BONUS: u8 = 15;
const REGIONAL_SOIL_BONUS: u8 = 2;
const SEASONAL_SCORE_BONUS: u8 = 10;

/// Crops that do well in a region, matched by substring of the location name
const REGIONAL_AFFINITY: [(Crop, &str); 4] = [
    (Crop::Rice, "Bengal"),
    (Crop::Wheat, "Punjab"),
    (Crop::Cotton, "Gujarat"),
    (Crop::Coffee, "Karnataka"),
];

const SEASONAL_AFFINITY: [(Crop, Season); 4] = [
    (Crop::Rice, Season::Kharif),
    (Crop::Wheat, Season::Rabi),
    (Crop::Cotton, Season::Kharif),
    (Crop::Maize, Season::Kharif),
];

/// Alternatives suggested for Kharif sowing
pub const KHARIF_REFERENCE_CROPS: [&str; 6] = [
    "Rice",
    "Maize",
    "Cotton",
    "Mung Bean",
    "Black Gram",
    "Pigeon Pea",
];

/// Alternatives suggested for every other season
pub const RABI_REFERENCE_CROPS: [&str; 5] = ["Wheat", "Chickpea", "Lentil", "Mustard", "Peas"];

pub const YIELD_UNIT: &str = "tons per hectare";

/// Score at which the yield estimate equals the base yield
const REFERENCE_SCORE: i64 = 75;

/// Whether the crop has a regional affinity with the named location
pub fn regional_bonus_applies(crop: Crop, location_name: &str) -> bool {
    REGIONAL_AFFINITY
        .iter()
        .any(|(c, region)| *c == crop && location_name.contains(region))
}

/// Whether the crop is traditionally sown in the season
pub fn seasonal_bonus_applies(crop: Crop, season: Season) -> bool {
    SEASONAL_AFFINITY
        .iter()
        .any(|(c, s)| *c == crop && *s == season)
}

/// Typical annual rainfall for a location, first match wins
pub fn rainfall_band(location_name: &str) -> RainfallBand {
    let has = |region: &str| location_name.contains(region);

    if has("Bengal") || has("Karnataka") {
        RainfallBand::High
    } else if has("Maharashtra") || has("Gujarat") {
        RainfallBand::Moderate
    } else if has("Punjab") {
        RainfallBand::Low
    } else {
        RainfallBand::Moderate
    }
}

/// Typical humidity for a location, first match wins
pub fn humidity_band(location_name: &str) -> HumidityBand {
    let has = |region: &str| location_name.contains(region);

    if has("Bengal") || has("Kerala") {
        HumidityBand::High
    } else if has("Maharashtra") || has("Karnataka") {
        HumidityBand::Moderate
    } else {
        HumidityBand::Low
    }
}

/// Base yield in tons per hectare, if the crop has one on record
pub fn base_yield(crop: Crop) -> Option<Decimal> {
    let tenths = match crop {
        Crop::Rice => 45,
        Crop::Wheat => 32,
        Crop::Maize => 57,
        Crop::Cotton => 18,
        Crop::Chickpea => 12,
        Crop::MungBean => 8,
        Crop::BlackGram => 7,
        Crop::PigeonPea => 10,
        _ => return None,
    };
    Some(Decimal::new(tenths, 1))
}

/// Base yield used for crops without a table entry
pub fn default_base_yield() -> Decimal {
    Decimal::new(25, 1)
}

/// Expected yield in tons per hectare, scaled by `score / 75` and rounded to one decimal
pub fn estimate_yield(crop: Crop, suitability_score: u8) -> Decimal {
    let base = base_yield(crop).unwrap_or_else(default_base_yield);
    let factor = Decimal::from(suitability_score) / Decimal::from(REFERENCE_SCORE);
    (base * factor).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Yield estimate as displayed, e.g. "4.5 tons per hectare"
pub fn format_yield_estimate(crop: Crop, suitability_score: u8) -> String {
    format!("{:.1} {}", estimate_yield(crop, suitability_score), YIELD_UNIT)
}

/// Advice text chosen by suitability score
pub fn recommendation(crop: Crop, suitability_score: u8, location_name: &str, season: Season) -> String {
    if suitability_score >= 80 {
        format!(
            "{} is highly suitable for cultivation in {} during {} season. Ensure proper irrigation and maintain recommended plant spacing for optimal yield.",
            crop, location_name, season
        )
    } else if suitability_score >= 60 {
        format!(
            "{} can be grown in {} during {} season with proper care. Consider using drought-resistant varieties and focus on soil moisture conservation.",
            crop, location_name, season
        )
    } else {
        format!(
            "{} is not ideal for {} during {} season. Consider our alternative crop recommendations that are better suited to your location's climate and soil conditions.",
            crop, location_name, season
        )
    }
}

/// Two or three shuffled alternatives from the season's reference list.
///
/// Kharif uses the Kharif list; Rabi and Zaid both use the Rabi list.
pub fn alternative_crops<R: Rng + ?Sized>(crop: Crop, season: Season, rng: &mut R) -> Vec<String> {
    let reference: &[&str] = match season {
        Season::Kharif => &KHARIF_REFERENCE_CROPS,
        Season::Rabi | Season::Zaid => &RABI_REFERENCE_CROPS,
    };

    let mut alternatives: Vec<&str> = reference
        .iter()
        .copied()
        .filter(|name| *name != crop.name())
        .collect();
    alternatives.shuffle(rng);

    let keep = rng.gen_range(2..=3).min(alternatives.len());
    alternatives
        .into_iter()
        .take(keep)
        .map(str::to_string)
        .collect()
}

/// Simulated crop success predictor
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreGenerator;

impl ScoreGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Score a request. Total over validated input; consumes randomness only.
    pub fn generate<R: Rng + ?Sized>(&self, request: &PredictionRequest, rng: &mut R) -> PredictionResult {
        let crop = request.crop_name;
        let location_name = request.location.display_name.as_str();

        let mut suitability_score: u8 = rng.gen_range(50..=79);
        let mut success_rate: u8 = rng.gen_range(50..=79);
        let mut soil_compatibility: u8 = rng.gen_range(3..=7);

        if regional_bonus_applies(crop, location_name) {
            suitability_score += REGIONAL_SCORE_BONUS;
            success_rate += REGIONAL_SCORE_BONUS;
            soil_compatibility += REGIONAL_SOIL_BONUS;
        }

        if seasonal_bonus_applies(crop, request.season) {
            suitability_score += SEASONAL_SCORE_BONUS;
            success_rate += SEASONAL_SCORE_BONUS;
        }

        let suitability_score = suitability_score.min(MAX_SCORE);
        let success_rate = success_rate.min(MAX_SCORE);
        let soil_compatibility = soil_compatibility.min(MAX_SOIL_COMPATIBILITY);

        let alternative_crops = alternative_crops(crop, request.season, rng);

        PredictionResult {
            crop_name: crop,
            location_name: location_name.to_string(),
            season: request.season,
            month: request.month,
            suitability_score,
            success_rate,
            soil_compatibility,
            yield_estimate: format_yield_estimate(crop, suitability_score),
            alternative_crops,
            rainfall: rainfall_band(location_name),
            humidity: humidity_band(location_name),
            recommendations: recommendation(crop, suitability_score, location_name, request.season),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;
    use crate::types::Location;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(crop: Crop, location: &str, season: Season) -> PredictionRequest {
        PredictionRequest::new(
            crop,
            Location::new(22.0, 80.0, location),
            season,
            season.months()[0],
        )
    }

    #[test]
    fn test_regional_affinity_pairs() {
        assert!(regional_bonus_applies(Crop::Rice, "West Bengal, India"));
        assert!(regional_bonus_applies(Crop::Wheat, "Punjab, India"));
        assert!(regional_bonus_applies(Crop::Cotton, "Gujarat, India"));
        assert!(regional_bonus_applies(Crop::Coffee, "Karnataka, India"));
        assert!(!regional_bonus_applies(Crop::Rice, "Punjab, India"));
        assert!(!regional_bonus_applies(Crop::Coffee, "India"));
        // substring match is case sensitive
        assert!(!regional_bonus_applies(Crop::Rice, "west bengal"));
    }

    #[test]
    fn test_seasonal_affinity_pairs() {
        assert!(seasonal_bonus_applies(Crop::Rice, Season::Kharif));
        assert!(seasonal_bonus_applies(Crop::Wheat, Season::Rabi));
        assert!(seasonal_bonus_applies(Crop::Cotton, Season::Kharif));
        assert!(seasonal_bonus_applies(Crop::Maize, Season::Kharif));
        assert!(!seasonal_bonus_applies(Crop::Wheat, Season::Kharif));
        assert!(!seasonal_bonus_applies(Crop::Coffee, Season::Zaid));
    }

    #[test]
    fn test_regional_bands() {
        assert_eq!(rainfall_band("West Bengal, India"), RainfallBand::High);
        assert_eq!(rainfall_band("Karnataka, India"), RainfallBand::High);
        assert_eq!(rainfall_band("Gujarat, India"), RainfallBand::Moderate);
        assert_eq!(rainfall_band("Punjab, India"), RainfallBand::Low);
        assert_eq!(rainfall_band("India"), RainfallBand::Moderate);

        assert_eq!(humidity_band("Kerala, India"), HumidityBand::High);
        assert_eq!(humidity_band("Karnataka, India"), HumidityBand::Moderate);
        assert_eq!(humidity_band("Punjab, India"), HumidityBand::Low);
    }

    #[test]
    fn test_yield_estimate_scaling() {
        assert_eq!(format_yield_estimate(Crop::Rice, 75), "4.5 tons per hectare");
        assert_eq!(format_yield_estimate(Crop::Rice, 98), "5.9 tons per hectare");
        assert_eq!(format_yield_estimate(Crop::PigeonPea, 75), "1.0 tons per hectare");
        // no table entry: 2.5 * 60 / 75
        assert_eq!(format_yield_estimate(Crop::Coffee, 60), "2.0 tons per hectare");
        assert_eq!(estimate_yield(Crop::Maize, 50), Decimal::new(38, 1));
    }

    #[test]
    fn test_recommendation_thresholds() {
        let high = recommendation(Crop::Wheat, 80, "Punjab, India", Season::Rabi);
        assert!(high.starts_with("Wheat is highly suitable for cultivation in Punjab, India during Rabi season."));
        let medium = recommendation(Crop::Wheat, 60, "Punjab, India", Season::Rabi);
        assert!(medium.starts_with("Wheat can be grown in Punjab, India during Rabi season with proper care."));
        let low = recommendation(Crop::Wheat, 59, "Punjab, India", Season::Rabi);
        assert!(low.starts_with("Wheat is not ideal for Punjab, India during Rabi season."));
    }

    #[test]
    fn test_alternatives_exclude_requested_crop() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let alternatives = alternative_crops(Crop::Rice, Season::Kharif, &mut rng);
            assert!((2..=3).contains(&alternatives.len()));
            assert!(!alternatives.iter().any(|c| c == "Rice"));
            assert!(alternatives
                .iter()
                .all(|c| KHARIF_REFERENCE_CROPS.contains(&c.as_str())));
        }
    }

    #[test]
    fn test_zaid_uses_rabi_reference_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let alternatives = alternative_crops(Crop::Mango, Season::Zaid, &mut rng);
        assert!(alternatives
            .iter()
            .all(|c| RABI_REFERENCE_CROPS.contains(&c.as_str())));
    }

    #[test]
    fn test_regional_bonus_is_exact() {
        // Identical draws, only the location differs
        let generator = ScoreGenerator::new();
        for seed in 0..50 {
            let bonus = generator.generate(
                &request(Crop::Rice, "West Bengal, India", Season::Zaid),
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            let plain = generator.generate(
                &request(Crop::Rice, "Maharashtra, India", Season::Zaid),
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            assert_eq!(bonus.suitability_score, plain.suitability_score + 15);
            assert_eq!(bonus.success_rate, plain.success_rate + 15);
            assert_eq!(bonus.soil_compatibility, plain.soil_compatibility + 2);
        }
    }

    #[test]
    fn test_seasonal_bonus_is_exact() {
        let generator = ScoreGenerator::new();
        for seed in 0..50 {
            let kharif = generator.generate(
                &request(Crop::Maize, "India", Season::Kharif),
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            let rabi = generator.generate(
                &request(Crop::Maize, "India", Season::Rabi),
                &mut ChaCha8Rng::seed_from_u64(seed),
            );
            assert_eq!(kharif.suitability_score, rabi.suitability_score + 10);
            assert_eq!(kharif.success_rate, rabi.success_rate + 10);
            assert_eq!(kharif.soil_compatibility, rabi.soil_compatibility);
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let generator = ScoreGenerator::new();
        let req = PredictionRequest::new(
            Crop::Wheat,
            Location::new(31.1471, 75.3412, "Punjab, India"),
            Season::Rabi,
            Month::November,
        );
        let a = generator.generate(&req, &mut ChaCha8Rng::seed_from_u64(99));
        let b = generator.generate(&req, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(a.month, Month::November);
        assert_eq!(a.location_name, "Punjab, India");
    }
}

//! Text rendering for command results

use std::fmt::Write as _;

use shared::{
    AlertRegistration, Crop, PlantIdentification, PredictionResult, Region, Season,
    WaterRequirement,
};

use crate::external::weather::CurrentWeather;

pub fn render_prediction(result: &PredictionResult) -> String {
    let mut out = String::new();
    let alternatives = if result.alternative_crops.is_empty() {
        "No alternative crops available".to_string()
    } else {
        result.alternative_crops.join(", ")
    };

    let _ = writeln!(out, "Analysis for {} in {}", result.crop_name, result.location_name);
    let _ = writeln!(out, "Season:              {} ({})", result.season, result.month);
    let _ = writeln!(
        out,
        "Suitability Score:   {}% ({})",
        result.suitability_score,
        result.suitability_label()
    );
    let _ = writeln!(out, "Success Rate:        {}%", result.success_rate);
    let _ = writeln!(
        out,
        "Soil Compatibility:  {}/10 ({})",
        result.soil_compatibility,
        result.soil_label()
    );
    let _ = writeln!(out, "Rainfall:            {}", result.rainfall);
    let _ = writeln!(out, "Humidity:            {}", result.humidity);
    let _ = writeln!(out, "Yield Estimate:      {}", result.yield_estimate);
    let _ = writeln!(out, "Alternative Crops:   {}", alternatives);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations:");
    let _ = write!(out, "  {}", result.recommendations);
    out
}

pub fn render_identification(result: &PlantIdentification) -> String {
    format!(
        "Identified: {} ({})\nConfidence: {}% match\n\n{}",
        result.plant_name,
        result.scientific_name,
        result.display_confidence(),
        result.description
    )
}

pub fn render_weather(current: &CurrentWeather) -> String {
    let snapshot = &current.snapshot;
    let mut out = String::new();
    let _ = write!(out, "{}", snapshot.condition);
    if !snapshot.description.is_empty() {
        let _ = write!(out, " ({})", snapshot.description);
    }
    let _ = writeln!(out);
    if !current.station_name.is_empty() {
        let _ = writeln!(out, "Station:  {}", current.station_name);
    }
    let _ = writeln!(out, "Temp:     {}", snapshot.temperature_display());
    let _ = writeln!(out, "Humidity: {}", snapshot.humidity_display());
    let _ = writeln!(out, "Rain:     {}", snapshot.rain_display());
    let _ = write!(out, "Observed: {}", current.observed_at.format("%Y-%m-%d %H:%M UTC"));
    out
}

pub fn render_water(requirement: &WaterRequirement) -> String {
    format!(
        "Estimated Water Requirement: {} liters per day\n({} at {} stage, Kc {}, {} ha)",
        requirement.liters_per_day,
        requirement.crop,
        requirement.growth_stage,
        requirement.coefficient,
        requirement.area_hectares
    )
}

pub fn render_alert(registration: &AlertRegistration, confirmation: &str) -> String {
    format!(
        "SMS Alerts Activated\n{}\nYou will receive SMS alerts when adverse weather conditions are detected in {}.",
        confirmation, registration.location
    )
}

pub fn render_crops() -> String {
    Crop::ALL
        .iter()
        .map(|crop| crop.name())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_seasons() -> String {
    Season::ALL
        .iter()
        .map(|season| {
            let months: Vec<&str> = season.months().iter().map(|m| m.name()).collect();
            format!("{}: {}\n  {}", season, months.join(", "), season.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_regions(regions: &[Region]) -> String {
    regions
        .iter()
        .map(|r| format!("{:<12} {} ({}, {})", r.id, r.label, r.latitude, r.longitude))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{HumidityBand, Month, RainfallBand, QUICK_SELECT_REGIONS, PLANT_CATALOG};

    fn sample_result() -> PredictionResult {
        PredictionResult {
            crop_name: Crop::Wheat,
            location_name: "Punjab, India".to_string(),
            season: Season::Rabi,
            month: Month::November,
            suitability_score: 92,
            success_rate: 88,
            soil_compatibility: 8,
            yield_estimate: "3.9 tons per hectare".to_string(),
            alternative_crops: vec!["Lentil".to_string(), "Peas".to_string()],
            rainfall: RainfallBand::Low,
            humidity: HumidityBand::Low,
            recommendations: "Wheat is highly suitable.".to_string(),
        }
    }

    #[test]
    fn test_render_prediction() {
        let text = render_prediction(&sample_result());
        assert!(text.starts_with("Analysis for Wheat in Punjab, India"));
        assert!(text.contains("Suitability Score:   92% (Highly Suitable)"));
        assert!(text.contains("Soil Compatibility:  8/10 (Good)"));
        assert!(text.contains("Rainfall:            Low (300-500mm)"));
        assert!(text.contains("Alternative Crops:   Lentil, Peas"));
    }

    #[test]
    fn test_render_identification() {
        let text = render_identification(&PlantIdentification::from(&PLANT_CATALOG[1]));
        assert!(text.starts_with("Identified: Wheat (Triticum aestivum)"));
        assert!(text.contains("Confidence: 92% match"));
    }

    #[test]
    fn test_render_seasons_lists_months() {
        let text = render_seasons();
        assert!(text.contains("Kharif: June, July, August, September"));
        assert!(text.contains("Zaid: February, March, April, May"));
    }

    #[test]
    fn test_render_regions() {
        let text = render_regions(&QUICK_SELECT_REGIONS);
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Punjab, India"));
    }
}

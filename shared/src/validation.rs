//! Validation utilities for FarmSight
//!
//! The selection controls already restrict most inputs to closed lists;
//! these checks guard the remaining free-form values at the boundary.

use crate::models::{AlertRegistration, PlantImage, PredictionRequest, WaterRequirementInput};
use crate::types::GpsCoordinates;

/// Largest field the water calculator accepts, in hectares
pub const MAX_AREA_HECTARES: f64 = 1_000_000.0;

/// Largest accepted upload, in bytes
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

// ============================================================================
// Prediction Validations
// ============================================================================

/// Validate a prediction request before it reaches the score generator
pub fn validate_prediction_request(request: &PredictionRequest) -> Result<(), &'static str> {
    if !request.season.contains(request.month) {
        return Err("Selected month does not belong to the selected season");
    }
    validate_location_name(&request.location.display_name)?;
    validate_coordinates(&request.location.coordinates())?;
    Ok(())
}

pub fn validate_location_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please select a location");
    }
    Ok(())
}

pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if !coordinates.is_valid() {
        return Err("Coordinates are out of range");
    }
    Ok(())
}

// ============================================================================
// Identification Validations
// ============================================================================

pub fn validate_plant_image(image: &PlantImage) -> Result<(), &'static str> {
    if !image.is_image() {
        return Err("Uploaded file is not an image");
    }
    if image.is_empty() {
        return Err("Uploaded image is empty");
    }
    if image.len() > MAX_IMAGE_BYTES {
        return Err("Uploaded image is larger than 10 MB");
    }
    Ok(())
}

// ============================================================================
// Water Calculator and Alert Validations
// ============================================================================

/// Field size must be a positive number of hectares
pub fn validate_area_size(area_hectares: f64) -> Result<(), &'static str> {
    if !area_hectares.is_finite() || area_hectares <= 0.0 {
        return Err("Field size must be greater than zero");
    }
    if area_hectares > MAX_AREA_HECTARES {
        return Err("Field size is unrealistically large");
    }
    Ok(())
}

pub fn validate_water_input(input: &WaterRequirementInput) -> Result<(), &'static str> {
    validate_area_size(input.area_hectares)
}

/// Phone number must be at least 10 characters, formatting included
pub fn validate_phone_number(phone: &str) -> Result<(), &'static str> {
    if phone.trim().chars().count() < 10 {
        return Err("Phone number must be at least 10 digits");
    }
    Ok(())
}

pub fn validate_alert_registration(registration: &AlertRegistration) -> Result<(), &'static str> {
    validate_phone_number(&registration.phone_number)?;
    validate_location_name(&registration.location)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, GrowthStage, Month, Season, WaterCrop};
    use crate::types::Location;

    fn request(season: Season, month: Month) -> PredictionRequest {
        PredictionRequest::new(Crop::Wheat, Location::new(31.1471, 75.3412, "Punjab, India"), season, month)
    }

    #[test]
    fn test_validate_prediction_request_valid() {
        assert!(validate_prediction_request(&request(Season::Rabi, Month::November)).is_ok());
        assert!(validate_prediction_request(&request(Season::Zaid, Month::May)).is_ok());
    }

    #[test]
    fn test_validate_prediction_request_month_mismatch() {
        assert_eq!(
            validate_prediction_request(&request(Season::Kharif, Month::November)),
            Err("Selected month does not belong to the selected season")
        );
    }

    #[test]
    fn test_validate_prediction_request_bad_location() {
        let mut req = request(Season::Rabi, Month::January);
        req.location.display_name = "   ".to_string();
        assert!(validate_prediction_request(&req).is_err());

        let mut req = request(Season::Rabi, Month::January);
        req.location.latitude = 120.0;
        assert!(validate_prediction_request(&req).is_err());
    }

    #[test]
    fn test_validate_plant_image() {
        assert!(validate_plant_image(&PlantImage::new("image/png", vec![1, 2, 3])).is_ok());
        assert!(validate_plant_image(&PlantImage::new("text/plain", vec![1])).is_err());
        assert!(validate_plant_image(&PlantImage::new("image/png", vec![])).is_err());
    }

    #[test]
    fn test_validate_area_size() {
        assert!(validate_area_size(0.1).is_ok());
        assert!(validate_area_size(250.0).is_ok());
        assert!(validate_area_size(0.0).is_err());
        assert!(validate_area_size(-1.0).is_err());
        assert!(validate_area_size(f64::NAN).is_err());
        assert!(validate_area_size(2_000_000.0).is_err());

        let input = WaterRequirementInput {
            crop: WaterCrop::Cotton,
            growth_stage: GrowthStage::Late,
            area_hectares: 0.0,
        };
        assert!(validate_water_input(&input).is_err());
    }

    #[test]
    fn test_validate_phone_number() {
        assert!(validate_phone_number("9876543210").is_ok());
        assert!(validate_phone_number("+1 (555) 123-4567").is_ok());
        assert!(validate_phone_number("12345").is_err());
        assert!(validate_phone_number("").is_err());
    }

    #[test]
    fn test_validate_alert_registration() {
        let ok = AlertRegistration::new("9876543210", WaterCrop::Wheat, "Punjab, India");
        assert!(validate_alert_registration(&ok).is_ok());
        let no_location = AlertRegistration::new("9876543210", WaterCrop::Wheat, "");
        assert!(validate_alert_registration(&no_location).is_err());
    }
}

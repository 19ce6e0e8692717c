//! WebAssembly module for FarmSight
//!
//! Provides the browser side of the app:
//! - Crop success prediction and plant identification as Promises that
//!   resolve after the simulated analysis delay
//! - Selector data (crops, season months, quick-select regions)
//! - Client-side validation and the water calculator
//!
//! Everything crosses the JS boundary as JSON strings.

use js_sys::Promise;
use serde::Serialize;
use shared::{
    analysis_rng, Crop, GrowthStage, Location, PlantIdentifier, PlantImage, PredictionRequest,
    ScoreGenerator, Season, SoilLabel, SuitabilityLabel, WaterCrop, WaterRequirementInput,
    IDENTIFICATION_DELAY_MS, PREDICTION_DELAY_MS, QUICK_SELECT_REGIONS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log("FarmSight analysis module loaded");
}

fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

// ============================================================================
// Core operations (plain Rust, usable from native tests)
// ============================================================================

/// Validate and score a JSON `PredictionRequest`, returning the result as JSON
pub fn generate_prediction(request_json: &str, seed: Option<u64>) -> Result<String, String> {
    let request: PredictionRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid prediction request: {}", e))?;
    shared::validate_prediction_request(&request)?;

    let result = ScoreGenerator::new().generate(&request, &mut analysis_rng(seed));
    to_json(&result)
}

/// Identify the plant in a `data:image/...;base64,` URL, returning JSON
pub fn generate_identification(image_data_url: &str, seed: Option<u64>) -> Result<String, String> {
    let image = PlantImage::from_data_url(image_data_url).map_err(|e| e.to_string())?;
    shared::validate_plant_image(&image)?;

    let result = PlantIdentifier::new().identify(&image, &mut analysis_rng(seed));
    to_json(&result)
}

/// Resolve after `ms` milliseconds; immediately when there is no window
async fn sleep_ms(ms: u64) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };

    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = Promise::new(&mut |resolve, _reject| {
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
            .is_err()
        {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}

// ============================================================================
// Async exports
// ============================================================================

/// Predict crop success. Resolves with the result JSON after the simulated
/// delay; rejects with a message when the request is invalid.
#[wasm_bindgen]
pub fn predict_crop_success(request_json: String, seed: Option<u32>) -> Promise {
    future_to_promise(async move {
        // Validate up front so a bad request fails without waiting
        let parsed: PredictionRequest = serde_json::from_str(&request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid prediction request: {}", e)))?;
        shared::validate_prediction_request(&parsed).map_err(JsValue::from_str)?;

        log(&format!("Analyzing {} in {}", parsed.crop_name, parsed.location.display_name));
        sleep_ms(PREDICTION_DELAY_MS).await?;

        generate_prediction(&request_json, seed.map(u64::from))
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e))
    })
}

/// Identify a plant photo given as a data URL. Resolves with JSON after the
/// simulated delay.
#[wasm_bindgen]
pub fn identify_plant(image_data_url: String, seed: Option<u32>) -> Promise {
    future_to_promise(async move {
        let image = PlantImage::from_data_url(&image_data_url)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        shared::validate_plant_image(&image).map_err(JsValue::from_str)?;

        sleep_ms(IDENTIFICATION_DELAY_MS).await?;

        generate_identification(&image_data_url, seed.map(u64::from))
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e))
    })
}

// ============================================================================
// Synchronous helpers
// ============================================================================

/// Crop names for the crop selector, as a JSON array
#[wasm_bindgen]
pub fn list_crops() -> String {
    let names: Vec<&str> = Crop::ALL.iter().map(|crop| crop.name()).collect();
    to_json(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Planting months of a season, as a JSON array
#[wasm_bindgen]
pub fn season_months(season: &str) -> Result<String, JsValue> {
    let season: Season = season
        .parse()
        .map_err(|e: shared::ParseError| JsValue::from_str(&e.to_string()))?;
    let months: Vec<&str> = season.months().iter().map(|m| m.name()).collect();
    to_json(&months).map_err(|e| JsValue::from_str(&e))
}

/// Quick-select regions, as a JSON array
#[wasm_bindgen]
pub fn list_regions() -> String {
    to_json(&QUICK_SELECT_REGIONS).unwrap_or_else(|_| "[]".to_string())
}

/// Validate a JSON `PredictionRequest`; returns an error message or nothing
#[wasm_bindgen]
pub fn validate_prediction_request(request_json: &str) -> Option<String> {
    let request: PredictionRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(_) => return Some("Please fill in all fields".to_string()),
    };
    shared::validate_prediction_request(&request)
        .err()
        .map(str::to_string)
}

/// Daily irrigation need in liters
#[wasm_bindgen]
pub fn calculate_water_requirement(crop: &str, growth_stage: &str, area_hectares: f64) -> Result<f64, JsValue> {
    let input = WaterRequirementInput {
        crop: crop
            .parse::<WaterCrop>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        growth_stage: growth_stage
            .parse::<GrowthStage>()
            .map_err(|e| JsValue::from_str(&e.to_string()))?,
        area_hectares,
    };
    shared::validate_water_input(&input).map_err(JsValue::from_str)?;

    Ok(shared::calculate_water_requirement(&input).liters_per_day as f64)
}

/// "Highly Suitable", "Suitable", "Moderately Suitable" or "Not Suitable"
#[wasm_bindgen]
pub fn suitability_label(score: u8) -> String {
    SuitabilityLabel::from_score(score).to_string()
}

/// "Good", "Average" or "Poor"
#[wasm_bindgen]
pub fn soil_label(score: u8) -> String {
    SoilLabel::from_score(score).to_string()
}

/// Location JSON for a map click, named "Lat: x.xxx, Lng: y.yyy"
#[wasm_bindgen]
pub fn location_from_coordinates(latitude: f64, longitude: f64) -> String {
    to_json(&Location::from_coordinates(latitude, longitude)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{PlantIdentification, PredictionResult, PLANT_CATALOG};

    const PUNJAB_WHEAT: &str = r#"{
        "crop_name": "Wheat",
        "location": {"latitude": 31.1471, "longitude": 75.3412, "display_name": "Punjab, India"},
        "season": "Rabi",
        "month": "November"
    }"#;

    #[test]
    fn test_generate_prediction() {
        let json = generate_prediction(PUNJAB_WHEAT, Some(4)).unwrap();
        let result: PredictionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.location_name, "Punjab, India");
        assert!((75..=98).contains(&result.suitability_score));
        assert_eq!(json, generate_prediction(PUNJAB_WHEAT, Some(4)).unwrap());
    }

    #[test]
    fn test_generate_prediction_rejects_mismatched_month() {
        let request = PUNJAB_WHEAT.replace("November", "July");
        assert_eq!(
            generate_prediction(&request, Some(1)).unwrap_err(),
            "Selected month does not belong to the selected season"
        );
        assert_eq!(
            validate_prediction_request(&request).as_deref(),
            Some("Selected month does not belong to the selected season")
        );
        assert_eq!(validate_prediction_request(PUNJAB_WHEAT), None);
    }

    #[test]
    fn test_generate_identification() {
        let image = PlantImage::new("image/jpeg", vec![0xFF, 0xD8, 0xFF]).to_data_url();
        let json = generate_identification(&image, Some(9)).unwrap();
        let result: PlantIdentification = serde_json::from_str(&json).unwrap();
        assert!(PLANT_CATALOG.iter().any(|p| p.plant_name == result.plant_name));
    }

    #[test]
    fn test_generate_identification_rejects_non_image() {
        assert!(generate_identification("data:text/plain;base64,aGVsbG8=", None).is_err());
        assert!(generate_identification("not a data url", None).is_err());
    }

    #[test]
    fn test_selector_data() {
        let crops: Vec<String> = serde_json::from_str(&list_crops()).unwrap();
        assert_eq!(crops.len(), 23);
        assert_eq!(crops[0], "Rice");

        let regions: Vec<serde_json::Value> = serde_json::from_str(&list_regions()).unwrap();
        assert_eq!(regions.len(), 5);
    }

    #[test]
    fn test_labels() {
        assert_eq!(suitability_label(85), "Highly Suitable");
        assert_eq!(suitability_label(60), "Suitable");
        assert_eq!(suitability_label(45), "Moderately Suitable");
        assert_eq!(suitability_label(20), "Not Suitable");
        assert_eq!(soil_label(7), "Good");
        assert_eq!(soil_label(5), "Average");
        assert_eq!(soil_label(4), "Poor");
    }

    #[test]
    fn test_location_from_coordinates() {
        let location: Location = serde_json::from_str(&location_from_coordinates(18.5, 73.25)).unwrap();
        assert_eq!(location.display_name, "Lat: 18.500, Lng: 73.250");
    }
}

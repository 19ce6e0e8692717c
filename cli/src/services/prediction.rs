//! Crop success prediction service

use std::sync::Arc;
use std::time::Duration;

use shared::{
    analysis_rng, validate_prediction_request, AnalysisRng, PredictionRequest, PredictionResult,
    ScoreGenerator,
};
use tokio::sync::Mutex;

use crate::config::SimulationConfig;
use crate::error::{AppError, AppResult};

/// Runs the score generator behind the simulated analysis delay
#[derive(Clone)]
pub struct PredictionService {
    generator: ScoreGenerator,
    delay: Duration,
    rng: Arc<Mutex<AnalysisRng>>,
}

impl PredictionService {
    /// Create a new PredictionService from simulation settings
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_rng(
            Duration::from_millis(config.prediction_delay_ms),
            analysis_rng(config.seed),
        )
    }

    pub fn with_rng(delay: Duration, rng: AnalysisRng) -> Self {
        Self {
            generator: ScoreGenerator::new(),
            delay,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Validate the request, wait out the simulated delay, then score it
    pub async fn predict(&self, request: PredictionRequest) -> AppResult<PredictionResult> {
        validate_prediction_request(&request).map_err(AppError::Validation)?;

        tracing::info!(
            crop = %request.crop_name,
            location = %request.location.display_name,
            season = %request.season,
            month = %request.month,
            "Analyzing crop suitability"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = {
            let mut rng = self.rng.lock().await;
            self.generator.generate(&request, &mut *rng)
        };

        tracing::info!(
            suitability_score = result.suitability_score,
            success_rate = result.success_rate,
            soil_compatibility = result.soil_compatibility,
            "Prediction complete"
        );

        Ok(result)
    }
}

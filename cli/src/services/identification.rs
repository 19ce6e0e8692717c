//! Plant identification service

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use shared::{
    analysis_rng, mime_type_for_extension, validate_plant_image, AnalysisRng, PlantIdentification,
    PlantIdentifier, PlantImage,
};
use tokio::sync::Mutex;

use crate::config::SimulationConfig;
use crate::error::{AppError, AppResult};

/// Runs the simulated identifier behind the identification delay
#[derive(Clone)]
pub struct IdentificationService {
    identifier: PlantIdentifier,
    delay: Duration,
    rng: Arc<Mutex<AnalysisRng>>,
}

impl IdentificationService {
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_rng(
            Duration::from_millis(config.identification_delay_ms),
            analysis_rng(config.seed),
        )
    }

    pub fn with_rng(delay: Duration, rng: AnalysisRng) -> Self {
        Self {
            identifier: PlantIdentifier::new(),
            delay,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Load a photo from disk. Files holding a `data:` URL are decoded as such;
    /// anything else is read as raw bytes typed by its extension.
    pub async fn load_image(path: &Path) -> AppResult<PlantImage> {
        let bytes = tokio::fs::read(path).await?;

        if bytes.starts_with(b"data:") {
            let text = String::from_utf8_lossy(&bytes);
            return Ok(PlantImage::from_data_url(text.trim())?);
        }

        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_type_for_extension)
            .ok_or(AppError::Validation("Uploaded file is not an image"))?;

        Ok(PlantImage::new(mime_type, bytes))
    }

    /// Validate the image, wait out the simulated delay, then pick a plant
    pub async fn identify(&self, image: &PlantImage) -> AppResult<PlantIdentification> {
        validate_plant_image(image).map_err(AppError::Validation)?;

        tracing::info!(
            mime_type = %image.mime_type,
            bytes = image.len(),
            "Identifying plant"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = {
            let mut rng = self.rng.lock().await;
            self.identifier.identify(image, &mut *rng)
        };

        tracing::info!(plant = %result.plant_name, "Identification complete");

        Ok(result)
    }
}

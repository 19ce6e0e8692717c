//! Services behind the FarmSight commands

pub mod alert;
pub mod identification;
pub mod prediction;
pub mod water;
pub mod weather;

pub use alert::AlertService;
pub use identification::IdentificationService;
pub use prediction::PredictionService;
pub use weather::WeatherService;

//! Shared types and models for FarmSight
//!
//! This crate contains the domain tables, the simulated crop success
//! scorer and plant identifier, and the validation rules shared between the
//! command-line front end and the browser (via WASM).

pub mod error;
pub mod models;
pub mod rng;
pub mod scoring;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use rng::*;
pub use scoring::ScoreGenerator;
pub use types::*;
pub use validation::*;

/// Simulated latency of a crop success prediction, in milliseconds
pub const PREDICTION_DELAY_MS: u64 = 2000;

/// Simulated latency of a plant identification, in milliseconds
pub const IDENTIFICATION_DELAY_MS: u64 = 1500;

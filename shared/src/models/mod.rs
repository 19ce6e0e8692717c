//! Domain models for FarmSight

mod alert;
mod crop;
mod identification;
mod image;
mod prediction;
mod region;
mod season;
mod water;
mod weather;

pub use alert::*;
pub use crop::*;
pub use identification::*;
pub use image::*;
pub use prediction::*;
pub use region::*;
pub use season::*;
pub use water::*;
pub use weather::*;

//! SMS weather alert sign-up

use serde::{Deserialize, Serialize};

use crate::models::WaterCrop;

/// Sign-up for rain and hailstorm alerts at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRegistration {
    pub phone_number: String,
    pub crop_type: WaterCrop,
    pub location: String,
}

impl AlertRegistration {
    pub fn new(phone_number: impl Into<String>, crop_type: WaterCrop, location: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            crop_type,
            location: location.into(),
        }
    }

    /// Message shown once the registration is accepted
    pub fn confirmation(&self) -> String {
        format!(
            "You will receive alerts for {} in {}.",
            self.crop_type, self.location
        )
    }
}

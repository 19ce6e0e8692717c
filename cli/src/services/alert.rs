//! SMS weather alert registration
//!
//! Registrations are validated and logged only; no message is ever sent.

use shared::{validate_alert_registration, AlertRegistration};

use crate::error::{AppError, AppResult};

/// Accepts alert sign-ups
#[derive(Clone, Default)]
pub struct AlertService;

impl AlertService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a registration and return the confirmation message
    pub fn register(&self, registration: &AlertRegistration) -> AppResult<String> {
        validate_alert_registration(registration).map_err(AppError::Validation)?;

        tracing::info!(
            phone = %mask_phone(&registration.phone_number),
            crop = %registration.crop_type,
            location = %registration.location,
            "SMS alert registration"
        );

        Ok(registration.confirmation())
    }
}

/// Keep only the last four digits for logs
fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("***{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::WaterCrop;

    #[test]
    fn test_register_valid() {
        let service = AlertService::new();
        let registration = AlertRegistration::new("9876543210", WaterCrop::Cotton, "Gujarat, India");
        assert_eq!(
            service.register(&registration).unwrap(),
            "You will receive alerts for cotton in Gujarat, India."
        );
    }

    #[test]
    fn test_register_short_phone() {
        let service = AlertService::new();
        let registration = AlertRegistration::new("12345", WaterCrop::Cotton, "Gujarat, India");
        assert!(matches!(
            service.register(&registration),
            Err(AppError::Validation("Phone number must be at least 10 digits"))
        ));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+91 98765-43210"), "***3210");
        assert_eq!(mask_phone("12"), "***12");
    }
}

//! Water requirement service

use shared::{calculate_water_requirement, validate_water_input, WaterRequirement, WaterRequirementInput};

use crate::error::{AppError, AppResult};

pub fn estimate(input: &WaterRequirementInput) -> AppResult<WaterRequirement> {
    validate_water_input(input).map_err(AppError::Validation)?;

    let requirement = calculate_water_requirement(input);
    tracing::debug!(
        crop = %input.crop,
        stage = %input.growth_stage,
        liters_per_day = requirement.liters_per_day,
        "Estimated water requirement"
    );

    Ok(requirement)
}

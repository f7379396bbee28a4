//! Scenario validation logic.

use crate::schema::Scenario;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid node count: {value} (need at least 3)")]
    InvalidNodeCount { value: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let rod = &scenario.rod;
    if rod.node_count < 3 {
        return Err(ValidationError::InvalidNodeCount {
            value: rod.node_count,
        });
    }
    check_positive("length_m", rod.length_m)?;
    check_positive("conductivity_w_per_m_k", rod.conductivity_w_per_m_k)?;
    check_positive("density_kg_per_m3", rod.density_kg_per_m3)?;
    check_positive("specific_heat_j_per_kg_k", rod.specific_heat_j_per_kg_k)?;
    check_finite("initial_temperature_k", rod.initial_temperature_k)?;
    check_finite("left_temperature_k", rod.left_temperature_k)?;
    check_finite("right_temperature_k", rod.right_temperature_k)?;
    check_finite("start_time_s", rod.start_time_s)?;
    check_finite("end_time_s", rod.end_time_s)?;
    if rod.end_time_s <= rod.start_time_s {
        return Err(ValidationError::InvalidValue {
            field: "end_time_s",
            value: rod.end_time_s,
            reason: "must be greater than start_time_s",
        });
    }

    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}

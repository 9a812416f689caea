use crate::errors::{PaddleXError, Result};
use crate::model::{Metadata, PaddleSubmission, Performance, Shape, SpecsSubmission};

/// Validate a paddle submission before it touches storage
///
/// Sections are checked in order (metadata, specs, performance) and the
/// first violation is returned. Pure; no side effects.
///
/// # Errors
/// * `Validation` - carrying the dotted field path and a human reason
pub fn validate_submission(input: &PaddleSubmission) -> Result<()> {
    validate_metadata(&input.metadata)?;
    validate_specs(&input.specs)?;
    validate_performance(&input.performance)?;
    Ok(())
}

/// Brand and model are required; serial code is optional
pub fn validate_metadata(metadata: &Metadata) -> Result<()> {
    require_text("metadata.brand", &metadata.brand, "brand")?;
    require_text("metadata.model", &metadata.model, "model")?;
    Ok(())
}

pub fn validate_specs(specs: &SpecsSubmission) -> Result<()> {
    specs.shape.parse::<Shape>()?;

    require_text("specs.surface", &specs.surface, "surface")?;
    require_positive("specs.average_weight", specs.average_weight, "average weight")?;
    require_positive("specs.core", specs.core, "core")?;
    require_positive("specs.paddle_length", specs.paddle_length, "paddle length")?;
    require_positive("specs.paddle_width", specs.paddle_width, "paddle width")?;
    require_positive("specs.grip_length", specs.grip_length, "grip length")?;
    require_text("specs.grip_type", &specs.grip_type, "grip type")?;
    require_positive(
        "specs.grip_circumference",
        specs.grip_circumference,
        "grip circumference",
    )?;
    Ok(())
}

pub fn validate_performance(performance: &Performance) -> Result<()> {
    require_percentage("performance.power", performance.power, "power")?;
    require_percentage("performance.pop", performance.pop, "pop")?;

    if !performance.spin.is_finite() || performance.spin < 0.0 {
        return Err(PaddleXError::validation(
            "performance.spin",
            "spin must be non-negative",
        ));
    }

    require_positive("performance.twist_weight", performance.twist_weight, "twist weight")?;
    require_positive("performance.swing_weight", performance.swing_weight, "swing weight")?;
    require_positive(
        "performance.balance_point",
        performance.balance_point,
        "balance point",
    )?;
    Ok(())
}

/// Validate a business identifier supplied for a read
///
/// # Errors
/// * `InvalidPaddleId` - if the identifier is empty after trimming
pub fn validate_paddle_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(PaddleXError::InvalidPaddleId {
            reason: "paddle ID is required".to_string(),
        });
    }
    Ok(())
}

fn require_text(field: &str, value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaddleXError::validation(field, format!("{label} is required")));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64, label: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PaddleXError::validation(
            field,
            format!("{label} must be greater than 0"),
        ));
    }
    Ok(())
}

fn require_percentage(field: &str, value: f64, label: &str) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(PaddleXError::validation(
            field,
            format!("{label} must be between 0 and 100"),
        ));
    }
    Ok(())
}

use thiserror::Error;

/// Rejected tuning values. Runtime inputs (magnifications, timestamps,
/// progress values) are clamped instead and never produce an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite duration of at least {min} s (got {value})")]
    InvalidDuration {
        name: &'static str,
        value: f64,
        min: f64,
    },
    #[error("{name} must lie in [{min}, {max}] (got {value})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("a heart burst needs at least one opacity tier")]
    EmptyBurst,
}

pub(crate) fn check_duration(name: &'static str, value: f64, min: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { name, value, min })
    }
}

pub(crate) fn check_range(
    name: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

//! Error types for simulations and their configuration

use thiserror::Error;

/// Errors raised by the simulators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// An input violated its invariant; nothing was simulated
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: String, reason: String },
}

impl SimulationError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors raised while loading configuration or writing reports
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Reject NaN and infinities before any range check
pub(crate) fn require_finite(field: &str, value: f64) -> SimulationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

/// Finite and >= 0
pub(crate) fn require_non_negative(field: &str, value: f64) -> SimulationResult<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(SimulationError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(value)
}

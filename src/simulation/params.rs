//! Validated simulation inputs

use serde::Serialize;

use super::MAX_HORIZON_DAYS;
use crate::error::{require_finite, require_non_negative, SimulationError, SimulationResult};

/// Inputs shared by the wallet simulation and the savings benchmark
///
/// Only constructible through [`SimulationParameters::new`], so every value in
/// circulation already satisfies its invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationParameters {
    initial_balance: f64,
    horizon_days: u32,
    annual_rate_percent: f64,
}

impl SimulationParameters {
    /// Validate raw inputs
    ///
    /// `horizon_days` must lie in `0..=MAX_HORIZON_DAYS`. It is signed so callers
    /// can pass user input straight through and get an `InvalidParameter` for
    /// negative values.
    pub fn new(
        initial_balance: f64,
        horizon_days: i64,
        annual_rate_percent: f64,
    ) -> SimulationResult<Self> {
        let initial_balance = require_finite("initial_balance", initial_balance)?;
        if initial_balance <= 0.0 {
            return Err(SimulationError::invalid(
                "initial_balance",
                format!("must be positive, got {initial_balance}"),
            ));
        }

        if horizon_days < 0 {
            return Err(SimulationError::invalid(
                "horizon_days",
                format!("must not be negative, got {horizon_days}"),
            ));
        }
        let horizon_days = match u32::try_from(horizon_days) {
            Ok(days) if days <= MAX_HORIZON_DAYS => days,
            _ => {
                return Err(SimulationError::invalid(
                    "horizon_days",
                    format!("must be at most {MAX_HORIZON_DAYS}, got {horizon_days}"),
                ))
            }
        };

        let annual_rate_percent = require_non_negative("annual_rate_percent", annual_rate_percent)?;

        Ok(Self {
            initial_balance,
            horizon_days,
            annual_rate_percent,
        })
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundary_values() {
        let params = SimulationParameters::new(0.01, 0, 0.0).unwrap();
        assert_eq!(params.initial_balance(), 0.01);
        assert_eq!(params.horizon_days(), 0);
        assert_eq!(params.annual_rate_percent(), 0.0);

        let longest = SimulationParameters::new(100.0, i64::from(MAX_HORIZON_DAYS), 1.0).unwrap();
        assert_eq!(longest.horizon_days(), 36_500);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(SimulationParameters::new(0.0, 1, 1.0).is_err());
        assert!(SimulationParameters::new(f64::NAN, 1, 1.0).is_err());
        assert!(SimulationParameters::new(100.0, -1, 1.0).is_err());
        assert!(SimulationParameters::new(100.0, i64::from(u32::MAX) + 1, 1.0).is_err());
        assert!(SimulationParameters::new(100.0, i64::from(u32::MAX), 1.0).is_err());
        assert!(SimulationParameters::new(100.0, 36_501, 1.0).is_err());
        assert!(SimulationParameters::new(100.0, 1, -0.01).is_err());
        assert!(SimulationParameters::new(100.0, 1, f64::INFINITY).is_err());
    }
}

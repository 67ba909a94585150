//! JSON configuration for a simulation run
//!
//! Every field has a default, so a file only needs the values it changes:
//! ```json
//! { "initial_balance": 7500, "horizon_days": 365, "bonus_percent": 10 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::benchmark::SavingsModel;
use crate::error::{ConfigError, SimulationResult};
use crate::simulation::{SimulationParameters, TieredProduct, DEFAULT_ANNUAL_RATE_PERCENT};

/// Raw run settings, validated by [`SimulatorConfig::parameters`] and
/// [`SimulatorConfig::product`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Amount deposited on day 0
    #[serde(default = "default_initial_balance")]
    pub initial_balance: f64,

    /// Number of days to simulate
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,

    /// Annual reference rate in percent (11.15 = 11.15% a.a.)
    #[serde(default = "default_annual_rate")]
    pub annual_rate_percent: f64,

    /// Extra percentage points on the Tier 1 multiplier
    #[serde(default)]
    pub bonus_percent: f64,

    /// Savings benchmark model
    #[serde(default)]
    pub savings: SavingsModel,
}

fn default_initial_balance() -> f64 { 1_000.0 }
fn default_horizon_days() -> i64 { 365 }
fn default_annual_rate() -> f64 { DEFAULT_ANNUAL_RATE_PERCENT }

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
            horizon_days: default_horizon_days(),
            annual_rate_percent: default_annual_rate(),
            bonus_percent: 0.0,
            savings: SavingsModel::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn parameters(&self) -> SimulationResult<SimulationParameters> {
        SimulationParameters::new(self.initial_balance, self.horizon_days, self.annual_rate_percent)
    }

    pub fn product(&self) -> SimulationResult<TieredProduct> {
        TieredProduct::with_bonus(self.bonus_percent)
    }
}

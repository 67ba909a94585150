//! Untiered savings trajectories

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{DEFAULT_CYCLE_DAYS, DEFAULT_SAVINGS_MONTHLY_RATE};
use crate::error::{require_non_negative, SimulationError, SimulationResult};
use crate::simulation::{daily_rate_from_annual, DailyRecord, SimulationParameters};

/// How the benchmark rate is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SavingsModel {
    /// Fixed monthly rate converted to an equivalent daily rate and compounded daily.
    /// Ignores the reference rate.
    FlatMonthly { monthly_rate: f64 },

    /// A fixed share of the daily reference rate, compounded daily
    ReferenceFraction { fraction: f64 },

    /// Balance stays flat between anniversaries; `monthly_rate` is credited at the
    /// end of every `cycle_days`-th day
    Anniversary { monthly_rate: f64, cycle_days: u32 },
}

impl Default for SavingsModel {
    fn default() -> Self {
        SavingsModel::FlatMonthly {
            monthly_rate: DEFAULT_SAVINGS_MONTHLY_RATE,
        }
    }
}

impl SavingsModel {
    /// Check model parameters
    pub fn validate(&self) -> SimulationResult<()> {
        match *self {
            SavingsModel::FlatMonthly { monthly_rate } => {
                require_non_negative("monthly_rate", monthly_rate)?;
            }
            SavingsModel::ReferenceFraction { fraction } => {
                require_non_negative("fraction", fraction)?;
            }
            SavingsModel::Anniversary { monthly_rate, cycle_days } => {
                require_non_negative("monthly_rate", monthly_rate)?;
                if cycle_days == 0 {
                    return Err(SimulationError::invalid("cycle_days", "must be at least 1"));
                }
            }
        }
        Ok(())
    }

    /// Series label
    pub fn label(&self) -> String {
        match *self {
            SavingsModel::FlatMonthly { monthly_rate } => {
                format!("Savings ({:.2}% a.m.)", monthly_rate * 100.0)
            }
            SavingsModel::ReferenceFraction { fraction } => {
                format!("Savings ({:.0}% of reference)", fraction * 100.0)
            }
            SavingsModel::Anniversary { monthly_rate, .. } => {
                format!("Savings ({:.2}% per anniversary)", monthly_rate * 100.0)
            }
        }
    }

    /// Whether any yield can be credited within `horizon_days`
    ///
    /// Only the anniversary model needs a minimum horizon: one full cycle.
    pub fn credits_within(&self, horizon_days: u32) -> bool {
        match *self {
            SavingsModel::Anniversary { cycle_days, .. } => horizon_days >= cycle_days,
            _ => true,
        }
    }

    /// Run the benchmark over already-validated parameters
    pub fn simulate(&self, params: &SimulationParameters) -> SimulationResult<Vec<DailyRecord>> {
        self.validate()?;

        let records = match *self {
            SavingsModel::FlatMonthly { monthly_rate } => {
                let daily_rate = (1.0 + monthly_rate).powf(1.0 / f64::from(DEFAULT_CYCLE_DAYS)) - 1.0;
                compound_daily(params, daily_rate)
            }
            SavingsModel::ReferenceFraction { fraction } => {
                let daily_rate = daily_rate_from_annual(params.annual_rate_percent()) * fraction;
                compound_daily(params, daily_rate)
            }
            SavingsModel::Anniversary { monthly_rate, cycle_days } => {
                credit_on_anniversaries(params, monthly_rate, cycle_days)
            }
        };

        debug!(
            "Savings benchmark ({}) closed at {:.2} after {} days",
            self.label(),
            records.last().map_or(params.initial_balance(), |r| r.closing_balance),
            params.horizon_days()
        );
        Ok(records)
    }
}

fn compound_daily(params: &SimulationParameters, daily_rate: f64) -> Vec<DailyRecord> {
    let mut records = Vec::with_capacity(params.horizon_days() as usize);
    let mut balance = params.initial_balance();
    for day in 1..=params.horizon_days() {
        let record = DailyRecord::from_components(day, balance, balance * daily_rate, 0.0);
        balance = record.closing_balance;
        records.push(record);
    }
    records
}

fn credit_on_anniversaries(
    params: &SimulationParameters,
    monthly_rate: f64,
    cycle_days: u32,
) -> Vec<DailyRecord> {
    let days = params.horizon_days();
    if days > 0 && days < cycle_days {
        warn!(
            "Savings horizon of {} days is shorter than one {}-day cycle; no yield is credited",
            days, cycle_days
        );
    }

    let mut records = Vec::with_capacity(days as usize);
    let mut balance = params.initial_balance();
    for day in 1..=days {
        let credit = if day % cycle_days == 0 { balance * monthly_rate } else { 0.0 };
        let record = DailyRecord::from_components(day, balance, credit, 0.0);
        balance = record.closing_balance;
        records.push(record);
    }
    records
}

/// Simulate the default savings benchmark, one record per day
///
/// Same validation and edge cases as [`crate::simulation::simulate`].
pub fn simulate_savings(
    initial_balance: f64,
    horizon_days: i64,
    annual_rate_percent: f64,
) -> SimulationResult<Vec<DailyRecord>> {
    let params = SimulationParameters::new(initial_balance, horizon_days, annual_rate_percent)?;
    SavingsModel::default().simulate(&params)
}

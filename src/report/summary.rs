use serde::{Deserialize, Serialize};

use crate::simulation::DailyRecord;

/// Headline figures for one trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub initial_balance: f64,
    pub final_balance: f64,
    pub total_yield: f64,
    /// Total yield as a percentage of the initial balance
    pub yield_percent: f64,
    pub days: u32,
}

impl SimulationSummary {
    /// Summarize a series; an empty series ends where it started
    pub fn from_records(initial_balance: f64, records: &[DailyRecord]) -> Self {
        let final_balance = records.last().map_or(initial_balance, |r| r.closing_balance);
        let total_yield = final_balance - initial_balance;
        let yield_percent = if initial_balance > 0.0 {
            total_yield / initial_balance * 100.0
        } else {
            0.0
        };

        Self {
            initial_balance,
            final_balance,
            total_yield,
            yield_percent,
            days: records.len() as u32,
        }
    }
}

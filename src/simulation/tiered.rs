//! Two-tier wallet product: premium multiplier up to the threshold, reduced above it

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    daily_rate_from_annual, DailyRecord, SimulationParameters, TIER1_MULTIPLIER,
    TIER2_MULTIPLIER, TIER_THRESHOLD,
};
use crate::error::{require_non_negative, SimulationResult};

/// Tiered wallet yield terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TieredProduct {
    /// Extra percentage points of the reference rate added to Tier 1
    /// (10.0 turns 110% into 120%)
    bonus_percent: f64,
}

impl Default for TieredProduct {
    fn default() -> Self {
        Self::standard()
    }
}

impl TieredProduct {
    /// 110% of the reference rate up to the threshold, 80% above, no bonus
    pub fn standard() -> Self {
        Self { bonus_percent: 0.0 }
    }

    /// Standard terms plus a Tier 1 bonus
    pub fn with_bonus(bonus_percent: f64) -> SimulationResult<Self> {
        let bonus_percent = require_non_negative("bonus_percent", bonus_percent)?;
        Ok(Self { bonus_percent })
    }

    pub fn bonus_percent(&self) -> f64 {
        self.bonus_percent
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus_percent > 0.0
    }

    /// Multiplier applied to the daily reference rate on the Tier 1 band
    pub fn tier1_multiplier(&self) -> f64 {
        TIER1_MULTIPLIER + self.bonus_percent / 100.0
    }

    /// Multiplier applied to the daily reference rate on the Tier 2 band
    pub fn tier2_multiplier(&self) -> f64 {
        TIER2_MULTIPLIER
    }

    /// Tier 1 rate as a percentage of the reference, for labels (110, 120, ...)
    pub fn tier1_percent_of_reference(&self) -> f64 {
        TIER1_MULTIPLIER * 100.0 + self.bonus_percent
    }

    /// Split a balance into (tier 1, tier 2) amounts
    pub fn split_balance(balance: f64) -> (f64, f64) {
        let tier1 = balance.min(TIER_THRESHOLD);
        let tier2 = (balance - TIER_THRESHOLD).max(0.0);
        (tier1, tier2)
    }

    /// Short series label, e.g. "Wallet (110%)"
    pub fn label(&self) -> String {
        format!("Wallet ({:.0}%)", self.tier1_percent_of_reference())
    }

    /// Compound the balance day by day
    pub fn simulate(&self, params: &SimulationParameters) -> Vec<DailyRecord> {
        let daily_rate = daily_rate_from_annual(params.annual_rate_percent());
        let tier1_rate = daily_rate * self.tier1_multiplier();
        let tier2_rate = daily_rate * self.tier2_multiplier();

        debug!(
            "Tiered simulation: balance={:.2}, days={}, annual={}%, daily={:.10}, tier1={:.0}%",
            params.initial_balance(),
            params.horizon_days(),
            params.annual_rate_percent(),
            daily_rate,
            self.tier1_percent_of_reference(),
        );

        let mut records = Vec::with_capacity(params.horizon_days() as usize);
        let mut balance = params.initial_balance();

        for day in 1..=params.horizon_days() {
            let (tier1, tier2) = Self::split_balance(balance);
            let record = DailyRecord::from_components(day, balance, tier1 * tier1_rate, tier2 * tier2_rate);
            balance = record.closing_balance;
            records.push(record);
        }

        debug!("Tiered simulation closed at {:.2}", balance);
        records
    }
}

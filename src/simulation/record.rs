use serde::{Deserialize, Serialize};

/// One simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Day number, starting at 1
    pub day: u32,

    /// Balance carried in from the previous day
    pub opening_balance: f64,

    /// Yield earned on the Tier 1 band (whole balance for untiered products)
    pub tier1_yield: f64,

    /// Yield earned on the Tier 2 band
    pub tier2_yield: f64,

    /// Total yield for the day
    pub yield_amount: f64,

    /// Balance after the day's yield is reinvested
    pub closing_balance: f64,
}

impl DailyRecord {
    /// Build a record from its tier components
    pub(crate) fn from_components(
        day: u32,
        opening_balance: f64,
        tier1_yield: f64,
        tier2_yield: f64,
    ) -> Self {
        let yield_amount = tier1_yield + tier2_yield;
        Self {
            day,
            opening_balance,
            tier1_yield,
            tier2_yield,
            yield_amount,
            closing_balance: opening_balance + yield_amount,
        }
    }
}

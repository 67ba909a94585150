//! Tiered daily-compounding simulator for the wallet product

mod params;
mod record;
mod tiered;

pub use params::SimulationParameters;
pub use record::DailyRecord;
pub use tiered::TieredProduct;

use crate::error::SimulationResult;

// ============================================================================
// Tier Constants
// ============================================================================
// The wallet pays a premium multiplier of the reference rate on the first
// band of the balance and a reduced multiplier on everything above it.

/// Balance cap of Tier 1, in currency units
pub const TIER_THRESHOLD: f64 = 5_000.0;

/// Tier 1 yield multiplier on the daily reference rate (110%)
pub const TIER1_MULTIPLIER: f64 = 1.10;

/// Tier 2 yield multiplier on the daily reference rate (80%)
pub const TIER2_MULTIPLIER: f64 = 0.80;

/// Calendar days used to de-annualize the reference rate
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Longest accepted horizon (100 years)
pub const MAX_HORIZON_DAYS: u32 = 36_500;

/// Reference rate suggested when the caller has none (11.15% a.a.)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 11.15;

/// Convert an annual percentage rate into the equivalent daily compounding rate
///
/// `(1 + annual / 100)^(1/365) - 1`
pub fn daily_rate_from_annual(annual_rate_percent: f64) -> f64 {
    (1.0 + annual_rate_percent / 100.0).powf(1.0 / DAYS_PER_YEAR) - 1.0
}

/// Simulate the standard 110%/80% wallet, one record per day
///
/// Fails with `InvalidParameter` when the balance is not positive, the horizon
/// is negative or above [`MAX_HORIZON_DAYS`], or the rate is negative. A
/// zero-day horizon yields no records.
pub fn simulate(
    initial_balance: f64,
    horizon_days: i64,
    annual_rate_percent: f64,
) -> SimulationResult<Vec<DailyRecord>> {
    let params = SimulationParameters::new(initial_balance, horizon_days, annual_rate_percent)?;
    Ok(TieredProduct::standard().simulate(&params))
}

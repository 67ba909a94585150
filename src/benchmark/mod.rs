//! Savings-account benchmark for side-by-side comparison with the wallet

mod savings;

pub use savings::{simulate_savings, SavingsModel};

// ============================================================================
// Default Savings Assumptions
// ============================================================================
// Savings accounts are modeled at a flat 0.5% per month with no referential
// rate on top. The monthly rate accrues on a 30-day cycle.

/// Default monthly savings rate (0.5%)
pub const DEFAULT_SAVINGS_MONTHLY_RATE: f64 = 0.005;

/// Days in one savings anniversary cycle
pub const DEFAULT_CYCLE_DAYS: u32 = 30;

/// Default share of the reference rate for `SavingsModel::ReferenceFraction`
pub const DEFAULT_REFERENCE_FRACTION: f64 = 0.70;

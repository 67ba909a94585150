//! Wallet Yield - daily compounding simulator for a tiered digital-wallet savings product
//!
//! This library provides:
//! - Tiered daily simulation (110% of the reference rate up to 5,000, 80% above)
//! - Savings-account benchmark trajectories
//! - Summaries, side-by-side comparisons and chart series
//! - Parallel sweeps over reference rates
//! - CSV and text-table output

pub mod error;
pub mod simulation;
pub mod benchmark;
pub mod report;
pub mod sweep;
pub mod config;

// Re-export commonly used types
pub use error::{SimulationError, SimulationResult, ConfigError};
pub use simulation::{simulate, DailyRecord, SimulationParameters, TieredProduct};
pub use benchmark::{simulate_savings, SavingsModel};
pub use report::{Comparison, SimulationSummary};
pub use sweep::sweep_rates;
pub use config::SimulatorConfig;

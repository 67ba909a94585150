//! Parallel sensitivity of the wallet result to the reference rate

use rayon::prelude::*;
use serde::Serialize;

use crate::error::SimulationResult;
use crate::report::SimulationSummary;
use crate::simulation::{SimulationParameters, TieredProduct};

/// Result for one reference rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub annual_rate_percent: f64,
    pub summary: SimulationSummary,
}

/// Run one tiered simulation per reference rate
///
/// All rates are validated before any simulation starts. Results keep the
/// order of `rates`.
pub fn sweep_rates(
    initial_balance: f64,
    horizon_days: i64,
    rates: &[f64],
    product: &TieredProduct,
) -> SimulationResult<Vec<SweepPoint>> {
    let params: Vec<SimulationParameters> = rates
        .iter()
        .map(|&rate| SimulationParameters::new(initial_balance, horizon_days, rate))
        .collect::<SimulationResult<_>>()?;

    log::debug!("Sweeping {} reference rates over {} days", params.len(), horizon_days);

    Ok(params
        .par_iter()
        .map(|p| {
            let records = product.simulate(p);
            SweepPoint {
                annual_rate_percent: p.annual_rate_percent(),
                summary: SimulationSummary::from_records(p.initial_balance(), &records),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::simulate;

    #[test]
    fn test_sweep_matches_individual_runs() {
        let rates = [0.0, 8.0, 10.45, 13.75];
        let points = sweep_rates(6_000.0, 180, &rates, &TieredProduct::standard()).unwrap();

        assert_eq!(points.len(), rates.len());
        for (point, &rate) in points.iter().zip(rates.iter()) {
            assert_eq!(point.annual_rate_percent, rate);
            let records = simulate(6_000.0, 180, rate).unwrap();
            assert_eq!(point.summary.final_balance, records[179].closing_balance);
        }
        assert_eq!(points[0].summary.total_yield, 0.0);
    }

    #[test]
    fn test_sweep_is_monotonic_in_rate() {
        let rates = [5.0, 10.0, 15.0];
        let points = sweep_rates(1_000.0, 365, &rates, &TieredProduct::standard()).unwrap();
        assert!(points[0].summary.final_balance < points[1].summary.final_balance);
        assert!(points[1].summary.final_balance < points[2].summary.final_balance);
    }

    #[test]
    fn test_sweep_rejects_any_invalid_rate() {
        let result = sweep_rates(1_000.0, 30, &[10.0, -1.0], &TieredProduct::standard());
        assert!(result.is_err());
        assert!(sweep_rates(0.0, 30, &[10.0], &TieredProduct::standard()).is_err());
    }

    #[test]
    fn test_empty_rate_list() {
        assert!(sweep_rates(1_000.0, 30, &[], &TieredProduct::standard()).unwrap().is_empty());
    }
}

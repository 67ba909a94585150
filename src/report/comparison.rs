//! Side-by-side wallet and savings trajectories

use serde::Serialize;

use super::SimulationSummary;
use crate::benchmark::SavingsModel;
use crate::error::SimulationResult;
use crate::simulation::{DailyRecord, SimulationParameters, TieredProduct};

/// One named trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub records: Vec<DailyRecord>,
    pub summary: SimulationSummary,
}

impl Series {
    fn new(label: String, initial_balance: f64, records: Vec<DailyRecord>) -> Self {
        let summary = SimulationSummary::from_records(initial_balance, &records);
        Self { label, records, summary }
    }
}

/// A single chart point: x = day, y = closing balance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint<'a> {
    pub series: &'a str,
    pub day: u32,
    pub balance: f64,
}

/// Wallet, optional no-bonus wallet, and savings benchmark over the same inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub parameters: SimulationParameters,
    pub wallet: Series,
    /// Present only when the wallet carries a Tier 1 bonus
    pub wallet_without_bonus: Option<Series>,
    /// Absent when the savings model cannot credit anything within the horizon
    pub savings: Option<Series>,
}

impl Comparison {
    pub fn run(
        parameters: SimulationParameters,
        product: &TieredProduct,
        savings_model: &SavingsModel,
    ) -> SimulationResult<Self> {
        let initial = parameters.initial_balance();

        let wallet = Series::new(product.label(), initial, product.simulate(&parameters));

        let wallet_without_bonus = if product.has_bonus() {
            let standard = TieredProduct::standard();
            Some(Series::new(standard.label(), initial, standard.simulate(&parameters)))
        } else {
            None
        };

        savings_model.validate()?;
        let savings = if savings_model.credits_within(parameters.horizon_days()) {
            let records = savings_model.simulate(&parameters)?;
            Some(Series::new(savings_model.label(), initial, records))
        } else {
            None
        };

        Ok(Self {
            parameters,
            wallet,
            wallet_without_bonus,
            savings,
        })
    }

    /// All series in display order
    pub fn series(&self) -> impl Iterator<Item = &Series> {
        std::iter::once(&self.wallet)
            .chain(self.wallet_without_bonus.as_ref())
            .chain(self.savings.as_ref())
    }

    /// Flatten every series into chart points, series by series
    pub fn chart_points(&self) -> Vec<ChartPoint<'_>> {
        self.series()
            .flat_map(|series| {
                series.records.iter().map(move |r| ChartPoint {
                    series: series.label.as_str(),
                    day: r.day,
                    balance: r.closing_balance,
                })
            })
            .collect()
    }

    /// Wallet total yield minus the savings total yield, if savings applies
    pub fn yield_advantage(&self) -> Option<f64> {
        self.savings
            .as_ref()
            .map(|savings| self.wallet.summary.total_yield - savings.summary.total_yield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> SimulationParameters {
        SimulationParameters::new(10_000.0, 90, 11.15).unwrap()
    }

    #[test]
    fn test_standard_comparison_has_two_series() {
        let comparison = Comparison::run(params(), &TieredProduct::standard(), &SavingsModel::default()).unwrap();

        assert!(comparison.wallet_without_bonus.is_none());
        assert_eq!(comparison.series().count(), 2);
        assert_eq!(comparison.wallet.records.len(), 90);
        assert_eq!(comparison.savings.as_ref().unwrap().records.len(), 90);
        assert_eq!(comparison.chart_points().len(), 180);
    }

    #[test]
    fn test_bonus_adds_reference_series() {
        let product = TieredProduct::with_bonus(10.0).unwrap();
        let comparison = Comparison::run(params(), &product, &SavingsModel::default()).unwrap();

        let labels: Vec<&str> = comparison.series().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Wallet (120%)", "Wallet (110%)", "Savings (0.50% a.m.)"]);

        let without = comparison.wallet_without_bonus.as_ref().unwrap();
        assert!(comparison.wallet.summary.final_balance > without.summary.final_balance);
    }

    #[test]
    fn test_chart_points_follow_records() {
        let comparison = Comparison::run(params(), &TieredProduct::standard(), &SavingsModel::default()).unwrap();
        let points = comparison.chart_points();

        assert_eq!(points[0].series, "Wallet (110%)");
        assert_eq!(points[0].day, 1);
        assert_eq!(points[0].balance, comparison.wallet.records[0].closing_balance);

        let last = points.last().unwrap();
        assert_eq!(last.series, "Savings (0.50% a.m.)");
        assert_eq!(last.day, 90);
        assert_eq!(last.balance, comparison.savings.as_ref().unwrap().summary.final_balance);
    }

    #[test]
    fn test_yield_advantage() {
        let comparison = Comparison::run(params(), &TieredProduct::standard(), &SavingsModel::default()).unwrap();
        let savings = comparison.savings.as_ref().unwrap();
        let advantage = comparison.yield_advantage().unwrap();
        assert_relative_eq!(advantage, comparison.wallet.summary.total_yield - savings.summary.total_yield);
        // 110%/80% of 11.15% a.a. beats 0.5% a.m.
        assert!(advantage > 0.0);
    }

    #[test]
    fn test_anniversary_savings_omitted_before_first_cycle() {
        let model = SavingsModel::Anniversary {
            monthly_rate: 0.005,
            cycle_days: 30,
        };
        let short = SimulationParameters::new(10_000.0, 29, 11.15).unwrap();
        let comparison = Comparison::run(short, &TieredProduct::standard(), &model).unwrap();

        assert!(comparison.savings.is_none());
        assert!(comparison.yield_advantage().is_none());
        assert_eq!(comparison.series().count(), 1);
        assert!(comparison.chart_points().iter().all(|p| p.series == "Wallet (110%)"));

        let full_cycle = SimulationParameters::new(10_000.0, 30, 11.15).unwrap();
        let comparison = Comparison::run(full_cycle, &TieredProduct::standard(), &model).unwrap();
        assert!(comparison.savings.is_some());
        assert_eq!(comparison.series().count(), 2);
    }

    #[test]
    fn test_invalid_savings_model_fails() {
        let model = SavingsModel::Anniversary {
            monthly_rate: 0.005,
            cycle_days: 0,
        };
        assert!(Comparison::run(params(), &TieredProduct::standard(), &model).is_err());
    }
}

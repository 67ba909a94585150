//! CSV export of daily tables and chart series

use std::io::Write;

use super::Comparison;
use crate::error::ConfigError;
use crate::simulation::DailyRecord;

/// Write one row per day, header taken from the record fields
pub fn write_daily_csv<W: Write>(writer: W, records: &[DailyRecord]) -> Result<(), ConfigError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `series,day,balance` rows for every series in the comparison
pub fn write_chart_csv<W: Write>(writer: W, comparison: &Comparison) -> Result<(), ConfigError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in comparison.chart_points() {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::SavingsModel;
    use crate::simulation::{simulate, SimulationParameters, TieredProduct};

    #[test]
    fn test_daily_csv_layout() {
        let records = simulate(1_000.0, 3, 0.0).unwrap();
        let mut buf = Vec::new();
        write_daily_csv(&mut buf, &records).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "day,opening_balance,tier1_yield,tier2_yield,yield_amount,closing_balance"
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,1000.0,0.0,0.0,0.0,1000.0");
        assert!(lines[3].starts_with("3,"));
    }

    #[test]
    fn test_chart_csv_rows() {
        let params = SimulationParameters::new(2_000.0, 5, 11.15).unwrap();
        let comparison = Comparison::run(params, &TieredProduct::standard(), &SavingsModel::default()).unwrap();

        let mut buf = Vec::new();
        write_chart_csv(&mut buf, &comparison).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "series,day,balance");
        assert_eq!(lines.len(), 1 + 10);
        assert!(lines[1].starts_with("Wallet (110%),1,"));
        assert!(lines[10].starts_with("Savings (0.50% a.m.),5,"));
    }
}

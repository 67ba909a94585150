//! Summaries, comparisons and output formats for simulated trajectories

mod comparison;
mod csv_out;
mod format;
mod summary;

pub use comparison::{ChartPoint, Comparison, Series};
pub use csv_out::{write_chart_csv, write_daily_csv};
pub use format::{format_currency, format_period, render_table};
pub use summary::SimulationSummary;

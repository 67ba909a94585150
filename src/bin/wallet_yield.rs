//! Run a wallet simulation from the command line
//!
//! Prints the daily wallet table (text, CSV or JSON), a summary against the
//! savings benchmark, and optionally writes the chart series to a CSV file.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wallet_yield::{
    benchmark::{DEFAULT_CYCLE_DAYS, DEFAULT_REFERENCE_FRACTION, DEFAULT_SAVINGS_MONTHLY_RATE},
    report::{format_currency, format_period, render_table, write_chart_csv, write_daily_csv},
    sweep_rates, Comparison, SavingsModel, SimulationError, SimulationSummary, SimulatorConfig,
};

/// Daily yield simulator for a tiered digital wallet
#[derive(Parser, Debug)]
#[command(name = "wallet_yield", version, about)]
struct Cli {
    /// JSON configuration file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial balance
    #[arg(long)]
    balance: Option<f64>,

    /// Horizon in days
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,

    /// Annual reference rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Extra percentage points on the Tier 1 multiplier
    #[arg(long)]
    bonus: Option<f64>,

    /// Savings benchmark model
    #[arg(long, value_enum)]
    savings_model: Option<SavingsModelKind>,

    /// Monthly rate for the flat-monthly and anniversary models (default 0.005 = 0.5%)
    #[arg(long)]
    savings_monthly_rate: Option<f64>,

    /// Share of the reference rate for the reference-fraction model (default 0.70)
    #[arg(long)]
    savings_fraction: Option<f64>,

    /// Anniversary cycle length in days (default 30)
    #[arg(long)]
    cycle_days: Option<u32>,

    /// Output format for the daily table
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write the comparison chart series to this CSV file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Comma-separated reference rates to sweep instead of a single run
    #[arg(long, value_delimiter = ',')]
    sweep: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SavingsModelKind {
    FlatMonthly,
    ReferenceFraction,
    Anniversary,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl Cli {
    /// Merge flags over the config file (or defaults)
    fn resolve_config(&self) -> Result<SimulatorConfig> {
        let mut config = match &self.config {
            Some(path) => SimulatorConfig::from_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => SimulatorConfig::default(),
        };

        if let Some(balance) = self.balance {
            config.initial_balance = balance;
        }
        if let Some(days) = self.days {
            config.horizon_days = days;
        }
        if let Some(rate) = self.rate {
            config.annual_rate_percent = rate;
        }
        if let Some(bonus) = self.bonus {
            config.bonus_percent = bonus;
        }
        config.savings = self.resolve_savings(config.savings)?;
        Ok(config)
    }

    /// Pick the savings model and apply the model flags to it
    ///
    /// Without `--savings-model` the flags adjust the configured model, and a
    /// flag that model does not use is an error.
    fn resolve_savings(&self, current: SavingsModel) -> Result<SavingsModel> {
        let base = match self.savings_model {
            Some(SavingsModelKind::FlatMonthly) => SavingsModel::FlatMonthly {
                monthly_rate: DEFAULT_SAVINGS_MONTHLY_RATE,
            },
            Some(SavingsModelKind::ReferenceFraction) => SavingsModel::ReferenceFraction {
                fraction: DEFAULT_REFERENCE_FRACTION,
            },
            Some(SavingsModelKind::Anniversary) => SavingsModel::Anniversary {
                monthly_rate: DEFAULT_SAVINGS_MONTHLY_RATE,
                cycle_days: DEFAULT_CYCLE_DAYS,
            },
            None => current,
        };

        Ok(match base {
            SavingsModel::FlatMonthly { monthly_rate } => {
                reject_unused(
                    &base,
                    &[
                        ("--savings-fraction", self.savings_fraction.is_some()),
                        ("--cycle-days", self.cycle_days.is_some()),
                    ],
                )?;
                SavingsModel::FlatMonthly {
                    monthly_rate: self.savings_monthly_rate.unwrap_or(monthly_rate),
                }
            }
            SavingsModel::ReferenceFraction { fraction } => {
                reject_unused(
                    &base,
                    &[
                        ("--savings-monthly-rate", self.savings_monthly_rate.is_some()),
                        ("--cycle-days", self.cycle_days.is_some()),
                    ],
                )?;
                SavingsModel::ReferenceFraction {
                    fraction: self.savings_fraction.unwrap_or(fraction),
                }
            }
            SavingsModel::Anniversary { monthly_rate, cycle_days } => {
                reject_unused(&base, &[("--savings-fraction", self.savings_fraction.is_some())])?;
                SavingsModel::Anniversary {
                    monthly_rate: self.savings_monthly_rate.unwrap_or(monthly_rate),
                    cycle_days: self.cycle_days.unwrap_or(cycle_days),
                }
            }
        })
    }
}

/// Fail on the first given flag that `model` has no use for
fn reject_unused(model: &SavingsModel, flags: &[(&str, bool)]) -> Result<()> {
    if let Some((flag, _)) = flags.iter().find(|(_, given)| *given) {
        bail!(
            "{flag} does not apply to the {} benchmark; pass --savings-model to switch models",
            model.label()
        );
    }
    Ok(())
}

fn print_summary(label: &str, summary: &SimulationSummary) {
    println!(
        "  {:<32} final {:>18}  yield {:>16} ({:.2}%)",
        label,
        format_currency(summary.final_balance),
        format_currency(summary.total_yield),
        summary.yield_percent,
    );
}

fn run_sweep(config: &SimulatorConfig, rates: &[f64]) -> Result<()> {
    let product = config.product()?;
    let points = sweep_rates(config.initial_balance, config.horizon_days, rates, &product)?;

    println!("Reference rate sweep ({} days, {})", config.horizon_days, product.label());
    for point in &points {
        print_summary(&format!("{:.2}% a.a.", point.annual_rate_percent), &point.summary);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    if let Some(rates) = &cli.sweep {
        return run_sweep(&config, rates);
    }

    let start = Instant::now();
    let parameters = config.parameters()?;
    let product = config.product()?;
    let comparison = Comparison::run(parameters, &product, &config.savings)?;
    log::info!("Simulated {} days in {:?}", parameters.horizon_days(), start.elapsed());

    match cli.format {
        OutputFormat::Table => {
            print!("{}", render_table(&comparison.wallet.records));
            println!();
            println!(
                "Summary (initial {}, {}):",
                format_currency(parameters.initial_balance()),
                format_period(i64::from(parameters.horizon_days())),
            );
            for series in comparison.series() {
                print_summary(&series.label, &series.summary);
            }
            match comparison.yield_advantage() {
                Some(advantage) => {
                    println!("  Wallet advantage over savings: {}", format_currency(advantage))
                }
                None => println!(
                    "  {:<32} N/A (no anniversary within {} days)",
                    config.savings.label(),
                    parameters.horizon_days()
                ),
            }
        }
        OutputFormat::Csv => {
            write_daily_csv(io::stdout().lock(), &comparison.wallet.records)
                .context("Failed to write daily CSV")?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }
    }

    if let Some(path) = &cli.chart {
        let file = File::create(path)
            .with_context(|| format!("Failed to create chart file {}", path.display()))?;
        write_chart_csv(BufWriter::new(file), &comparison).context("Failed to write chart CSV")?;
        log::info!("Chart series written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

/// 2 for rejected simulation inputs, 1 for everything else
fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<SimulationError>().is_some() {
        2
    } else {
        1
    }
}

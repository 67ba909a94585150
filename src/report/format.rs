//! Currency formatting and the plain-text daily table

use std::fmt::Write;

use crate::simulation::DailyRecord;

/// Format a value as Brazilian Real, e.g. `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    // "-0,00" is not a useful rendering of a tiny negative
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("R$ {sign}{grouped},{cents}")
}

/// Describe a horizon in the largest whole unit that fits
///
/// Exact years (365 days) win over months, a 30-day multiple (or 31 days)
/// reads as months, a 7-day multiple as weeks; anything else stays in days.
pub fn format_period(days: i64) -> String {
    fn plural(count: i64, unit: &str) -> String {
        if count == 1 {
            format!("1 {unit}")
        } else {
            format!("{count} {unit}s")
        }
    }

    if days <= 0 {
        return format!("{days} days");
    }
    if days % 365 == 0 {
        return plural(days / 365, "year");
    }
    if days == 31 {
        return plural(1, "month");
    }
    if days % 30 == 0 {
        return plural(days / 30, "month");
    }
    if days % 7 == 0 {
        return plural(days / 7, "week");
    }
    plural(days, "day")
}

/// Render records as a fixed-width table
pub fn render_table(records: &[DailyRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>18} {:>16} {:>16} {:>16} {:>18}",
        "Day", "Opening", "Tier 1 Yield", "Tier 2 Yield", "Day Yield", "Closing"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:>6} {:>18} {:>16} {:>16} {:>16} {:>18}",
            r.day,
            format_currency(r.opening_balance),
            format_currency(r.tier1_yield),
            format_currency(r.tier2_yield),
            format_currency(r.yield_amount),
            format_currency(r.closing_balance),
        );
    }
    out
}

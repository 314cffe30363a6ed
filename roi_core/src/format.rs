//! # Presentation Formatter
//!
//! Currency conversion and locale-free numeric formatting for the final
//! metrics. Display-only: nothing here feeds back into the numeric result
//! fields, but the rounding rules are an observable contract, so the
//! formatter lives in the core where it can be tested.
//!
//! Rules:
//!
//! - USD display value = CAD value x fx rate; CAD passes through.
//! - Currency amounts round to zero fractional digits, grouped with commas.
//! - Per-square-foot unit costs keep two fractional digits.
//! - ROI ratios keep two fractional digits; not-applicable renders "n/a".

use serde::{Deserialize, Serialize};

use crate::calculations::roi::Roi;
use crate::inputs::Currency;

/// Formatted string projection of every result metric, in the display
/// currency selected on the input record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedMetrics {
    pub unit_cost_per_sqft: String,
    pub total_material_cost: String,
    pub freight_cost: String,
    pub total_investment: String,
    pub downtime_loss_per_event: String,
    pub roi: String,
    pub resurfacing_interval_years: String,
    pub number_of_resurfacing_events: String,
    pub total_resurfacing_cost: String,
    pub total_downtime_cost: String,
    pub lifetime_savings: String,
    pub annualized_savings: String,
}

/// Convert a CAD amount into the display currency.
pub fn convert(value_cad: f64, currency: Currency, fx_rate_cad_to_usd: f64) -> f64 {
    match currency {
        Currency::Cad => value_cad,
        Currency::Usd => value_cad * fx_rate_cad_to_usd,
    }
}

/// Format a currency amount: rounded to whole units, comma-grouped,
/// `$`-prefixed. Sign precedes the `$` for negative amounts.
pub fn currency_amount(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Format a per-square-foot unit cost with two fractional digits, or "n/a"
/// when the unit cost is undefined (zero area).
pub fn unit_cost(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "n/a".to_string(),
    }
}

/// Format an ROI ratio with two fractional digits, or "n/a".
pub fn roi_ratio(roi: Roi) -> String {
    match roi {
        Roi::Ratio(r) => format!("{:.2}", r),
        Roi::NotApplicable => "n/a".to_string(),
    }
}

/// Format a year count.
pub fn years(value: f64) -> String {
    format!("{:.0} years", value)
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1000);
        value /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

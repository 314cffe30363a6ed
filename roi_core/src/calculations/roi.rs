//! # ROI Module
//!
//! Resolves the downtime cost rate for an industry, computes the per-event
//! downtime loss, and combines it with the total investment into a return
//! ratio plus lifetime and annualized savings.
//!
//! ROI with zero downtime hours is reported as [`Roi::NotApplicable`], not
//! as the numeral 0; the two must stay distinguishable all the way to the
//! display layer.

use serde::{Deserialize, Serialize};

use crate::inputs::Industry;

/// Default downtime cost per hour by industry (CAD). Custom facilities
/// supply their own rate on the input record.
pub fn default_downtime_cost_per_hour(industry: Industry) -> f64 {
    match industry {
        Industry::Manufacturing => 260_000.0,
        Industry::Automotive => 480_000.0,
        Industry::Datacenter => 750_000.0,
        Industry::Hydro => 320_000.0,
        Industry::Custom => 0.0,
    }
}

/// Return on investment: a dimensionless ratio, or not applicable when the
/// facility reports no downtime per event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Roi {
    /// Downtime loss per event divided by total investment
    Ratio(f64),
    /// Undefined: downtime hours per event is zero
    NotApplicable,
}

impl Roi {
    /// The ratio, when applicable.
    pub fn ratio(self) -> Option<f64> {
        match self {
            Roi::Ratio(r) => Some(r),
            Roi::NotApplicable => None,
        }
    }
}

/// Results from the ROI and savings calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiSummary {
    /// Downtime loss for one resurfacing event
    pub downtime_loss_per_event: f64,

    /// Return ratio, or not applicable when downtime hours are zero
    pub roi: Roi,

    /// (avoided resurfacing + avoided downtime) - total investment
    pub lifetime_savings: f64,

    /// Lifetime savings spread over the facility life
    pub annualized_savings: f64,
}

/// Downtime loss for a single resurfacing event.
///
/// Uses the industry default hourly rate, or the supplied custom rate when
/// the industry is `Custom`.
pub fn downtime_loss_per_event(
    industry: Industry,
    custom_cost_per_hour: f64,
    downtime_hours_per_event: f64,
) -> f64 {
    let hourly = match industry {
        Industry::Custom => custom_cost_per_hour,
        other => default_downtime_cost_per_hour(other),
    };
    hourly * downtime_hours_per_event
}

/// Combine the lifecycle aggregates and the total investment into the ROI
/// ratio and savings figures.
///
/// `facility_life_years` must have been validated positive upstream before
/// the annualization divide.
pub fn calculate(
    downtime_loss: f64,
    downtime_hours_per_event: f64,
    total_investment: f64,
    total_resurfacing_cost: f64,
    total_downtime_cost: f64,
    facility_life_years: f64,
) -> RoiSummary {
    let roi = if downtime_hours_per_event == 0.0 {
        Roi::NotApplicable
    } else {
        Roi::Ratio(downtime_loss / total_investment)
    };

    let lifetime_savings = total_resurfacing_cost + total_downtime_cost - total_investment;
    let annualized_savings = lifetime_savings / facility_life_years;

    RoiSummary {
        downtime_loss_per_event: downtime_loss,
        roi,
        lifetime_savings,
        annualized_savings,
    }
}

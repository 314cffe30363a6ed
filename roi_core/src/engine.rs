//! # Estimation Pipeline
//!
//! The top-level entry point: [`calculate`] takes a [`CalculationInput`],
//! validates the positivity constraints, runs the calculation modules in
//! dependency order (material -> freight -> lifecycle -> roi), and returns
//! the full [`CalculationResult`] with its formatted display projection.
//!
//! The engine is a pure function of the input record: no caching, no I/O,
//! no state across calls. Concurrent callers need no synchronization.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::engine::calculate;
//! use roi_core::inputs::{
//!     CalculationInput, Currency, Industry, MarkupProfile, PricingStrategy,
//! };
//!
//! let input = CalculationInput {
//!     area_sqft: 50_000.0,
//!     thickness_in: 6.0,
//!     facility_life_years: 20.0,
//!     industry: Industry::Manufacturing,
//!     custom_downtime_cost_per_hour: 0.0,
//!     downtime_hours_per_event: 3.0,
//!     markup: MarkupProfile::ReadyMix,
//!     dosage_percent: 100.0,
//!     delivery_city: "Toronto".to_string(),
//!     currency: Currency::Cad,
//!     fx_rate_cad_to_usd: 0.73,
//!     pricing_strategy: PricingStrategy::Tiered,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.number_of_resurfacing_events, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::freight::{self, ResolvedCity};
use crate::calculations::roi::{self, Roi};
use crate::calculations::{lifecycle, material};
use crate::errors::CalcResult;
use crate::format::{self, FormattedMetrics};
use crate::inputs::CalculationInput;

/// Complete result record for one estimation.
///
/// All monetary fields are raw CAD amounts; `formatted` carries the
/// currency-converted, rounded display strings and never feeds back into
/// the numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Material cost per square foot; `None` only for standalone strategy
    /// use with zero area (the pipeline validates area > 0)
    pub unit_cost_per_sqft: Option<f64>,

    /// Total marked-up material investment
    pub total_material_cost: f64,

    /// Total freight cost under the resolved city rate
    pub freight_cost: f64,

    /// Material plus freight, exactly
    pub total_investment: f64,

    /// Downtime loss for one resurfacing event
    pub downtime_loss_per_event: f64,

    /// Return ratio, or not applicable when downtime hours are zero
    pub roi: Roi,

    /// Years between conventional resurfacings
    pub resurfacing_interval_years: f64,

    /// floor(facility life / interval), never negative
    pub number_of_resurfacing_events: u32,

    /// Total avoided resurfacing cost over the facility life
    pub total_resurfacing_cost: f64,

    /// Total avoided downtime cost over the facility life
    pub total_downtime_cost: f64,

    /// (avoided resurfacing + avoided downtime) - total investment
    pub lifetime_savings: f64,

    /// Lifetime savings per year of facility life
    pub annualized_savings: f64,

    /// Which freight rate was applied, for caller disclosure
    pub resolved_city: ResolvedCity,

    /// Display projection in the requested currency
    pub formatted: FormattedMetrics,
}

/// Run the full estimation pipeline.
///
/// # Errors
///
/// [`crate::errors::CalcError::InvalidInput`] when area, thickness,
/// facility life, or fx rate is non-positive, or a downtime figure is
/// negative. Every other combination of valid inputs produces a fully
/// defined result; an unmatched delivery city is reported, not rejected.
pub fn calculate(input: &CalculationInput) -> CalcResult<CalculationResult> {
    input.validate()?;

    let material_cost = material::calculate(
        input.pricing_strategy,
        input.area_sqft,
        input.thickness_in,
        input.dosage_percent,
        input.markup,
    );

    let freight_quote = freight::calculate(
        &input.delivery_city,
        material_cost.adjusted_lbs_per_yd3,
        material_cost.volume_yd3,
    );

    let downtime_loss = roi::downtime_loss_per_event(
        input.industry,
        input.custom_downtime_cost_per_hour,
        input.downtime_hours_per_event,
    );

    let projection = lifecycle::calculate(
        input.industry,
        input.thickness_in,
        input.facility_life_years,
        input.area_sqft,
        downtime_loss,
    );

    let total_investment = material_cost.total_cost + freight_quote.cost;

    let summary = roi::calculate(
        downtime_loss,
        input.downtime_hours_per_event,
        total_investment,
        projection.total_resurfacing_cost,
        projection.total_downtime_cost,
        input.facility_life_years,
    );

    let fx = |v: f64| format::convert(v, input.currency, input.fx_rate_cad_to_usd);
    let formatted = FormattedMetrics {
        unit_cost_per_sqft: format::unit_cost(material_cost.unit_cost_per_sqft.map(&fx)),
        total_material_cost: format::currency_amount(fx(material_cost.total_cost)),
        freight_cost: format::currency_amount(fx(freight_quote.cost)),
        total_investment: format::currency_amount(fx(total_investment)),
        downtime_loss_per_event: format::currency_amount(fx(summary.downtime_loss_per_event)),
        roi: format::roi_ratio(summary.roi),
        resurfacing_interval_years: format::years(projection.interval_years),
        number_of_resurfacing_events: projection.event_count.to_string(),
        total_resurfacing_cost: format::currency_amount(fx(projection.total_resurfacing_cost)),
        total_downtime_cost: format::currency_amount(fx(projection.total_downtime_cost)),
        lifetime_savings: format::currency_amount(fx(summary.lifetime_savings)),
        annualized_savings: format::currency_amount(fx(summary.annualized_savings)),
    };

    Ok(CalculationResult {
        unit_cost_per_sqft: material_cost.unit_cost_per_sqft,
        total_material_cost: material_cost.total_cost,
        freight_cost: freight_quote.cost,
        total_investment,
        downtime_loss_per_event: summary.downtime_loss_per_event,
        roi: summary.roi,
        resurfacing_interval_years: projection.interval_years,
        number_of_resurfacing_events: projection.event_count,
        total_resurfacing_cost: projection.total_resurfacing_cost,
        total_downtime_cost: projection.total_downtime_cost,
        lifetime_savings: summary.lifetime_savings,
        annualized_savings: summary.annualized_savings,
        resolved_city: freight_quote.resolved_city,
        formatted,
    })
}

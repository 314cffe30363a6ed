//! # roi_core - Concrete Additive ROI Estimation Engine
//!
//! `roi_core` computes the return on investment of treating a concrete slab
//! with an additive versus conventional resurfacing, from facility
//! parameters (area, thickness, industry, operational life) and commercial
//! parameters (dosage, markup profile, delivery city, currency).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input record to result record;
//!   nothing persists between calls
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Display Is Data**: rounding and currency conversion rules are part
//!   of the result record and tested like any other output
//!
//! ## Quick Start
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
//! println!("{}", result.formatted.lifetime_savings);
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - the input record and enumerated commercial parameters
//! - [`calculations`] - material, freight, lifecycle, and ROI modules
//! - [`engine`] - the top-level pipeline and result record
//! - [`format`] - currency conversion and display formatting
//! - [`errors`] - structured error types

pub mod calculations;
pub mod engine;
pub mod errors;
pub mod format;
pub mod inputs;

// Re-export commonly used types at crate root for convenience
pub use calculations::{FreightQuote, LifecycleProjection, MaterialCost, ResolvedCity, Roi, RoiSummary};
pub use engine::{calculate, CalculationResult};
pub use errors::{CalcError, CalcResult};
pub use format::FormattedMetrics;
pub use inputs::{CalculationInput, Currency, Industry, MarkupProfile, PricingStrategy};

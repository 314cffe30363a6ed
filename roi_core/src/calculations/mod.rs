//! # Estimation Calculations
//!
//! The four computation modules of the estimation pipeline. Each follows
//! the pattern:
//!
//! - constants the module owns, declared at the top
//! - a pure `calculate(...)` function
//! - a JSON-serializable result struct
//!
//! ## Pipeline Order
//!
//! [`material`] and the interval lookup in [`lifecycle`] are the leaves;
//! [`freight`] needs the material weight, [`roi`] needs the investment and
//! the lifecycle aggregates. The top-level pipeline in
//! [`crate::engine::calculate`] composes them in that order.
//!
//! ## Available Calculations
//!
//! - [`material`] - material investment under tiered or volumetric pricing
//! - [`freight`] - city rate resolution and pallet-based freight cost
//! - [`lifecycle`] - resurfacing interval, event projection, avoided costs
//! - [`roi`] - downtime loss, return ratio, lifetime/annualized savings

pub mod freight;
pub mod lifecycle;
pub mod material;
pub mod roi;

// Re-export commonly used types
pub use freight::{FreightQuote, ResolvedCity};
pub use lifecycle::LifecycleProjection;
pub use material::MaterialCost;
pub use roi::{Roi, RoiSummary};

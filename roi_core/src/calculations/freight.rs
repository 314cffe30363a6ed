//! # Freight Module
//!
//! Resolves a delivery city to a known per-truck freight rate (or a
//! declared fallback for unmatched cities) and converts total material
//! weight into a freight cost via pallet and truck constants.
//!
//! An unmatched city is not an error: the quote falls back to
//! [`FALLBACK_RATE_PER_TRUCK`] and the result is tagged with
//! [`ResolvedCity::Fallback`] so the caller can disclose that the rate is
//! an estimate rather than an exact match.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Pounds to kilograms conversion factor.
pub const LBS_TO_KG: f64 = 0.453592;
/// Nominal pallet capacity in kilograms.
pub const KG_PER_PALLET: f64 = 1000.0;
/// Pallets per truckload.
pub const PALLETS_PER_TRUCK: f64 = 24.0;
/// Per-truck rate applied when the delivery city is not in the table.
pub const FALLBACK_RATE_PER_TRUCK: f64 = 4500.0;

/// Per-truck freight rates by normalized city name (CAD).
///
/// Keys are already trimmed and lowercased; lookups normalize the query
/// the same way, so matching is case- and whitespace-insensitive.
static FREIGHT_RATES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("toronto", 3200.0),
        ("mississauga", 3100.0),
        ("ottawa", 3400.0),
        ("montreal", 3600.0),
        ("quebec city", 3900.0),
        ("winnipeg", 4300.0),
        ("calgary", 4700.0),
        ("edmonton", 4800.0),
        ("vancouver", 5200.0),
        ("halifax", 4200.0),
    ])
});

/// Which freight rate was applied, for caller disclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "city")]
pub enum ResolvedCity {
    /// The city matched the rate table (normalized name reported)
    Known(String),
    /// No match; the fallback rate was applied
    Fallback,
}

impl ResolvedCity {
    /// True when the fallback rate was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedCity::Fallback)
    }
}

/// Results from the freight calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreightQuote {
    /// Total freight cost (CAD)
    pub cost: f64,

    /// Which rate was applied (known city or fallback)
    pub resolved_city: ResolvedCity,

    /// Per-truck rate that was applied (CAD)
    pub rate_per_truck: f64,

    /// Total shipped mass in kilograms
    pub total_mass_kg: f64,

    /// Pallet count (fractional; billing is pro-rated)
    pub pallet_count: f64,
}

/// Resolve a free-form city to a per-truck rate.
///
/// Normalization is trim + lowercase. Returns the applied rate and the
/// disclosure tag.
pub fn resolve_rate(delivery_city: &str) -> (f64, ResolvedCity) {
    let normalized = delivery_city.trim().to_lowercase();
    match FREIGHT_RATES.get(normalized.as_str()) {
        Some(&rate) => (rate, ResolvedCity::Known(normalized)),
        None => (FALLBACK_RATE_PER_TRUCK, ResolvedCity::Fallback),
    }
}

/// Calculate the total freight cost for a shipment.
///
/// Mass = loading (lb/yd3) x volume (yd3) x lb->kg; pallets = mass / pallet
/// capacity; cost = pallets x (per-truck rate / pallets per truck).
pub fn calculate(delivery_city: &str, adjusted_lbs_per_yd3: f64, volume_yd3: f64) -> FreightQuote {
    let (rate_per_truck, resolved_city) = resolve_rate(delivery_city);

    let total_mass_kg = adjusted_lbs_per_yd3 * volume_yd3 * LBS_TO_KG;
    let pallet_count = total_mass_kg / KG_PER_PALLET;
    let cost_per_pallet = rate_per_truck / PALLETS_PER_TRUCK;
    let cost = pallet_count * cost_per_pallet;

    FreightQuote {
        cost,
        resolved_city,
        rate_per_truck,
        total_mass_kg,
        pallet_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let (exact, _) = resolve_rate("Toronto");
        let (lower, _) = resolve_rate("toronto");
        let (padded, _) = resolve_rate("  Toronto ");
        assert_eq!(exact, 3200.0);
        assert_eq!(lower, exact);
        assert_eq!(padded, exact);
    }

    #[test]
    fn test_unknown_city_falls_back() {
        let (rate, resolved) = resolve_rate("unknown town");
        assert_eq!(rate, FALLBACK_RATE_PER_TRUCK);
        assert!(resolved.is_fallback());
    }

    #[test]
    fn test_empty_city_falls_back() {
        let (rate, resolved) = resolve_rate("");
        assert_eq!(rate, FALLBACK_RATE_PER_TRUCK);
        assert_eq!(resolved, ResolvedCity::Fallback);
    }

    #[test]
    fn test_freight_cost_math() {
        // 66 lb/yd3 x 925.926 yd3 x 0.453592 = 27719.5 kg
        // pallets = 27.7195, cost/pallet = 3200 / 24 = 133.33
        let quote = calculate("Toronto", 66.0, 925.926);
        assert!((quote.total_mass_kg - 27_719.5).abs() < 0.1);
        assert!((quote.pallet_count - 27.7195).abs() < 0.001);
        assert!((quote.cost - 27.7195 * (3200.0 / 24.0)).abs() < 0.5);
        assert_eq!(quote.resolved_city, ResolvedCity::Known("toronto".to_string()));
    }

    #[test]
    fn test_zero_volume_is_free() {
        let quote = calculate("Calgary", 66.0, 0.0);
        assert_eq!(quote.cost, 0.0);
        assert_eq!(quote.pallet_count, 0.0);
    }

    #[test]
    fn test_serialization() {
        let quote = calculate("unknown town", 66.0, 100.0);
        let json = serde_json::to_string(&quote).unwrap();
        let roundtrip: FreightQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote.cost, roundtrip.cost);
        assert!(roundtrip.resolved_city.is_fallback());
    }
}

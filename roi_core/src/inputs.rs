//! # Input Record and Domain Enums
//!
//! The immutable input record for one estimation call, plus the enumerated
//! commercial parameters. The presentation shell owns all mutable state and
//! rebuilds a fresh [`CalculationInput`] on every field change; the engine
//! never caches anything between calls.
//!
//! The shell is responsible for clamping `dosage_percent` into [50, 125]
//! and restricting markup to the three supported profiles before calling
//! the engine. The engine re-validates only the strict-positivity
//! constraints it divides by (area, thickness, facility life, fx rate).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Facility industry, which drives the resurfacing interval and the
/// default downtime cost per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    /// General manufacturing
    Manufacturing,
    /// Automotive plants (heavy traffic, shorter resurfacing cycles)
    Automotive,
    /// Data centers (light traffic, long cycles)
    Datacenter,
    /// Hydroelectric / water infrastructure
    Hydro,
    /// Any other facility; downtime cost comes from
    /// [`CalculationInput::custom_downtime_cost_per_hour`]
    Custom,
}

/// Markup profile applied to raw material cost, by business relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupProfile {
    /// Distributor pricing: 15%
    Distributor,
    /// Ready-mix producer pricing: 25%
    ReadyMix,
    /// End-user direct pricing: 40%
    EndUser,
}

impl MarkupProfile {
    /// The markup percentage for this profile.
    pub fn percent(self) -> f64 {
        match self {
            MarkupProfile::Distributor => 15.0,
            MarkupProfile::ReadyMix => 25.0,
            MarkupProfile::EndUser => 40.0,
        }
    }

    /// Multiplier form: `1 + percent/100`.
    pub fn multiplier(self) -> f64 {
        1.0 + self.percent() / 100.0
    }
}

/// Display currency. All internal amounts are CAD; USD is a display-time
/// conversion using the static fx rate supplied on the input record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// Canadian dollars (base currency, no conversion)
    Cad,
    /// US dollars (CAD value x fx rate)
    Usd,
}

/// Pricing strategy for the material cost module.
///
/// The two models come from different commercial contexts and are both
/// supported; the caller selects one explicitly rather than the engine
/// guessing which is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    /// Flat per-square-foot price stepped by slab thickness
    Tiered,
    /// Price built up from dosage-adjusted material loading per cubic yard
    Volumetric,
}

/// Input parameters for one ROI estimation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_sqft": 50000.0,
///   "thickness_in": 6.0,
///   "facility_life_years": 20.0,
///   "industry": "manufacturing",
///   "custom_downtime_cost_per_hour": 0.0,
///   "downtime_hours_per_event": 3.0,
///   "markup": "ready_mix",
///   "dosage_percent": 100.0,
///   "delivery_city": "Toronto",
///   "currency": "cad",
///   "fx_rate_cad_to_usd": 0.73,
///   "pricing_strategy": "tiered"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Slab area in square feet
    pub area_sqft: f64,

    /// Slab thickness in inches
    pub thickness_in: f64,

    /// Expected operational life of the facility in years
    pub facility_life_years: f64,

    /// Facility industry
    pub industry: Industry,

    /// Downtime cost per hour, used only when `industry` is `Custom`
    pub custom_downtime_cost_per_hour: f64,

    /// Facility downtime per resurfacing event, in hours
    pub downtime_hours_per_event: f64,

    /// Markup profile (distributor / ready-mix / end-user)
    pub markup: MarkupProfile,

    /// Dosage as a percentage of the standard reference loading.
    /// The shell clamps this into [50, 125] before calling.
    pub dosage_percent: f64,

    /// Free-form delivery city; may be empty. Matched against the freight
    /// table case- and whitespace-insensitively.
    pub delivery_city: String,

    /// Display currency for the formatted metrics
    pub currency: Currency,

    /// Static CAD -> USD conversion factor (supplied, never fetched)
    pub fx_rate_cad_to_usd: f64,

    /// Which material pricing model to apply
    pub pricing_strategy: PricingStrategy,
}

impl CalculationInput {
    /// Validate the strict-positivity constraints the formulas divide by.
    pub fn validate(&self) -> CalcResult<()> {
        if self.area_sqft <= 0.0 {
            return Err(CalcError::invalid_input(
                "area_sqft",
                self.area_sqft.to_string(),
                "Area must be positive",
            ));
        }
        if self.thickness_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "thickness_in",
                self.thickness_in.to_string(),
                "Thickness must be positive",
            ));
        }
        if self.facility_life_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "facility_life_years",
                self.facility_life_years.to_string(),
                "Facility life must be positive",
            ));
        }
        if self.fx_rate_cad_to_usd <= 0.0 {
            return Err(CalcError::invalid_input(
                "fx_rate_cad_to_usd",
                self.fx_rate_cad_to_usd.to_string(),
                "FX rate must be positive",
            ));
        }
        if self.custom_downtime_cost_per_hour < 0.0 {
            return Err(CalcError::invalid_input(
                "custom_downtime_cost_per_hour",
                self.custom_downtime_cost_per_hour.to_string(),
                "Downtime cost cannot be negative",
            ));
        }
        if self.downtime_hours_per_event < 0.0 {
            return Err(CalcError::invalid_input(
                "downtime_hours_per_event",
                self.downtime_hours_per_event.to_string(),
                "Downtime hours cannot be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> CalculationInput {
        CalculationInput {
            area_sqft: 50_000.0,
            thickness_in: 6.0,
            facility_life_years: 20.0,
            industry: Industry::Manufacturing,
            custom_downtime_cost_per_hour: 0.0,
            downtime_hours_per_event: 3.0,
            markup: MarkupProfile::ReadyMix,
            dosage_percent: 100.0,
            delivery_city: "Toronto".to_string(),
            currency: Currency::Cad,
            fx_rate_cad_to_usd: 0.73,
            pricing_strategy: PricingStrategy::Tiered,
        }
    }

    #[test]
    fn test_markup_percentages() {
        assert_eq!(MarkupProfile::Distributor.percent(), 15.0);
        assert_eq!(MarkupProfile::ReadyMix.percent(), 25.0);
        assert_eq!(MarkupProfile::EndUser.percent(), 40.0);
        assert!((MarkupProfile::ReadyMix.multiplier() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_good_input() {
        assert!(test_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nonpositive_divisors() {
        for field in ["area", "thickness", "life", "fx"] {
            let mut input = test_input();
            match field {
                "area" => input.area_sqft = 0.0,
                "thickness" => input.thickness_in = -1.0,
                "life" => input.facility_life_years = 0.0,
                _ => input.fx_rate_cad_to_usd = 0.0,
            }
            let err = input.validate().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.area_sqft, roundtrip.area_sqft);
        assert_eq!(input.industry, roundtrip.industry);
        assert_eq!(input.pricing_strategy, roundtrip.pricing_strategy);
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        assert_eq!(serde_json::to_value(Currency::Cad).unwrap(), "cad");
        assert_eq!(serde_json::to_value(Currency::Usd).unwrap(), "usd");
        assert_eq!(
            serde_json::to_value(Industry::Manufacturing).unwrap(),
            "manufacturing"
        );
        assert_eq!(
            serde_json::to_value(MarkupProfile::ReadyMix).unwrap(),
            "ready_mix"
        );
        assert_eq!(
            serde_json::to_value(PricingStrategy::Volumetric).unwrap(),
            "volumetric"
        );
    }
}

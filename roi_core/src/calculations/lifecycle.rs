//! # Lifecycle Module
//!
//! Projects conventional resurfacing over the facility life: derives the
//! resurfacing interval from (industry, thickness), floors the event count
//! over the operational life, and aggregates the avoided resurfacing and
//! downtime costs.

use serde::{Deserialize, Serialize};

use crate::inputs::Industry;

/// Conventional resurfacing cost per square foot per cycle (CAD).
pub const RESURFACING_COST_PER_SQFT: f64 = 6.0;

/// Thickness at which the longer resurfacing cycle applies, in inches.
const THICK_SLAB_IN: f64 = 8.0;

/// Results from the lifecycle projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleProjection {
    /// Expected years between conventional resurfacings
    pub interval_years: f64,

    /// Number of resurfacing events over the facility life
    pub event_count: u32,

    /// Conventional resurfacing cost for one cycle (area x rate)
    pub resurfacing_cost_per_cycle: f64,

    /// Total avoided resurfacing cost over the facility life
    pub total_resurfacing_cost: f64,

    /// Total avoided downtime cost over the facility life
    pub total_downtime_cost: f64,
}

/// Resurfacing interval in years for an industry and slab thickness.
///
/// Thicker slabs (>= 8 in) wear longer in the industries where traffic
/// load dominates; datacenter floors cycle on a fixed 8-year schedule.
/// Custom/other industries use a documented 5-year default.
pub fn resurfacing_interval_years(industry: Industry, thickness_in: f64) -> f64 {
    let thick = thickness_in >= THICK_SLAB_IN;
    match industry {
        Industry::Manufacturing => {
            if thick {
                7.0
            } else {
                5.0
            }
        }
        Industry::Automotive => {
            if thick {
                5.0
            } else {
                4.0
            }
        }
        Industry::Datacenter => 8.0,
        Industry::Hydro => {
            if thick {
                10.0
            } else {
                5.0
            }
        }
        Industry::Custom => 5.0,
    }
}

/// Number of resurfacing events over the facility life.
///
/// Defensive floor: non-positive interval or life yields 0 events, never a
/// negative or infinite count.
pub fn resurfacing_events(facility_life_years: f64, interval_years: f64) -> u32 {
    if interval_years <= 0.0 || facility_life_years <= 0.0 {
        return 0;
    }
    (facility_life_years / interval_years).floor() as u32
}

/// Project resurfacing events and aggregate avoided costs.
///
/// `downtime_loss_per_event` comes from the ROI module's rate resolution;
/// both aggregates scale linearly with the event count.
pub fn calculate(
    industry: Industry,
    thickness_in: f64,
    facility_life_years: f64,
    area_sqft: f64,
    downtime_loss_per_event: f64,
) -> LifecycleProjection {
    let interval_years = resurfacing_interval_years(industry, thickness_in);
    let event_count = resurfacing_events(facility_life_years, interval_years);
    let resurfacing_cost_per_cycle = area_sqft * RESURFACING_COST_PER_SQFT;
    let events = f64::from(event_count);

    LifecycleProjection {
        interval_years,
        event_count,
        resurfacing_cost_per_cycle,
        total_resurfacing_cost: events * resurfacing_cost_per_cycle,
        total_downtime_cost: events * downtime_loss_per_event,
    }
}

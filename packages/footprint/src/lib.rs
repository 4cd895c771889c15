#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic household carbon footprint estimator.
//!
//! [`estimate`] maps a [`FootprintInput`] to an annual CO2-equivalent total,
//! a per-category breakdown, and a [`SeverityTier`]. Input is validated
//! eagerly: a single bad field fails the whole call and no partial result
//! is produced.
//!
//! The estimator is pure. It performs no I/O, holds no state, and can be
//! called from any number of threads at once.
//!
//! [`SeverityTier`]: rrr_footprint_models::SeverityTier

pub mod factors;
pub mod severity;
mod validate;

use std::collections::BTreeMap;

use rrr_footprint_models::{EmissionCategory, FootprintInput, FootprintResult, ValidationError};

pub use validate::{Profile, validate};

/// Kilograms per metric ton.
const KG_PER_TON: f64 = 1000.0;

/// Estimates the annual footprint of a household profile.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the first field that is negative,
/// non-finite, or holds an unrecognized enum value.
pub fn estimate(input: &FootprintInput) -> Result<FootprintResult, ValidationError> {
    validate(input).map(|profile| compute(&profile))
}

/// Computes the footprint of an already validated profile.
#[must_use]
pub fn compute(profile: &Profile) -> FootprintResult {
    let breakdown: BTreeMap<EmissionCategory, f64> = EmissionCategory::all()
        .iter()
        .map(|category| (*category, category_kg_per_year(profile, *category)))
        .collect();

    let total_kg: f64 = breakdown.values().sum();
    let total_tons_per_year = total_kg / KG_PER_TON;

    FootprintResult {
        total_tons_per_year,
        breakdown_kg_per_year: breakdown,
        severity_tier: severity::classify(total_tons_per_year),
    }
}

/// Annual contribution of a single category in kg CO2e.
#[must_use]
pub fn category_kg_per_year(profile: &Profile, category: EmissionCategory) -> f64 {
    use factors::{DAYS_PER_YEAR, MONTHS_PER_YEAR};

    match category {
        EmissionCategory::Electricity => {
            let grid = factors::grid_factor(profile.grid_mix);
            let hours = &profile.appliance_hours;
            let appliance_kwh_per_day = hours.ac.mul_add(
                factors::AC_KW,
                hours
                    .fridge
                    .mul_add(factors::FRIDGE_KW, hours.washer * factors::WASHER_KW),
            );
            profile.electricity_kwh_per_month * grid * MONTHS_PER_YEAR
                + appliance_kwh_per_day * DAYS_PER_YEAR * grid
        }
        EmissionCategory::Lpg => {
            profile.lpg_kg_per_month * factors::LPG_KG_PER_KG * MONTHS_PER_YEAR
        }
        EmissionCategory::Fuel => {
            profile.vehicle_fuel_liters_per_month
                * factors::fuel_factor(profile.vehicle_fuel)
                * MONTHS_PER_YEAR
        }
        EmissionCategory::PublicTransport => {
            profile.bus_km_per_month.mul_add(
                factors::BUS_KG_PER_KM,
                profile.train_km_per_month * factors::TRAIN_KG_PER_KM,
            ) * MONTHS_PER_YEAR
        }
        EmissionCategory::Waste => {
            profile.waste_kg_per_month * factors::WASTE_KG_PER_KG * MONTHS_PER_YEAR
        }
        EmissionCategory::Diet => factors::diet_kg_per_year(profile.diet),
        EmissionCategory::Flights => {
            f64::from(profile.short_flights_per_year) * factors::SHORT_FLIGHT_KG
                + f64::from(profile.medium_flights_per_year) * factors::MEDIUM_FLIGHT_KG
                + f64::from(profile.long_flights_per_year) * factors::LONG_FLIGHT_KG
        }
    }
}

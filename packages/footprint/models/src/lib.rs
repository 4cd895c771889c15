#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Household footprint input, result, and validation types.
//!
//! These types form the wire contract of the footprint estimator. Enum
//! fields on [`FootprintInput`] arrive as plain strings so that an
//! unrecognized value can be reported as a [`ValidationError`] naming the
//! field, rather than being rejected by the deserializer with no context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, VariantNames};
use thiserror::Error;

/// Largest accepted value of any numeric quantity field.
///
/// Keeps every category and the total finite: even with every quantity at
/// this bound the annual sum stays far below `f64::MAX`.
pub const MAX_QUANTITY: f64 = 1e15;

/// Wire names of every validated input field.
///
/// These are the names reported in [`ValidationError::field`].
pub mod fields {
    pub const ELECTRICITY_KWH_PER_MONTH: &str = "electricityKwhPerMonth";
    pub const GRID_MIX_TYPE: &str = "gridMixType";
    pub const LPG_KG_PER_MONTH: &str = "lpgKgPerMonth";
    pub const VEHICLE_FUEL_TYPE: &str = "vehicleFuelType";
    pub const VEHICLE_FUEL_LITERS_PER_MONTH: &str = "vehicleFuelLitersPerMonth";
    pub const BUS_KM_PER_MONTH: &str = "busKmPerMonth";
    pub const TRAIN_KM_PER_MONTH: &str = "trainKmPerMonth";
    pub const WASTE_KG_PER_MONTH: &str = "wasteKgPerMonth";
    pub const DIET_TYPE: &str = "dietType";
    pub const SHORT_FLIGHTS_PER_YEAR: &str = "shortFlightsPerYear";
    pub const MEDIUM_FLIGHTS_PER_YEAR: &str = "mediumFlightsPerYear";
    pub const LONG_FLIGHTS_PER_YEAR: &str = "longFlightsPerYear";
    pub const APPLIANCE_AC_HOURS: &str = "applianceHoursPerDay.ac";
    pub const APPLIANCE_FRIDGE_HOURS: &str = "applianceHoursPerDay.fridge";
    pub const APPLIANCE_WASHER_HOURS: &str = "applianceHoursPerDay.washer";
}

/// Generation mix backing the household's electricity supply.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum GridMix {
    /// Coal-dominated grid
    Coal,
    /// Typical blended national grid
    Mixed,
    /// Mostly solar, wind, or hydro supply
    Renewable,
}

impl GridMix {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Coal, Self::Mixed, Self::Renewable]
    }
}

/// Fuel burned by the household's vehicle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum VehicleFuel {
    Petrol,
    Diesel,
}

impl VehicleFuel {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Petrol, Self::Diesel]
    }
}

/// Broad dietary pattern, mapped to a fixed annual emissions constant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DietType {
    /// Plant-based diet
    Vegetarian,
    /// Occasional meat and dairy
    Mixed,
    /// Meat with most meals
    Heavy,
}

impl DietType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Vegetarian, Self::Mixed, Self::Heavy]
    }
}

/// A line in the footprint breakdown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EmissionCategory {
    /// Grid electricity, including household appliance draw
    Electricity,
    /// Cooking gas
    Lpg,
    /// Private vehicle fuel
    Fuel,
    /// Bus and train travel
    PublicTransport,
    /// Household waste sent to landfill
    Waste,
    Diet,
    Flights,
}

impl EmissionCategory {
    /// Returns all variants of this enum, in breakdown order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Electricity,
            Self::Lpg,
            Self::Fuel,
            Self::PublicTransport,
            Self::Waste,
            Self::Diet,
            Self::Flights,
        ]
    }

    /// Returns a human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Lpg => "LPG",
            Self::Fuel => "Vehicle fuel",
            Self::PublicTransport => "Public transport",
            Self::Waste => "Waste",
            Self::Diet => "Diet",
            Self::Flights => "Flights",
        }
    }
}

/// Qualitative bucket assigned from the annual total.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Daily appliance usage in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplianceHours {
    /// Air conditioner hours per day.
    pub ac: f64,
    /// Refrigerator hours per day.
    pub fridge: f64,
    /// Washing machine hours per day.
    pub washer: f64,
}

/// A household/lifestyle profile submitted for estimation.
///
/// Missing numeric fields deserialize as zero. Missing enum fields
/// deserialize as an empty string and are rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootprintInput {
    /// Grid electricity consumed per month (kWh).
    pub electricity_kwh_per_month: f64,
    /// One of `coal`, `mixed`, `renewable`.
    pub grid_mix_type: String,
    /// Cooking gas consumed per month (kg).
    #[serde(alias = "lpgUsage")]
    pub lpg_kg_per_month: f64,
    /// One of `petrol`, `diesel`.
    pub vehicle_fuel_type: String,
    /// Vehicle fuel burned per month (liters).
    pub vehicle_fuel_liters_per_month: f64,
    /// Distance travelled by bus per month (km).
    pub bus_km_per_month: f64,
    /// Distance travelled by train per month (km).
    pub train_km_per_month: f64,
    /// Household waste produced per month (kg).
    pub waste_kg_per_month: f64,
    /// One of `vegetarian`, `mixed`, `heavy`.
    pub diet_type: String,
    /// Flights under ~3 hours per year.
    pub short_flights_per_year: i64,
    /// Flights of ~3-6 hours per year.
    pub medium_flights_per_year: i64,
    /// Flights over ~6 hours per year.
    pub long_flights_per_year: i64,
    /// Daily appliance usage.
    pub appliance_hours_per_day: ApplianceHours,
}

impl FootprintInput {
    /// Creates an all-zero profile with the given enum selections.
    #[must_use]
    pub fn new(grid_mix: GridMix, vehicle_fuel: VehicleFuel, diet: DietType) -> Self {
        Self {
            grid_mix_type: grid_mix.to_string(),
            vehicle_fuel_type: vehicle_fuel.to_string(),
            diet_type: diet.to_string(),
            ..Self::default()
        }
    }
}

/// Estimated annual footprint for a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    /// Total CO2-equivalent emissions (metric tons per year).
    pub total_tons_per_year: f64,
    /// Contribution of each category (kg CO2e per year).
    pub breakdown_kg_per_year: BTreeMap<EmissionCategory, f64>,
    /// Severity bucket derived from the total.
    pub severity_tier: SeverityTier,
}

impl FootprintResult {
    /// Returns the contribution of `category` in kg per year, or zero if
    /// the category is absent from the breakdown.
    #[must_use]
    pub fn category_kg(&self, category: EmissionCategory) -> f64 {
        self.breakdown_kg_per_year
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the breakdown sorted by contribution, largest first.
    ///
    /// Ties keep breakdown order.
    #[must_use]
    pub fn ranked_categories(&self) -> Vec<(EmissionCategory, f64)> {
        let mut ranked: Vec<(EmissionCategory, f64)> = self
            .breakdown_kg_per_year
            .iter()
            .map(|(category, kg)| (*category, *kg))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Error returned when a [`FootprintInput`] field violates its constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A numeric field was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: f64,
    },

    /// A numeric field was below zero.
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: f64,
    },

    /// A numeric field exceeded [`MAX_QUANTITY`].
    #[error("{field} must be at most {}, got {value}", MAX_QUANTITY)]
    TooLarge {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: f64,
    },

    /// A count field was below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeCount {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: i64,
    },

    /// A count field exceeded the largest accepted count.
    #[error("{field} must be at most {}, got {value}", u32::MAX)]
    CountTooLarge {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: i64,
    },

    /// An enum field held a value outside its allowed set.
    #[error("{field} has unrecognized value {value:?}, expected one of: {}", .expected.join(", "))]
    UnknownVariant {
        /// Wire name of the offending field.
        field: &'static str,
        /// The value received.
        value: String,
        /// The accepted values.
        expected: &'static [&'static str],
    },
}

impl ValidationError {
    /// Returns the wire name of the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonFinite { field, .. }
            | Self::Negative { field, .. }
            | Self::TooLarge { field, .. }
            | Self::NegativeCount { field, .. }
            | Self::CountTooLarge { field, .. }
            | Self::UnknownVariant { field, .. } => field,
        }
    }

    /// Returns the received value rendered as a string.
    #[must_use]
    pub fn received(&self) -> String {
        match self {
            Self::NonFinite { value, .. }
            | Self::Negative { value, .. }
            | Self::TooLarge { value, .. } => value.to_string(),
            Self::NegativeCount { value, .. } | Self::CountTooLarge { value, .. } => {
                value.to_string()
            }
            Self::UnknownVariant { value, .. } => value.clone(),
        }
    }
}

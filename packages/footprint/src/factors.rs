//! Emission factor tables.
//!
//! All factors are kg CO2-equivalent per unit of activity. Monthly inputs
//! are annualized with [`MONTHS_PER_YEAR`], daily appliance hours with
//! [`DAYS_PER_YEAR`].

use rrr_footprint_models::{DietType, GridMix, VehicleFuel};

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Appliance power draw (kW), so hours × draw gives kWh.
pub const AC_KW: f64 = 1.5;
pub const FRIDGE_KW: f64 = 0.15;
pub const WASHER_KW: f64 = 0.5;

/// kg CO2e per kg of LPG burned.
pub const LPG_KG_PER_KG: f64 = 1.51;

/// kg CO2e per passenger-km.
pub const BUS_KG_PER_KM: f64 = 0.089;
pub const TRAIN_KG_PER_KM: f64 = 0.041;

/// kg CO2e per kg of landfilled waste.
pub const WASTE_KG_PER_KG: f64 = 0.57;

/// kg CO2e per one-way flight, by haul.
pub const SHORT_FLIGHT_KG: f64 = 150.0;
pub const MEDIUM_FLIGHT_KG: f64 = 550.0;
pub const LONG_FLIGHT_KG: f64 = 1600.0;

/// Emissions intensity of delivered electricity (kg CO2e per kWh).
#[must_use]
pub const fn grid_factor(mix: GridMix) -> f64 {
    match mix {
        GridMix::Coal => 0.82,
        GridMix::Mixed => 0.60,
        GridMix::Renewable => 0.05,
    }
}

/// Tailpipe emissions per liter of fuel (kg CO2e per liter).
#[must_use]
pub const fn fuel_factor(fuel: VehicleFuel) -> f64 {
    match fuel {
        VehicleFuel::Petrol => 2.31,
        VehicleFuel::Diesel => 2.68,
    }
}

/// Fixed annual dietary emissions (kg CO2e per year).
#[must_use]
pub const fn diet_kg_per_year(diet: DietType) -> f64 {
    match diet {
        DietType::Vegetarian => 1700.0,
        DietType::Mixed => 2500.0,
        DietType::Heavy => 3300.0,
    }
}

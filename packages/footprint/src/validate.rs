//! Eager validation of a [`FootprintInput`] into a typed [`Profile`].
//!
//! Fields are checked in wire order and the first violation is returned.

use std::str::FromStr;

use rrr_footprint_models::{
    ApplianceHours, DietType, FootprintInput, GridMix, MAX_QUANTITY, ValidationError,
    VehicleFuel, fields,
};
use strum::VariantNames;

/// A validated household profile.
///
/// Only constructible through [`validate`], so every quantity is finite,
/// non-negative and at most [`MAX_QUANTITY`], and every choice is a known
/// variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub(crate) electricity_kwh_per_month: f64,
    pub(crate) grid_mix: GridMix,
    pub(crate) lpg_kg_per_month: f64,
    pub(crate) vehicle_fuel: VehicleFuel,
    pub(crate) vehicle_fuel_liters_per_month: f64,
    pub(crate) bus_km_per_month: f64,
    pub(crate) train_km_per_month: f64,
    pub(crate) waste_kg_per_month: f64,
    pub(crate) diet: DietType,
    pub(crate) short_flights_per_year: u32,
    pub(crate) medium_flights_per_year: u32,
    pub(crate) long_flights_per_year: u32,
    pub(crate) appliance_hours: ApplianceHours,
}

impl Profile {
    #[must_use]
    pub const fn grid_mix(&self) -> GridMix {
        self.grid_mix
    }

    #[must_use]
    pub const fn vehicle_fuel(&self) -> VehicleFuel {
        self.vehicle_fuel
    }

    #[must_use]
    pub const fn diet(&self) -> DietType {
        self.diet
    }
}

/// Validates every field of `input`.
///
/// # Errors
///
/// Returns [`ValidationError`] for the first field that is negative,
/// non-finite, out of range, or holds an unrecognized enum value.
pub fn validate(input: &FootprintInput) -> Result<Profile, ValidationError> {
    let electricity_kwh_per_month = quantity(
        fields::ELECTRICITY_KWH_PER_MONTH,
        input.electricity_kwh_per_month,
    )?;
    let grid_mix = choice::<GridMix>(fields::GRID_MIX_TYPE, &input.grid_mix_type)?;
    let lpg_kg_per_month = quantity(fields::LPG_KG_PER_MONTH, input.lpg_kg_per_month)?;
    let vehicle_fuel = choice::<VehicleFuel>(fields::VEHICLE_FUEL_TYPE, &input.vehicle_fuel_type)?;
    let vehicle_fuel_liters_per_month = quantity(
        fields::VEHICLE_FUEL_LITERS_PER_MONTH,
        input.vehicle_fuel_liters_per_month,
    )?;
    let bus_km_per_month = quantity(fields::BUS_KM_PER_MONTH, input.bus_km_per_month)?;
    let train_km_per_month = quantity(fields::TRAIN_KM_PER_MONTH, input.train_km_per_month)?;
    let waste_kg_per_month = quantity(fields::WASTE_KG_PER_MONTH, input.waste_kg_per_month)?;
    let diet = choice::<DietType>(fields::DIET_TYPE, &input.diet_type)?;
    let short_flights_per_year =
        count(fields::SHORT_FLIGHTS_PER_YEAR, input.short_flights_per_year)?;
    let medium_flights_per_year =
        count(fields::MEDIUM_FLIGHTS_PER_YEAR, input.medium_flights_per_year)?;
    let long_flights_per_year = count(fields::LONG_FLIGHTS_PER_YEAR, input.long_flights_per_year)?;

    let hours = &input.appliance_hours_per_day;
    let appliance_hours = ApplianceHours {
        ac: quantity(fields::APPLIANCE_AC_HOURS, hours.ac)?,
        fridge: quantity(fields::APPLIANCE_FRIDGE_HOURS, hours.fridge)?,
        washer: quantity(fields::APPLIANCE_WASHER_HOURS, hours.washer)?,
    };

    Ok(Profile {
        electricity_kwh_per_month,
        grid_mix,
        lpg_kg_per_month,
        vehicle_fuel,
        vehicle_fuel_liters_per_month,
        bus_km_per_month,
        train_km_per_month,
        waste_kg_per_month,
        diet,
        short_flights_per_year,
        medium_flights_per_year,
        long_flights_per_year,
        appliance_hours,
    })
}

fn quantity(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value > MAX_QUANTITY {
        return Err(ValidationError::TooLarge { field, value });
    }
    Ok(value)
}

fn count(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::CountTooLarge { field, value })
}

fn choice<T>(field: &'static str, raw: &str) -> Result<T, ValidationError>
where
    T: FromStr + VariantNames,
{
    raw.parse::<T>()
        .map_err(|_| ValidationError::UnknownVariant {
            field,
            value: raw.to_string(),
            expected: T::VARIANTS,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FootprintInput {
        FootprintInput::new(GridMix::Mixed, VehicleFuel::Petrol, DietType::Mixed)
    }

    #[test]
    fn accepts_all_zero_profile() {
        let profile = validate(&valid_input()).unwrap();
        assert_eq!(profile.grid_mix(), GridMix::Mixed);
        assert_eq!(profile.vehicle_fuel(), VehicleFuel::Petrol);
        assert_eq!(profile.diet(), DietType::Mixed);
    }

    #[test]
    fn rejects_negative_quantity() {
        let mut input = valid_input();
        input.waste_kg_per_month = -0.5;
        let err = validate(&input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "wasteKgPerMonth",
                value: -0.5
            }
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let mut input = valid_input();
        input.bus_km_per_month = f64::NAN;
        assert_eq!(validate(&input).unwrap_err().field(), "busKmPerMonth");

        let mut input = valid_input();
        input.train_km_per_month = f64::INFINITY;
        let err = validate(&input).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFinite {
                field: "trainKmPerMonth",
                ..
            }
        ));
    }

    #[test]
    fn rejects_quantities_above_bound() {
        let mut input = valid_input();
        input.electricity_kwh_per_month = 1e308;
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::TooLarge {
                field: "electricityKwhPerMonth",
                value: 1e308
            }
        );

        let mut input = valid_input();
        input.appliance_hours_per_day.ac = f64::MAX;
        assert_eq!(
            validate(&input).unwrap_err().field(),
            "applianceHoursPerDay.ac"
        );

        let mut input = valid_input();
        input.lpg_kg_per_month = MAX_QUANTITY;
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn rejects_negative_flight_count() {
        let mut input = valid_input();
        input.long_flights_per_year = -2;
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::NegativeCount {
                field: "longFlightsPerYear",
                value: -2
            }
        );
    }

    #[test]
    fn appliance_errors_use_dotted_path() {
        let mut input = valid_input();
        input.appliance_hours_per_day.washer = -1.0;
        assert_eq!(
            validate(&input).unwrap_err().field(),
            "applianceHoursPerDay.washer"
        );
    }

    #[test]
    fn rejects_unknown_and_missing_choices() {
        let mut input = valid_input();
        input.grid_mix_type = "nuclear".to_string();
        let err = validate(&input).unwrap_err();
        assert_eq!(err.field(), "gridMixType");
        assert_eq!(err.received(), "nuclear");

        let mut input = valid_input();
        input.vehicle_fuel_type = String::new();
        assert_eq!(validate(&input).unwrap_err().field(), "vehicleFuelType");
    }

    #[test]
    fn reports_first_invalid_field_in_wire_order() {
        let mut input = valid_input();
        input.electricity_kwh_per_month = -1.0;
        input.diet_type = "unknown".to_string();
        assert_eq!(
            validate(&input).unwrap_err().field(),
            "electricityKwhPerMonth"
        );
    }
}

//! Interactive mode for the `rrr` tool.
//!
//! Provides a menu-driven interface using `dialoguer`, including a
//! guided questionnaire that builds a footprint profile field by field.

use dialoguer::{Confirm, Input, Select};
use rrr_footprint_models::{
    ApplianceHours, DietType, FootprintInput, GridMix, VehicleFuel, fields,
};

use crate::report;

/// Top-level actions available in the interactive menu.
enum Action {
    Estimate,
    Factors,
    Challenges,
    Server,
}

impl Action {
    const ALL: &[Self] = &[Self::Estimate, Self::Factors, Self::Challenges, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Estimate => "Estimate my footprint",
            Self::Factors => "Show emission factors",
            Self::Challenges => "Today's challenges",
            Self::Server => "Start server",
        }
    }
}

/// Runs the interactive menu.
///
/// # Errors
///
/// Returns an error if a prompt fails, the entered profile is invalid, or
/// the selected operation fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Reduce-Reuse-Recycle");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Estimate => {
            let input = prompt_profile()?;
            let suggest = Confirm::new()
                .with_prompt("Include reduction suggestions?")
                .default(true)
                .interact()?;
            crate::print_estimate(&input, false, suggest).await?;
        }
        Action::Factors => print!("{}", report::format_factors()),
        Action::Challenges => {
            let count: usize = Input::new()
                .with_prompt("How many challenges?")
                .default(rrr_server::DEFAULT_CHALLENGES_PER_DAY)
                .interact_text()?;
            crate::print_challenges(None, count);
        }
        Action::Server => {
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(rrr_server::interactive::run())
            })
            .await??;
        }
    }

    Ok(())
}

/// Asks for every profile field in wire order.
fn prompt_profile() -> Result<FootprintInput, dialoguer::Error> {
    println!();
    println!("Monthly figures are per household. Press enter to accept 0.");
    println!();

    let electricity_kwh_per_month = quantity(fields::ELECTRICITY_KWH_PER_MONTH)?;
    let grid_mix_type = choice(fields::GRID_MIX_TYPE, GridMix::all())?;
    let lpg_kg_per_month = quantity(fields::LPG_KG_PER_MONTH)?;
    let vehicle_fuel_type = choice(fields::VEHICLE_FUEL_TYPE, VehicleFuel::all())?;
    let vehicle_fuel_liters_per_month = quantity(fields::VEHICLE_FUEL_LITERS_PER_MONTH)?;
    let bus_km_per_month = quantity(fields::BUS_KM_PER_MONTH)?;
    let train_km_per_month = quantity(fields::TRAIN_KM_PER_MONTH)?;
    let waste_kg_per_month = quantity(fields::WASTE_KG_PER_MONTH)?;
    let diet_type = choice(fields::DIET_TYPE, DietType::all())?;
    let short_flights_per_year = count(fields::SHORT_FLIGHTS_PER_YEAR)?;
    let medium_flights_per_year = count(fields::MEDIUM_FLIGHTS_PER_YEAR)?;
    let long_flights_per_year = count(fields::LONG_FLIGHTS_PER_YEAR)?;
    let appliance_hours_per_day = ApplianceHours {
        ac: quantity(fields::APPLIANCE_AC_HOURS)?,
        fridge: quantity(fields::APPLIANCE_FRIDGE_HOURS)?,
        washer: quantity(fields::APPLIANCE_WASHER_HOURS)?,
    };

    Ok(FootprintInput {
        electricity_kwh_per_month,
        grid_mix_type,
        lpg_kg_per_month,
        vehicle_fuel_type,
        vehicle_fuel_liters_per_month,
        bus_km_per_month,
        train_km_per_month,
        waste_kg_per_month,
        diet_type,
        short_flights_per_year,
        medium_flights_per_year,
        long_flights_per_year,
        appliance_hours_per_day,
    })
}

fn quantity(field: &str) -> Result<f64, dialoguer::Error> {
    Input::new()
        .with_prompt(field)
        .default(0.0)
        .interact_text()
}

fn count(field: &str) -> Result<i64, dialoguer::Error> {
    let value: u32 = Input::new().with_prompt(field).default(0).interact_text()?;
    Ok(i64::from(value))
}

fn choice<T: ToString>(field: &str, options: &[T]) -> Result<String, dialoguer::Error> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt(field)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(labels[idx].clone())
}

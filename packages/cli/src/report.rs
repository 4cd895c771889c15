//! Plain-text rendering of estimates, factor tables, and challenges.

use std::fmt::Write as _;

use chrono::NaiveDate;
use rrr_challenge::Challenge;
use rrr_footprint::{factors, severity};
use rrr_footprint_models::{DietType, FootprintResult, GridMix, SeverityTier, VehicleFuel};

/// Breakdown table, largest category first, followed by the total.
#[must_use]
pub fn format_estimate(result: &FootprintResult) -> String {
    let total_kg = result.total_tons_per_year * 1000.0;
    let mut out = String::new();

    let _ = writeln!(out, "{:<18} {:>12} {:>7}", "CATEGORY", "KG CO2E/YR", "SHARE");
    let _ = writeln!(out, "{}", "-".repeat(39));
    for (category, kg) in result.ranked_categories() {
        let share = if total_kg > 0.0 {
            kg / total_kg * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "{:<18} {kg:>12.1} {share:>6.1}%", category.label());
    }
    let _ = writeln!(out, "{}", "-".repeat(39));
    let _ = writeln!(
        out,
        "Total: {:.2} t CO2e/year ({})",
        result.total_tons_per_year, result.severity_tier
    );

    out
}

/// Every emission factor and severity threshold.
#[must_use]
pub fn format_factors() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Electricity (kg CO2e per kWh)");
    for mix in GridMix::all() {
        let _ = writeln!(out, "  {:<12} {}", mix.to_string(), factors::grid_factor(*mix));
    }

    let _ = writeln!(out, "Appliance draw (kW)");
    let _ = writeln!(out, "  {:<12} {}", "ac", factors::AC_KW);
    let _ = writeln!(out, "  {:<12} {}", "fridge", factors::FRIDGE_KW);
    let _ = writeln!(out, "  {:<12} {}", "washer", factors::WASHER_KW);

    let _ = writeln!(out, "Vehicle fuel (kg CO2e per liter)");
    for fuel in VehicleFuel::all() {
        let _ = writeln!(out, "  {:<12} {}", fuel.to_string(), factors::fuel_factor(*fuel));
    }

    let _ = writeln!(out, "Diet (kg CO2e per year)");
    for diet in DietType::all() {
        let _ = writeln!(
            out,
            "  {:<12} {}",
            diet.to_string(),
            factors::diet_kg_per_year(*diet)
        );
    }

    let _ = writeln!(out, "Other");
    let _ = writeln!(out, "  {:<12} {} per kg", "lpg", factors::LPG_KG_PER_KG);
    let _ = writeln!(out, "  {:<12} {} per km", "bus", factors::BUS_KG_PER_KM);
    let _ = writeln!(out, "  {:<12} {} per km", "train", factors::TRAIN_KG_PER_KM);
    let _ = writeln!(out, "  {:<12} {} per kg", "waste", factors::WASTE_KG_PER_KG);

    let _ = writeln!(out, "Flights (kg CO2e each)");
    let _ = writeln!(out, "  {:<12} {}", "short", factors::SHORT_FLIGHT_KG);
    let _ = writeln!(out, "  {:<12} {}", "medium", factors::MEDIUM_FLIGHT_KG);
    let _ = writeln!(out, "  {:<12} {}", "long", factors::LONG_FLIGHT_KG);

    let _ = writeln!(out, "Severity (t CO2e per year, lower bound)");
    for tier in [
        SeverityTier::Low,
        SeverityTier::Moderate,
        SeverityTier::High,
        SeverityTier::VeryHigh,
    ] {
        let _ = writeln!(
            out,
            "  {:<12} {}",
            tier.to_string(),
            severity::lower_bound_tons(tier)
        );
    }

    out
}

/// Numbered list of the challenges picked for `date`.
#[must_use]
pub fn format_challenges(date: NaiveDate, challenges: &[&Challenge]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Challenges for {date}");

    if challenges.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }

    for (i, challenge) in challenges.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} [{}, {} pts]",
            i + 1,
            challenge.title,
            challenge.category,
            challenge.points
        );
        let _ = writeln!(out, "   {}", challenge.description);
    }

    out
}

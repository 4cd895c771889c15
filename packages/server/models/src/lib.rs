#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the footprint server.
//!
//! These types are serialized to JSON for the REST API. They wrap the
//! estimator and challenge types so the API contract can evolve
//! independently.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rrr_challenge::{Badge, Challenge};
use rrr_footprint_models::{
    DietType, FootprintInput, FootprintResult, GridMix, ValidationError, VehicleFuel,
};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Generic error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error: String,
}

/// Body of `POST /api/footprint/estimate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEstimateRequest {
    /// The profile to estimate.
    #[serde(flatten)]
    pub input: FootprintInput,
    /// Whether to append reduction suggestions to the result.
    #[serde(default)]
    pub with_suggestions: bool,
}

/// Response of `POST /api/footprint/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEstimateResponse {
    #[serde(flatten)]
    pub result: FootprintResult,
    /// Present only when suggestions were requested and produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Validation failure returned with HTTP 422.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiValidationError {
    /// Human readable message.
    pub error: String,
    /// Wire name of the offending field.
    pub field: String,
    /// The received value.
    pub value: String,
}

impl From<&ValidationError> for ApiValidationError {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: err.to_string(),
            field: err.field().to_string(),
            value: err.received(),
        }
    }
}

/// Appliance power draw in kW.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiApplianceDraw {
    pub ac: f64,
    pub fridge: f64,
    pub washer: f64,
}

/// kg CO2e per one-way flight, by haul.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFlightFactors {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

/// Every emission factor used by the estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFactorTable {
    /// kg CO2e per kWh by grid mix.
    pub grid_kg_per_kwh: BTreeMap<GridMix, f64>,
    pub appliance_kw: ApiApplianceDraw,
    pub lpg_kg_per_kg: f64,
    /// kg CO2e per liter by fuel.
    pub fuel_kg_per_liter: BTreeMap<VehicleFuel, f64>,
    pub bus_kg_per_km: f64,
    pub train_kg_per_km: f64,
    pub waste_kg_per_kg: f64,
    /// Fixed annual kg CO2e by diet.
    pub diet_kg_per_year: BTreeMap<DietType, f64>,
    pub flight_kg: ApiFlightFactors,
    /// Lower bound (tons per year) of each severity tier above `low`.
    pub severity_thresholds_tons: BTreeMap<String, f64>,
}

/// Query parameters for `GET /api/challenges/daily`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeParams {
    /// Calendar date (`YYYY-MM-DD`). Defaults to today (UTC).
    pub date: Option<NaiveDate>,
    /// Number of challenges. Defaults to the server setting.
    pub count: Option<usize>,
}

/// Response of `GET /api/challenges/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDailyChallenges {
    pub date: NaiveDate,
    pub challenges: Vec<Challenge>,
}

/// Badge standing for a point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBadge {
    pub points: u64,
    pub badge: Badge,
    /// `None` at the top tier.
    pub next_badge: Option<Badge>,
    pub next_threshold: Option<u64>,
    pub points_to_next: Option<u64>,
}

impl ApiBadge {
    #[must_use]
    pub fn for_points(points: u64) -> Self {
        let badge = Badge::for_points(points);
        let next_badge = badge.next();
        Self {
            points,
            badge,
            next_badge,
            next_threshold: next_badge.map(Badge::threshold),
            points_to_next: Badge::points_to_next(points),
        }
    }
}

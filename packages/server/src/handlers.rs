//! HTTP handler functions for the footprint API.

use actix_web::{HttpResponse, web};
use rrr_challenge::{LeaderboardEntry, daily_challenges as pick_daily, rank_leaderboard};
use rrr_footprint::{factors, severity};
use rrr_footprint_models::{DietType, GridMix, SeverityTier, VehicleFuel};
use rrr_server_models::{
    ApiApplianceDraw, ApiBadge, ApiDailyChallenges, ApiEstimateRequest, ApiEstimateResponse,
    ApiFactorTable, ApiFlightFactors, ApiHealth, ApiValidationError, DailyChallengeParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/footprint/factors`
///
/// Returns every emission factor and severity threshold.
pub async fn factors() -> HttpResponse {
    let table = ApiFactorTable {
        grid_kg_per_kwh: GridMix::all()
            .iter()
            .map(|mix| (*mix, factors::grid_factor(*mix)))
            .collect(),
        appliance_kw: ApiApplianceDraw {
            ac: factors::AC_KW,
            fridge: factors::FRIDGE_KW,
            washer: factors::WASHER_KW,
        },
        lpg_kg_per_kg: factors::LPG_KG_PER_KG,
        fuel_kg_per_liter: VehicleFuel::all()
            .iter()
            .map(|fuel| (*fuel, factors::fuel_factor(*fuel)))
            .collect(),
        bus_kg_per_km: factors::BUS_KG_PER_KM,
        train_kg_per_km: factors::TRAIN_KG_PER_KM,
        waste_kg_per_kg: factors::WASTE_KG_PER_KG,
        diet_kg_per_year: DietType::all()
            .iter()
            .map(|diet| (*diet, factors::diet_kg_per_year(*diet)))
            .collect(),
        flight_kg: ApiFlightFactors {
            short: factors::SHORT_FLIGHT_KG,
            medium: factors::MEDIUM_FLIGHT_KG,
            long: factors::LONG_FLIGHT_KG,
        },
        severity_thresholds_tons: [
            SeverityTier::Moderate,
            SeverityTier::High,
            SeverityTier::VeryHigh,
        ]
        .into_iter()
        .map(|tier| (tier.to_string(), severity::lower_bound_tons(tier)))
        .collect(),
    };

    HttpResponse::Ok().json(table)
}

/// `POST /api/footprint/estimate`
///
/// Estimates the annual footprint of the posted profile. Invalid profiles
/// are rejected with 422 naming the offending field. Suggestions are only
/// attached when requested, and a failing generator drops them instead of
/// failing the request.
pub async fn estimate(
    state: web::Data<AppState>,
    body: web::Json<ApiEstimateRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    let result = match rrr_footprint::estimate(&request.input) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("Rejected footprint input: {e}");
            return HttpResponse::UnprocessableEntity().json(ApiValidationError::from(&e));
        }
    };

    let suggestions = if request.with_suggestions {
        match state.generator.generate(&result).await {
            Ok(suggestions) => Some(suggestions),
            Err(e) => {
                log::warn!(
                    "Suggestion generator '{}' failed: {e}",
                    state.generator.name()
                );
                None
            }
        }
    } else {
        None
    };

    HttpResponse::Ok().json(ApiEstimateResponse {
        result,
        suggestions,
    })
}

/// `GET /api/challenges/daily`
///
/// Returns the challenges for `date` (today in UTC when omitted).
pub async fn daily_challenges(
    state: web::Data<AppState>,
    params: web::Query<DailyChallengeParams>,
) -> HttpResponse {
    let date = params
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let count = params.count.unwrap_or(state.challenges_per_day);

    let challenges = pick_daily(&state.catalog, date, count)
        .into_iter()
        .cloned()
        .collect();

    HttpResponse::Ok().json(ApiDailyChallenges { date, challenges })
}

/// `GET /api/badges/{points}`
pub async fn badge(points: web::Path<u64>) -> HttpResponse {
    HttpResponse::Ok().json(ApiBadge::for_points(points.into_inner()))
}

/// `POST /api/leaderboard`
///
/// Ranks the posted point totals. Nothing is stored.
pub async fn leaderboard(body: web::Json<Vec<LeaderboardEntry>>) -> HttpResponse {
    HttpResponse::Ok().json(rank_leaderboard(body.into_inner()))
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the reduce-reuse-recycle application.
//!
//! Serves footprint estimates, the emission factor tables, daily eco
//! challenges, and badge standings as JSON under `/api`. Suggestions for
//! estimates come from the generator selected by `AI_PROVIDER` (see
//! [`rrr_ai::config`]).

mod handlers;
pub mod interactive;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, error, middleware, web};
use rrr_ai::SuggestionGenerator;
use rrr_challenge::Catalog;
use rrr_server_models::ApiError;

/// Number of daily challenges served when the request does not say.
pub const DEFAULT_CHALLENGES_PER_DAY: usize = 3;

/// Shared application state.
pub struct AppState {
    /// Generator used for `withSuggestions` estimate requests.
    pub generator: Arc<dyn SuggestionGenerator>,
    /// Challenge catalog the daily picks are drawn from.
    pub catalog: Arc<Catalog>,
    /// Default number of daily challenges.
    pub challenges_per_day: usize,
}

/// Listener and defaults read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub challenges_per_day: usize,
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT`, and `RRR_CHALLENGES_PER_DAY`, falling
    /// back to defaults for unset or unparseable values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let challenges_per_day: usize = lookup("RRR_CHALLENGES_PER_DAY")
            .and_then(|c| c.parse().ok())
            .unwrap_or(DEFAULT_CHALLENGES_PER_DAY);

        Self {
            bind_addr,
            port,
            challenges_per_day,
        }
    }
}

/// The `/api` scope with every route and the JSON error handlers.
#[must_use]
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(handlers::health))
        .route("/footprint/factors", web::get().to(handlers::factors))
        .route("/footprint/estimate", web::post().to(handlers::estimate))
        .route("/challenges/daily", web::get().to(handlers::daily_challenges))
        .route("/badges/{points}", web::get().to(handlers::badge))
        .route("/leaderboard", web::post().to(handlers::leaderboard))
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ApiError {
        error: format!("Invalid JSON body: {err}"),
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ApiError {
        error: format!("Invalid query string: {err}"),
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Starts the API server with the configuration read from the
/// environment.
///
/// # Errors
///
/// See [`run_server_with`].
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    run_server_with(ServerConfig::from_env()).await
}

/// Starts the API server.
///
/// Selects the suggestion generator, loads the embedded challenge
/// catalog, and starts the Actix-Web HTTP server. The caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`) and for initialising the logger.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the suggestion provider is
/// misconfigured, or if the HTTP server fails to bind or encounters a
/// runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server_with(config: ServerConfig) -> std::io::Result<()> {
    log::info!("Selecting suggestion generator...");
    let generator = rrr_ai::create_generator_from_env().map_err(std::io::Error::other)?;
    log::info!("Suggestions provided by '{}'", generator.name());

    let catalog = rrr_challenge::default_catalog();
    log::info!(
        "Loaded {} challenges, serving {} per day",
        catalog.len(),
        config.challenges_per_day
    );

    let state = web::Data::new(AppState {
        generator: Arc::from(generator),
        catalog: Arc::new(catalog),
        challenges_per_day: config.challenges_per_day,
    });

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(api_scope())
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rrr_ai::{AiError, RuleBasedSuggestions};
    use rrr_footprint_models::FootprintResult;
    use serde_json::{Value, json};

    use super::*;

    struct FailingGenerator;

    #[async_trait::async_trait]
    impl SuggestionGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _result: &FootprintResult) -> Result<Vec<String>, AiError> {
            Err(AiError::Provider {
                message: "unavailable".to_string(),
            })
        }
    }

    fn state(generator: Arc<dyn SuggestionGenerator>) -> web::Data<AppState> {
        web::Data::new(AppState {
            generator,
            catalog: Arc::new(rrr_challenge::default_catalog()),
            challenges_per_day: DEFAULT_CHALLENGES_PER_DAY,
        })
    }

    fn rules() -> Arc<dyn SuggestionGenerator> {
        Arc::new(RuleBasedSuggestions::default())
    }

    fn household() -> Value {
        json!({
            "electricityKwhPerMonth": 300,
            "gridMixType": "mixed",
            "lpgKgPerMonth": 15,
            "vehicleFuelType": "petrol",
            "vehicleFuelLitersPerMonth": 50,
            "busKmPerMonth": 100,
            "trainKmPerMonth": 200,
            "wasteKgPerMonth": 30,
            "dietType": "mixed",
            "shortFlightsPerYear": 2,
            "mediumFlightsPerYear": 1,
            "longFlightsPerYear": 0,
            "applianceHoursPerDay": { "ac": 0, "fridge": 24, "washer": 1 }
        })
    }

    #[test]
    fn config_defaults_and_overrides() {
        let defaults = ServerConfig::from_lookup(|_| None);
        assert_eq!(defaults.bind_addr, "127.0.0.1");
        assert_eq!(defaults.port, 8080);
        assert_eq!(defaults.challenges_per_day, DEFAULT_CHALLENGES_PER_DAY);

        let vars: BTreeMap<&str, &str> = [
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "not-a-port"),
            ("RRR_CHALLENGES_PER_DAY", "5"),
        ]
        .into_iter()
        .collect();
        let config = ServerConfig::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.challenges_per_day, 5);
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn estimate_returns_breakdown() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(household())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["severityTier"], "low");
        let total = body["totalTonsPerYear"].as_f64().unwrap();
        assert!((total - 8.4761).abs() < 1e-3);
        assert_eq!(body["breakdownKgPerYear"].as_object().unwrap().len(), 7);
        assert!(body.get("suggestions").is_none());
    }

    #[actix_web::test]
    async fn estimate_with_suggestions() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let mut input = household();
        input["withSuggestions"] = json!(true);
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(input)
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let suggestions = body["suggestions"].as_array().unwrap();
        assert!(!suggestions.is_empty());
        assert!(suggestions[0].as_str().unwrap().contains("low tier"));
    }

    #[actix_web::test]
    async fn failing_generator_still_returns_estimate() {
        let app = actix_test::init_service(
            App::new()
                .app_data(state(Arc::new(FailingGenerator)))
                .service(api_scope()),
        )
        .await;
        let mut input = household();
        input["withSuggestions"] = json!(true);
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(input)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["severityTier"], "low");
        assert!(body.get("suggestions").is_none());
    }

    #[actix_web::test]
    async fn invalid_input_is_unprocessable() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;

        let mut input = household();
        input["electricityKwhPerMonth"] = json!(-1);
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(input)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["field"], "electricityKwhPerMonth");
        assert_eq!(body["value"], "-1");

        let mut input = household();
        input["dietType"] = json!("unknown");
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(input)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["field"], "dietType");
        assert_eq!(body["value"], "unknown");
    }

    #[actix_web::test]
    async fn overflowing_quantity_is_unprocessable() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;

        let mut input = household();
        input["electricityKwhPerMonth"] = json!(1e308);
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .set_json(input)
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["field"], "electricityKwhPerMonth");
    }

    #[actix_web::test]
    async fn malformed_json_is_bad_request() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/footprint/estimate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"electricityKwhPerMonth\": ")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn factors_list_every_table() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/api/footprint/factors")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["gridKgPerKwh"]["coal"], 0.82);
        assert_eq!(body["fuelKgPerLiter"]["diesel"], 2.68);
        assert_eq!(body["dietKgPerYear"]["heavy"], 3300.0);
        assert_eq!(body["flightKg"]["long"], 1600.0);
        assert_eq!(body["severityThresholdsTons"]["veryHigh"], 200.0);
    }

    #[actix_web::test]
    async fn daily_challenges_are_stable_for_a_date() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/challenges/daily?date=2026-04-22")
            .to_request();
        let first: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(first["date"], "2026-04-22");
        assert_eq!(
            first["challenges"].as_array().unwrap().len(),
            DEFAULT_CHALLENGES_PER_DAY
        );

        let req = actix_test::TestRequest::get()
            .uri("/api/challenges/daily?date=2026-04-22")
            .to_request();
        let second: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(first, second);

        let req = actix_test::TestRequest::get()
            .uri("/api/challenges/daily?date=2026-04-22&count=0")
            .to_request();
        let none: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert!(none["challenges"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn bad_date_is_bad_request() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::get()
            .uri("/api/challenges/daily?date=22-04-2026")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn badge_for_points() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/api/badges/260").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["badge"], "sapling");
        assert_eq!(body["nextBadge"], "evergreen");
        assert_eq!(body["pointsToNext"], 240);
    }

    #[actix_web::test]
    async fn leaderboard_is_ranked() {
        let app = actix_test::init_service(
            App::new().app_data(state(rules())).service(api_scope()),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/leaderboard")
            .set_json(json!([
                { "name": "bo", "points": 120 },
                { "name": "al", "points": 300 },
                { "name": "cy", "points": 120 }
            ]))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        let ranked = body.as_array().unwrap();
        assert_eq!(ranked[0]["name"], "al");
        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[1]["name"], "bo");
        assert_eq!(ranked[1]["rank"], 2);
        assert_eq!(ranked[2]["name"], "cy");
        assert_eq!(ranked[2]["rank"], 2);
    }
}

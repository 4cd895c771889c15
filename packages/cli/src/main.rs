#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the reduce-reuse-recycle toolchain.
//!
//! Estimates household footprints from profile files, lists the emission
//! factors, shows the daily eco challenges, and starts the API server.
//! Without a subcommand it falls back to an interactive menu.

mod interactive;
mod profile;
mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rrr_footprint_models::{FootprintInput, FootprintResult};
use rrr_server_models::{ApiBadge, ApiEstimateResponse};

#[derive(Parser)]
#[command(name = "rrr", about = "Household footprint estimates and daily eco challenges")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the annual footprint of a household profile
    Estimate {
        /// Profile file (`.toml` or `.json`)
        #[arg(long)]
        profile: PathBuf,
        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Append reduction suggestions (provider selected by `AI_PROVIDER`)
        #[arg(long)]
        suggest: bool,
    },
    /// List every emission factor and severity threshold
    Factors,
    /// Show the eco challenges for a day
    Challenges {
        /// Calendar date as `YYYY-MM-DD`. Defaults to today (UTC).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Number of challenges to show
        #[arg(long, default_value_t = rrr_server::DEFAULT_CHALLENGES_PER_DAY)]
        count: usize,
    },
    /// Show the badge earned for a point total
    Badge {
        points: u64,
    },
    /// Start the API server
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run().await;
    };

    match command {
        Commands::Estimate {
            profile,
            json,
            suggest,
        } => {
            let input = profile::load_profile(&profile)?;
            print_estimate(&input, json, suggest).await?;
        }
        Commands::Factors => print!("{}", report::format_factors()),
        Commands::Challenges { date, count } => print_challenges(date, count),
        Commands::Badge { points } => {
            let standing = ApiBadge::for_points(points);
            match (standing.next_badge, standing.points_to_next) {
                (Some(next), Some(missing)) => {
                    println!("{points} points: {} ({missing} more for {next})", standing.badge);
                }
                _ => println!("{points} points: {} (top tier)", standing.badge),
            }
        }
        Commands::Serve => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(rrr_server::run_server())
            })
            .await??;
        }
    }

    Ok(())
}

/// Estimates `input` and prints the result as a table or JSON.
///
/// # Errors
///
/// Returns an error if `input` fails validation or JSON serialization
/// fails. Suggestion failures are logged and never returned.
pub(crate) async fn print_estimate(
    input: &FootprintInput,
    json: bool,
    suggest: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = rrr_footprint::estimate(input)?;
    let suggestions = if suggest {
        suggestions_for(&result).await
    } else {
        None
    };

    if json {
        let response = ApiEstimateResponse {
            result,
            suggestions,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print!("{}", report::format_estimate(&result));
    if let Some(suggestions) = suggestions {
        println!();
        println!("Suggestions:");
        for suggestion in suggestions {
            println!("  - {suggestion}");
        }
    }

    Ok(())
}

async fn suggestions_for(result: &FootprintResult) -> Option<Vec<String>> {
    let generator = match rrr_ai::create_generator_from_env() {
        Ok(generator) => generator,
        Err(e) => {
            log::warn!("Suggestions unavailable: {e}");
            return None;
        }
    };

    match generator.generate(result).await {
        Ok(suggestions) => Some(suggestions),
        Err(e) => {
            log::warn!("Suggestion generator '{}' failed: {e}", generator.name());
            None
        }
    }
}

pub(crate) fn print_challenges(date: Option<NaiveDate>, count: usize) {
    let date = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let catalog = rrr_challenge::default_catalog();
    let picks = rrr_challenge::daily_challenges(&catalog, date, count);
    print!("{}", report::format_challenges(date, &picks));
}

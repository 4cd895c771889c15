#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Standalone entry point for the footprint API server.
//!
//! Configuration comes from `BIND_ADDR`, `PORT`, `RRR_CHALLENGES_PER_DAY`,
//! and the `AI_*` variables read by [`rrr_ai::config`].

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    rrr_server::run_server().await
}

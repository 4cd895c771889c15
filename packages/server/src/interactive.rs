//! Interactive mode for the server.
//!
//! Prompts the user for bind address, port, and daily challenge count
//! before starting the server.

use dialoguer::{Confirm, Input};

use crate::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// Defaults come from the environment (see [`ServerConfig::from_env`]).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Reduce-Reuse-Recycle Server");
    println!();

    let defaults = ServerConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or_else(|_| defaults.bind_addr.clone());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let challenges_per_day: usize = Input::new()
        .with_prompt("Daily challenges")
        .default(defaults.challenges_per_day)
        .interact_text()
        .unwrap_or(defaults.challenges_per_day);

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server_with(ServerConfig {
        bind_addr,
        port,
        challenges_per_day,
    })
    .await
}

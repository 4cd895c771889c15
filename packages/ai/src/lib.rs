#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Footprint reduction suggestions.
//!
//! A [`SuggestionGenerator`] turns a [`FootprintResult`] into a short list
//! of human-readable tips. Two generators exist: a deterministic
//! rule-based one that works offline, and one backed by an LLM provider
//! (Anthropic Claude, `OpenAI`, or any `OpenAI`-compatible local server
//! such as Ollama or vLLM via `AI_BASE_URL`).
//!
//! Suggestions only decorate an estimate. Callers should treat a failing
//! generator as "no suggestions", never as a failed estimate.

pub mod config;
pub mod providers;
pub mod suggestions;

use rrr_footprint_models::FootprintResult;
use thiserror::Error;

pub use config::{ProviderConfig, ProviderKind, create_generator, create_generator_from_env};
pub use suggestions::{LlmSuggestions, RuleBasedSuggestions};

/// Errors that can occur during AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// Produces reduction suggestions for an estimated footprint.
#[async_trait::async_trait]
pub trait SuggestionGenerator: Send + Sync {
    /// Short name used in logs (e.g., `"rules"`, `"anthropic"`).
    fn name(&self) -> &str;

    /// Generates suggestions for `result`, most relevant first.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the underlying provider fails or returns
    /// nothing usable.
    async fn generate(&self, result: &FootprintResult) -> Result<Vec<String>, AiError>;
}

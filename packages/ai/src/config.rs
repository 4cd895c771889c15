//! Suggestion generator selection from environment variables.
//!
//! If `AI_PROVIDER` is explicitly set, uses that provider. Otherwise
//! auto-detects from available credentials:
//!
//! 1. `ANTHROPIC_API_KEY` set -> Anthropic Claude
//! 2. `OPENAI_API_KEY` or `AI_BASE_URL` set -> `OpenAI` (or compatible)
//! 3. nothing set -> offline rule-based suggestions
//!
//! `AI_MODEL` overrides the default model for either LLM provider and
//! `AI_MAX_SUGGESTIONS` caps how many suggestions any generator returns.

use crate::providers::anthropic::AnthropicProvider;
use crate::providers::openai::OpenAiProvider;
use crate::suggestions::{DEFAULT_MAX_SUGGESTIONS, LlmSuggestions, RuleBasedSuggestions};
use crate::{AiError, SuggestionGenerator};

const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Which generator backs suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
    Rules,
}

/// Resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_suggestions: usize,
}

impl ProviderConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Config`] if the requested provider is unknown or
    /// missing its credentials.
    pub fn from_env() -> Result<Self, AiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// an environment variable if set.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Config`] if the requested provider is unknown or
    /// missing its credentials.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AiError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model = get("AI_MODEL");
        let base_url = get("AI_BASE_URL");
        let max_suggestions = get("AI_MAX_SUGGESTIONS").map_or(DEFAULT_MAX_SUGGESTIONS, |raw| {
            raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid AI_MAX_SUGGESTIONS '{raw}', using {DEFAULT_MAX_SUGGESTIONS}"
                );
                DEFAULT_MAX_SUGGESTIONS
            })
        });
        let provider = get("AI_PROVIDER").unwrap_or_else(|| detect_provider(&get));

        match provider.to_lowercase().as_str() {
            "anthropic" | "claude" => {
                let api_key = get("ANTHROPIC_API_KEY").ok_or_else(|| AiError::Config {
                    message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
                })?;
                Ok(Self {
                    kind: ProviderKind::Anthropic,
                    api_key: Some(api_key),
                    model,
                    base_url: None,
                    max_suggestions,
                })
            }
            "openai" | "gpt" => {
                let api_key = get("OPENAI_API_KEY");
                if api_key.is_none() && base_url.is_none() {
                    return Err(AiError::Config {
                        message: "OPENAI_API_KEY environment variable not set".to_string(),
                    });
                }
                Ok(Self {
                    kind: ProviderKind::OpenAi,
                    api_key,
                    model,
                    base_url,
                    max_suggestions,
                })
            }
            "rules" | "none" | "offline" => Ok(Self {
                kind: ProviderKind::Rules,
                api_key: None,
                model: None,
                base_url: None,
                max_suggestions,
            }),
            other => Err(AiError::Config {
                message: format!(
                    "Unknown AI provider: {other}. Use 'anthropic', 'openai', or 'rules'."
                ),
            }),
        }
    }
}

/// Auto-detects which provider to use based on available credentials.
fn detect_provider(get: &impl Fn(&str) -> Option<String>) -> String {
    if get("ANTHROPIC_API_KEY").is_some() {
        log::info!("Auto-detected AI provider: Anthropic (ANTHROPIC_API_KEY found)");
        return "anthropic".to_string();
    }

    if get("OPENAI_API_KEY").is_some() {
        log::info!("Auto-detected AI provider: OpenAI (OPENAI_API_KEY found)");
        return "openai".to_string();
    }

    if get("AI_BASE_URL").is_some() {
        log::info!("Auto-detected AI provider: OpenAI-compatible server (AI_BASE_URL found)");
        return "openai".to_string();
    }

    log::info!("No AI credentials detected, using rule-based suggestions");
    "rules".to_string()
}

/// Builds the generator described by `config`.
#[must_use]
pub fn create_generator(config: ProviderConfig) -> Box<dyn SuggestionGenerator> {
    match config.kind {
        ProviderKind::Anthropic => {
            let model = config
                .model
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string());
            let api_key = config.api_key.unwrap_or_default();
            Box::new(
                LlmSuggestions::new(Box::new(AnthropicProvider::new(api_key, model)))
                    .with_max_suggestions(config.max_suggestions),
            )
        }
        ProviderKind::OpenAi => {
            let model = config
                .model
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
            Box::new(
                LlmSuggestions::new(Box::new(OpenAiProvider::new(
                    config.api_key,
                    model,
                    config.base_url,
                )))
                .with_max_suggestions(config.max_suggestions),
            )
        }
        ProviderKind::Rules => Box::new(RuleBasedSuggestions::new(config.max_suggestions)),
    }
}

/// Builds the generator selected by the process environment.
///
/// # Errors
///
/// Returns [`AiError::Config`] if the requested provider is unknown or
/// missing its credentials.
pub fn create_generator_from_env() -> Result<Box<dyn SuggestionGenerator>, AiError> {
    let config = ProviderConfig::from_env()?;
    log::debug!("Suggestion provider: {:?}", config.kind);
    Ok(create_generator(config))
}

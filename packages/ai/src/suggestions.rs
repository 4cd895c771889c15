//! Suggestion generators.

use rrr_footprint_models::{EmissionCategory, FootprintResult, SeverityTier};

use crate::providers::{LlmProvider, Message};
use crate::{AiError, SuggestionGenerator};

/// Default number of suggestions returned.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

/// Token budget for an LLM reply.
const MAX_TOKENS: u32 = 512;

/// Deterministic, offline suggestions.
///
/// Emits a headline for the severity tier followed by one tip for each of
/// the largest contributing categories.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedSuggestions {
    max_suggestions: usize,
}

impl Default for RuleBasedSuggestions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUGGESTIONS)
    }
}

impl RuleBasedSuggestions {
    #[must_use]
    pub const fn new(max_suggestions: usize) -> Self {
        Self { max_suggestions }
    }

    /// Synchronous form of [`SuggestionGenerator::generate`]; never fails.
    #[must_use]
    pub fn suggest(&self, result: &FootprintResult) -> Vec<String> {
        if self.max_suggestions == 0 {
            return Vec::new();
        }

        let mut suggestions = vec![headline(result.severity_tier, result.total_tons_per_year)];
        suggestions.extend(
            result
                .ranked_categories()
                .into_iter()
                .filter(|(_, kg)| *kg > 0.0)
                .take(self.max_suggestions - 1)
                .map(|(category, kg)| tip(category, kg)),
        );
        suggestions
    }
}

#[async_trait::async_trait]
impl SuggestionGenerator for RuleBasedSuggestions {
    fn name(&self) -> &str {
        "rules"
    }

    async fn generate(&self, result: &FootprintResult) -> Result<Vec<String>, AiError> {
        Ok(self.suggest(result))
    }
}

fn headline(tier: SeverityTier, tons: f64) -> String {
    match tier {
        SeverityTier::Low => format!(
            "Your footprint of {tons:.1} t CO2e/year is in the low tier. Keep reusing and sharing!"
        ),
        SeverityTier::Moderate => format!(
            "Your footprint of {tons:.1} t CO2e/year is moderate. A few habit changes will bring it down."
        ),
        SeverityTier::High => format!(
            "Your footprint of {tons:.1} t CO2e/year is high. Focus on the biggest categories below first."
        ),
        SeverityTier::VeryHigh => format!(
            "Your footprint of {tons:.1} t CO2e/year is very high. Travel and energy choices are the quickest wins."
        ),
    }
}

fn tip(category: EmissionCategory, kg: f64) -> String {
    match category {
        EmissionCategory::Electricity => format!(
            "Electricity and appliances add {kg:.0} kg a year. Switch to a renewable tariff and cut AC hours where you can."
        ),
        EmissionCategory::Lpg => format!(
            "Cooking gas adds {kg:.0} kg a year. Cook with lids on or try an induction hob."
        ),
        EmissionCategory::Fuel => format!(
            "Vehicle fuel adds {kg:.0} kg a year. Carpool, combine errands, or cycle short trips."
        ),
        EmissionCategory::PublicTransport => format!(
            "Bus and train travel adds {kg:.0} kg a year. That is already a low-carbon choice, keep it up."
        ),
        EmissionCategory::Waste => format!(
            "Waste adds {kg:.0} kg a year. Compost scraps and list reusable items on the marketplace."
        ),
        EmissionCategory::Diet => format!(
            "Your diet adds {kg:.0} kg a year. Try a few plant-based days each week."
        ),
        EmissionCategory::Flights => format!(
            "Flights add {kg:.0} kg a year. Swap a short-haul flight for rail when possible."
        ),
    }
}

/// Suggestions written by an LLM provider.
pub struct LlmSuggestions {
    provider: Box<dyn LlmProvider>,
    max_suggestions: usize,
}

impl LlmSuggestions {
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    #[must_use]
    pub const fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    fn system_prompt(&self) -> String {
        format!(
            "You are a sustainability coach for a community reduce-reuse-recycle app. \
             The user sends an estimated annual carbon footprint as JSON: the total in \
             metric tons, a breakdown in kg CO2e per category, and a severity tier. \
             Reply with at most {max} short, concrete suggestions that target the largest \
             categories. Put one suggestion per line with no numbering, headings, or other text.",
            max = self.max_suggestions,
        )
    }
}

#[async_trait::async_trait]
impl SuggestionGenerator for LlmSuggestions {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn generate(&self, result: &FootprintResult) -> Result<Vec<String>, AiError> {
        let payload = serde_json::to_string(result)?;
        let reply = self
            .provider
            .complete(&self.system_prompt(), &[Message::user(payload)], MAX_TOKENS)
            .await?;

        let suggestions = parse_suggestions(&reply, self.max_suggestions);
        log::debug!(
            "{} returned {} suggestion(s)",
            self.provider.name(),
            suggestions.len()
        );

        if suggestions.is_empty() {
            return Err(AiError::Provider {
                message: "Provider returned no suggestions".to_string(),
            });
        }

        Ok(suggestions)
    }
}

/// Splits an LLM reply into suggestions, dropping bullets and numbering.
#[must_use]
pub fn parse_suggestions(reply: &str, max: usize) -> Vec<String> {
    reply.lines().filter_map(clean_line).take(max).collect()
}

fn clean_line(line: &str) -> Option<String> {
    let mut text = line.trim().trim_start_matches(['-', '*', '•']).trim_start();

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if digits > 0
        && let Some(rest) = text[digits..].strip_prefix(['.', ')'])
    {
        text = rest.trim_start();
    }

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use super::*;

    fn result(tier: SeverityTier, breakdown: &[(EmissionCategory, f64)]) -> FootprintResult {
        let breakdown_kg_per_year: BTreeMap<EmissionCategory, f64> =
            breakdown.iter().copied().collect();
        let total_kg: f64 = breakdown_kg_per_year.values().sum();
        FootprintResult {
            total_tons_per_year: total_kg / 1000.0,
            breakdown_kg_per_year,
            severity_tier: tier,
        }
    }

    struct CannedProvider {
        reply: String,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            _system_prompt: &str,
            messages: &[Message],
            _max_tokens: u32,
        ) -> Result<String, AiError> {
            self.prompts
                .lock()
                .unwrap()
                .extend(messages.iter().map(|m| m.content.clone()));
            Ok(self.reply.clone())
        }
    }

    #[test]
    fn rules_target_largest_categories() {
        let r = result(
            SeverityTier::Low,
            &[
                (EmissionCategory::Electricity, 3057.9),
                (EmissionCategory::Diet, 2500.0),
                (EmissionCategory::Flights, 850.0),
                (EmissionCategory::Waste, 205.2),
                (EmissionCategory::Lpg, 0.0),
            ],
        );

        let suggestions = RuleBasedSuggestions::default().suggest(&r);
        assert_eq!(suggestions.len(), DEFAULT_MAX_SUGGESTIONS);
        assert!(suggestions[0].contains("low tier"));
        assert!(suggestions[1].starts_with("Electricity"));
        assert!(suggestions[1].contains("3058 kg"));
        assert!(suggestions[2].starts_with("Your diet"));
        assert!(suggestions[3].starts_with("Flights"));
    }

    #[test]
    fn rules_skip_zero_categories() {
        let r = result(
            SeverityTier::Low,
            &[
                (EmissionCategory::Diet, 1700.0),
                (EmissionCategory::Fuel, 0.0),
                (EmissionCategory::Flights, 0.0),
            ],
        );
        let suggestions = RuleBasedSuggestions::new(10).suggest(&r);
        assert_eq!(suggestions.len(), 2);
        assert!(RuleBasedSuggestions::new(0).suggest(&r).is_empty());
    }

    #[test]
    fn parses_bullets_and_numbering() {
        let reply = "1. Switch to renewable power\n\n- Cycle to work\n* Compost scraps\n2) Fly less\n3D-print spare parts\n";
        assert_eq!(
            parse_suggestions(reply, 10),
            vec![
                "Switch to renewable power",
                "Cycle to work",
                "Compost scraps",
                "Fly less",
                "3D-print spare parts",
            ]
        );
        assert_eq!(parse_suggestions(reply, 2).len(), 2);
    }

    #[tokio::test]
    async fn llm_suggestions_send_result_json() {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let provider = CannedProvider {
            reply: "- Take the train\n- Eat more vegetables\n".to_string(),
            prompts: Arc::clone(&prompts),
        };
        let r = result(SeverityTier::Moderate, &[(EmissionCategory::Flights, 52_000.0)]);

        let generator = LlmSuggestions::new(Box::new(provider));
        let suggestions = generator.generate(&r).await.unwrap();
        assert_eq!(suggestions, vec!["Take the train", "Eat more vegetables"]);
        assert_eq!(generator.name(), "canned");

        let sent = prompts.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("\"severityTier\":\"moderate\""));
        assert!(sent[0].contains("\"flights\":52000.0"));
    }

    #[tokio::test]
    async fn empty_llm_reply_is_an_error() {
        let provider = CannedProvider {
            reply: "\n  \n".to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        };
        let r = result(SeverityTier::Low, &[(EmissionCategory::Diet, 1700.0)]);

        let err = LlmSuggestions::new(Box::new(provider))
            .generate(&r)
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Provider { .. }));
    }
}

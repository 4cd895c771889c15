#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Daily eco challenges, badge tiers, and leaderboard ranking.
//!
//! The challenge catalog is a TOML file baked into the binary at compile
//! time. [`daily_challenges`] picks the same challenges for everyone on a
//! given calendar date, so the daily set needs no shared state.

pub mod badge;
pub mod daily;
pub mod leaderboard;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use badge::Badge;
pub use daily::daily_challenges;
pub use leaderboard::{LeaderboardEntry, RankedEntry, rank_leaderboard};

/// Catalog embedded at compile time.
const CATALOG_TOML: &str = include_str!("../challenges/catalog.toml");

/// Errors that can occur while loading a challenge catalog.
#[derive(Debug, Error)]
pub enum ChallengeError {
    /// The catalog is not valid TOML or does not match the schema.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two challenges share an id.
    #[error("Duplicate challenge id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// The catalog has no challenges.
    #[error("Challenge catalog is empty")]
    Empty,
}

/// Which of the green habits a challenge exercises.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ChallengeCategory {
    Reduce,
    Reuse,
    Recycle,
    Energy,
    Transport,
    Food,
}

/// A single eco challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Stable identifier (e.g., `"meatless_day"`).
    pub id: String,
    /// Short title.
    pub title: String,
    /// What the user has to do.
    pub description: String,
    /// Habit category.
    pub category: ChallengeCategory,
    /// Points awarded on completion.
    pub points: u32,
}

/// An ordered, id-unique set of challenges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "challenge", default)]
    challenges: Vec<Challenge>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty input and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::Empty`] or [`ChallengeError::DuplicateId`].
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, ChallengeError> {
        if challenges.is_empty() {
            return Err(ChallengeError::Empty);
        }

        let mut seen = BTreeSet::new();
        for challenge in &challenges {
            if !seen.insert(challenge.id.as_str()) {
                return Err(ChallengeError::DuplicateId {
                    id: challenge.id.clone(),
                });
            }
        }

        Ok(Self { challenges })
    }

    /// All challenges in catalog order.
    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Looks up a challenge by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

/// Parses a catalog from TOML (`[[challenge]]` tables).
///
/// # Errors
///
/// Returns [`ChallengeError`] if the TOML is malformed, empty, or repeats
/// an id.
pub fn parse_catalog(toml_str: &str) -> Result<Catalog, ChallengeError> {
    let file: CatalogFile = toml::from_str(toml_str)?;
    Catalog::new(file.challenges)
}

/// Returns the built-in challenge catalog.
///
/// # Panics
///
/// Panics if the embedded catalog is malformed.
#[must_use]
pub fn default_catalog() -> Catalog {
    parse_catalog(CATALOG_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse embedded challenge catalog: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_catalog() {
        let catalog = default_catalog();
        assert!(catalog.len() >= 10);
        assert!(catalog.challenges().iter().all(|c| c.points > 0));
        let meatless = catalog.get("meatless_day").unwrap();
        assert_eq!(meatless.category, ChallengeCategory::Food);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let toml_str = r#"
            [[challenge]]
            id = "a"
            title = "A"
            description = "first"
            category = "reuse"
            points = 5

            [[challenge]]
            id = "a"
            title = "A again"
            description = "second"
            category = "reduce"
            points = 5
        "#;
        let err = parse_catalog(toml_str).unwrap_err();
        assert!(matches!(err, ChallengeError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(parse_catalog(""), Err(ChallengeError::Empty)));
    }

    #[test]
    fn rejects_unknown_category() {
        let toml_str = r#"
            [[challenge]]
            id = "a"
            title = "A"
            description = "first"
            category = "teleport"
            points = 5
        "#;
        assert!(matches!(
            parse_catalog(toml_str),
            Err(ChallengeError::Parse(_))
        ));
    }
}

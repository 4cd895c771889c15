//! Household profile files.
//!
//! A profile is a [`FootprintInput`] written as TOML (`.toml`) or JSON
//! (`.json`), using the same camelCase field names as the HTTP API.

use std::path::Path;

use rrr_footprint_models::FootprintInput;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported profile format '{extension}', expected .toml or .json")]
    UnsupportedFormat { extension: String },
}

/// Profile file syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Json,
}

impl ProfileFormat {
    /// # Errors
    ///
    /// Returns [`ProfileError::UnsupportedFormat`] for any extension other
    /// than `toml` or `json` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ProfileError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ProfileError::UnsupportedFormat { extension }),
        }
    }
}

/// Parses profile text in the given format.
///
/// # Errors
///
/// Returns a [`ProfileError`] if the text is not valid for `format`.
pub fn parse_profile(text: &str, format: ProfileFormat) -> Result<FootprintInput, ProfileError> {
    Ok(match format {
        ProfileFormat::Toml => toml::from_str(text)?,
        ProfileFormat::Json => serde_json::from_str(text)?,
    })
}

/// Reads and parses the profile at `path`.
///
/// # Errors
///
/// Returns a [`ProfileError`] if the extension is unsupported, the file
/// cannot be read, or its contents do not parse.
pub fn load_profile(path: &Path) -> Result<FootprintInput, ProfileError> {
    let format = ProfileFormat::from_path(path)?;
    log::debug!("Loading {format:?} profile from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_profile(&text, format)
}

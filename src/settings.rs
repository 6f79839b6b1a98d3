//! Default formatting parameters loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The formatting functions themselves always take explicit arguments; these
//! values fill in whatever the bindings or the CLI leave out.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::postal::Country;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)?;
    debug!("custom settings registered");
    Ok(())
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub card: CardSettings,
    pub phone: PhoneSettings,
    pub time: TimeSettings,
    pub postal: PostalSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardSettings {
    mask: String,
}

impl CardSettings {
    /// The mask character. Validation guarantees exactly one.
    pub fn mask(&self) -> char {
        self.mask.chars().next().unwrap_or(crate::card::DEFAULT_CARD_MASK)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneSettings {
    #[serde(default)]
    pub delimiter: String,
}

impl PhoneSettings {
    /// `None` selects the parenthesized US style.
    pub fn delimiter(&self) -> Option<&str> {
        Some(self.delimiter.as_str()).filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSettings {
    pub delimiter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostalSettings {
    country: String,
}

impl PostalSettings {
    pub fn country(&self) -> Country {
        Country::from_code(&self.country)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.card.mask.chars().count() != 1 {
        return Err(SettingsError::InvalidValue {
            field: "card.mask".to_string(),
            reason: "must be exactly one character".to_string(),
        });
    }
    if s.time.delimiter.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "time.delimiter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if s.postal.country != "us" && s.postal.country != "ca" {
        return Err(SettingsError::InvalidValue {
            field: "postal.country".to_string(),
            reason: format!("unsupported country {:?}, expected \"us\" or \"ca\"", s.postal.country),
        });
    }
    Ok(())
}

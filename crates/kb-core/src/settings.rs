//! Keyboard settings: document delimiters and session behavior flags.
//!
//! The shipped values live in `default_settings.toml` and are compiled in.
//! A host may swap in its own TOML through [`init_custom`], but only before
//! anything has read [`settings()`]; after that the values are frozen for the
//! life of the extension process.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static ACTIVE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings TOML. Fails once settings are in use.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if ACTIVE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Active settings: the custom TOML if one was installed, else the defaults.
pub fn settings() -> &'static Settings {
    ACTIVE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(String::as_str)
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("custom settings are validated by init_custom")
    })
}

/// The compiled-in settings TOML, e.g. for `kbtool settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML does not parse: {0}")]
    Parse(String),
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings are already in use; custom TOML must be loaded before the first session")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub document: DocumentSettings,
    pub behavior: BehaviorSettings,
}

/// Delimiters used to derive cursor-adjacency predicates from raw text.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSettings {
    sentence_delimiters: Vec<String>,
    word_delimiters: Vec<String>,
    #[serde(skip)]
    sentence_chars: Vec<char>,
    #[serde(skip)]
    word_chars: Vec<char>,
}

impl DocumentSettings {
    pub fn is_sentence_delimiter(&self, c: char) -> bool {
        self.sentence_chars.contains(&c)
    }

    /// Word delimiters include every sentence delimiter.
    pub fn is_word_delimiter(&self, c: char) -> bool {
        self.word_chars.contains(&c) || self.is_sentence_delimiter(c)
    }

    pub fn sentence_delimiters(&self) -> &[char] {
        &self.sentence_chars
    }

    pub fn word_delimiters(&self) -> &[char] {
        &self.word_chars
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BehaviorSettings {
    pub end_sentence_on_double_space: bool,
    pub double_tap_shift_locks_caps: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    if s.document.sentence_delimiters.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "document.sentence_delimiters".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    s.document.sentence_chars = parse_delimiters(
        "document.sentence_delimiters",
        &s.document.sentence_delimiters,
    )?;
    s.document.word_chars =
        parse_delimiters("document.word_delimiters", &s.document.word_delimiters)?;
    Ok(s)
}

fn parse_delimiters(field: &str, raw: &[String]) -> Result<Vec<char>, SettingsError> {
    raw.iter()
        .map(|d| {
            let mut chars = d.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(SettingsError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{d:?} must be exactly one character"),
                }),
            }
        })
        .collect()
}

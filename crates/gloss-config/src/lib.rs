use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::vocabulary::VocabularyConfig;

pub mod vocabulary;

fn default_level() -> String {
    "ALL".to_string()
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_show_highlight() -> bool {
    true
}

fn default_font_size() -> u32 {
    // percent of the surrounding text size
    70
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing settings. Only `level` and `target_language` reach the annotation core;
/// the rest are display concerns for whatever renders the spans.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// "I", "II" or "ALL"
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_show_highlight")]
    pub show_highlight: bool,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: default_level(),
            target_language: default_target_language(),
            enabled: default_enabled(),
            show_highlight: default_show_highlight(),
            font_size: default_font_size(),
            vocabulary: VocabularyConfig::default(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `GLOSS_*` environment variables
    pub fn new() -> Self {
        let mut settings = Self::default();
        settings.apply_env();
        settings
    }

    /// Read a JSON settings file, then apply environment overrides on top
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        tracing::info!("Loading settings from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.apply_env();
        Ok(settings)
    }

    fn apply_env(&mut self) {
        if let Ok(level) = env::var("GLOSS_LEVEL") {
            self.level = level;
        }

        if let Ok(lang) = env::var("GLOSS_TARGET_LANGUAGE") {
            self.target_language = lang;
        }

        if let Some(font_size) = env::var("GLOSS_FONT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.font_size = font_size;
        }

        if let Ok(paths) = env::var("GLOSS_VOCAB_PATHS") {
            self.vocabulary.paths = split_paths(&paths);
        }
    }

    /// Apply a single `field = value` change, as sent by a settings UI.
    /// Returns whether the change requires the vocabulary index to be rebuilt.
    pub fn apply_update(&mut self, field: &str, value: &str) -> Result<bool, SettingsError> {
        let invalid = || SettingsError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        };

        match field {
            "level" => {
                self.level = value.trim().to_string();
                Ok(true)
            }
            "target_language" | "lang" => {
                self.target_language = value.trim().to_string();
                Ok(true)
            }
            "enabled" => {
                self.enabled = parse_bool(value).ok_or_else(invalid)?;
                Ok(false)
            }
            "show_highlight" => {
                self.show_highlight = parse_bool(value).ok_or_else(invalid)?;
                Ok(false)
            }
            "font_size" => {
                self.font_size = value.trim().parse().map_err(|_| invalid())?;
                Ok(false)
            }
            "vocabulary.paths" => {
                self.vocabulary.paths = split_paths(value);
                Ok(true)
            }
            "vocabulary.use_embedded" => {
                self.vocabulary.use_embedded = parse_bool(value).ok_or_else(invalid)?;
                Ok(true)
            }
            other => Err(SettingsError::UnknownField(other.to_string())),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

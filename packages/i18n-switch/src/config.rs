//! Loader configuration
//!
//! Options arrive as JSON from the build tool: a per-rule query object and a
//! global options object whose `ng2I18nLoader` section (or the section named
//! by the query's `config` key) overrides the query.

use crate::i18n::{TranslationFormat, SUPPORTED_FORMAT_TAGS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Section of the global options read when the query names none
pub const DEFAULT_CONFIG_KEY: &str = "ng2I18nLoader";

/// Component property used for `[ngSwitch]` when `localeBinding` is not set
pub const DEFAULT_LOCALE_BINDING: &str = "i18nLocaleBindingProperty";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoaderOptions {
    pub enabled: Option<bool>,
    pub translation_files: Option<Vec<PathBuf>>,
    pub translation_format: Option<String>,
    pub locale_binding: Option<String>,
}

/// Why a set of options cannot drive a transform
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the loader is not enabled")]
    Disabled,

    #[error("It seems there were no \"translationFiles\" specified in the config, skipping.")]
    NoTranslationFiles,

    #[error(
        "It seems there was no (valid) \"translationFormat\" (supported: {}) specified in the config, skipping.",
        SUPPORTED_FORMAT_TAGS.join(", ")
    )]
    UnsupportedFormat { given: Option<String> },

    #[error("invalid loader options: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Options checked and ready for a transform run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub translation_files: Vec<PathBuf>,
    pub format: TranslationFormat,
    pub locale_binding: String,
}

impl LoaderOptions {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge the build tool's query with its global options.
    pub fn from_host(query: &Value, global: &Value) -> Result<Self, ConfigError> {
        let mut merged: Map<String, Value> = query.as_object().cloned().unwrap_or_default();

        let config_key = match merged.remove("config") {
            Some(Value::String(key)) if !key.is_empty() => key,
            _ => DEFAULT_CONFIG_KEY.to_string(),
        };

        if let Some(section) = global.get(&config_key).and_then(Value::as_object) {
            for (key, value) in section {
                merged.insert(key.clone(), value.clone());
            }
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// The configured binding, or `None` when the default applies
    pub fn explicit_locale_binding(&self) -> Option<&str> {
        self.locale_binding.as_deref().filter(|binding| !binding.is_empty())
    }

    pub fn locale_binding(&self) -> &str {
        self.explicit_locale_binding().unwrap_or(DEFAULT_LOCALE_BINDING)
    }

    /// Configured translation files with empty entries dropped
    pub fn translation_files(&self) -> Vec<PathBuf> {
        self.translation_files
            .iter()
            .flatten()
            .filter(|path| !path.as_os_str().is_empty())
            .cloned()
            .collect()
    }

    pub fn format(&self) -> Result<TranslationFormat, ConfigError> {
        self.translation_format
            .as_deref()
            .and_then(|tag| tag.parse().ok())
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                given: self.translation_format.clone(),
            })
    }

    pub fn resolve(&self) -> Result<ResolvedOptions, ConfigError> {
        if !self.is_enabled() {
            return Err(ConfigError::Disabled);
        }

        let translation_files = self.translation_files();
        if translation_files.is_empty() {
            return Err(ConfigError::NoTranslationFiles);
        }

        Ok(ResolvedOptions {
            translation_files,
            format: self.format()?,
            locale_binding: self.locale_binding().to_string(),
        })
    }
}

//! Serializer Module
//!
//! Translation interchange formats and the loader seam that turns a
//! translation file into a `TranslationCatalog`.

use super::translation_bundle::TranslationCatalog;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Format tags accepted in the `translationFormat` option
pub const SUPPORTED_FORMAT_TAGS: [&str; 6] = ["xliff", "xlf", "xliff2", "xlf2", "xmb", "xtb"];

/// Translation file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationFormat {
    Xliff,
    Xliff2,
    Xmb,
    Xtb,
}

impl TranslationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationFormat::Xliff => "xliff",
            TranslationFormat::Xliff2 => "xliff2",
            TranslationFormat::Xmb => "xmb",
            TranslationFormat::Xtb => "xtb",
        }
    }
}

impl fmt::Display for TranslationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported translation format \"{0}\" (supported: {})", SUPPORTED_FORMAT_TAGS.join(", "))]
pub struct UnknownFormat(pub String);

impl FromStr for TranslationFormat {
    type Err = UnknownFormat;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_lowercase().as_str() {
            "xliff" | "xlf" => Ok(TranslationFormat::Xliff),
            "xliff2" | "xlf2" => Ok(TranslationFormat::Xliff2),
            "xmb" => Ok(TranslationFormat::Xmb),
            "xtb" => Ok(TranslationFormat::Xtb),
            _ => Err(UnknownFormat(tag.to_string())),
        }
    }
}

/// A malformed translation file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{url}: {message}")]
pub struct LoadError {
    pub url: String,
    pub message: String,
}

impl LoadError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        LoadError {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Deserializer for one translation format
pub trait CatalogLoader: Send + Sync {
    fn load(&self, content: &str, url: &str) -> Result<TranslationCatalog, LoadError>;
}

/// Loaders by format, shared by every transform call
#[derive(Clone, Default)]
pub struct CatalogLoaders {
    loaders: HashMap<TranslationFormat, Arc<dyn CatalogLoader>>,
}

impl CatalogLoaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, format: TranslationFormat, loader: Arc<dyn CatalogLoader>) -> Self {
        self.register(format, loader);
        self
    }

    pub fn register(&mut self, format: TranslationFormat, loader: Arc<dyn CatalogLoader>) {
        self.loaders.insert(format, loader);
    }

    pub fn get(&self, format: TranslationFormat) -> Option<&dyn CatalogLoader> {
        self.loaders.get(&format).map(|loader| loader.as_ref())
    }
}

impl fmt::Debug for CatalogLoaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogLoaders")
            .field("formats", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

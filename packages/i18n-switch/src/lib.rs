#![deny(clippy::all)]

//! Angular i18n switch
//!
//! Rewrites component templates carrying i18n markup into a single template
//! with one `*ngSwitchCase` branch per translation file, selected at runtime
//! by a component binding.

pub mod config;
pub mod core;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ml_parser;
pub mod parse_util;
pub mod render;
pub mod transform;

// Re-exports
pub use config::{ConfigError, LoaderOptions, ResolvedOptions};
pub use error::{RenderError, TransformError};
pub use i18n::{
    CatalogLoader, CatalogLoaders, LoadError, TranslationCatalog, TranslationFormat,
};
pub use ml_parser::{ParseOptions, ParseTreeResult, TemplateParser};
pub use transform::{Outcome, PassThroughReason, TemplateSource, TransformOutput, Transformer};

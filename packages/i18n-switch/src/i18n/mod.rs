//! I18n Module
//!
//! Translation catalogs and the format loader seam

pub mod serializer;
pub mod translation_bundle;

pub use serializer::{
    CatalogLoader, CatalogLoaders, LoadError, TranslationFormat, UnknownFormat,
    SUPPORTED_FORMAT_TAGS,
};
pub use translation_bundle::TranslationCatalog;

//! Translation Bundle Module
//!
//! A container for translated messages of one locale

use indexmap::IndexMap;

/// The messages of one translation file.
///
/// Built by a `CatalogLoader` and handed to the `TemplateParser` for the pass
/// of its locale. The transform itself only reads `locale`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationCatalog {
    pub locale: Option<String>,
    /// Translated text by message id, in file order
    pub messages: IndexMap<String, String>,
}

impl TranslationCatalog {
    pub fn new(locale: Option<String>, messages: IndexMap<String, String>) -> Self {
        TranslationCatalog { locale, messages }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    pub fn has(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

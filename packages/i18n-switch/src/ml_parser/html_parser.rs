//! HTML Parser seam
//!
//! The switch renderer never tokenizes markup itself. A `TemplateParser`
//! turns template source (optionally merged with a translation catalog) into
//! the node shapes of `ast`, and extracts the translatable messages.

use super::ast::Node;
use crate::core::MissingTranslationStrategy;
use crate::i18n::TranslationCatalog;
use crate::parse_util::ParseError;

/// Per-pass parser options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Parse `{value, plural, ...}` forms into expansion nodes
    pub tokenize_expansion_forms: bool,
    pub missing_translation: MissingTranslationStrategy,
}

impl ParseOptions {
    /// Options used for a pass merged against a locale catalog
    pub fn for_locale() -> Self {
        ParseOptions {
            tokenize_expansion_forms: true,
            missing_translation: MissingTranslationStrategy::Warning,
        }
    }

    /// Options used for the untranslated default pass
    pub fn for_default() -> Self {
        ParseOptions {
            tokenize_expansion_forms: false,
            missing_translation: MissingTranslationStrategy::Warning,
        }
    }
}

/// Result of parsing a template
#[derive(Debug, Clone, Default)]
pub struct ParseTreeResult {
    pub root_nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
}

impl ParseTreeResult {
    pub fn new(root_nodes: Vec<Node>, errors: Vec<ParseError>) -> Self {
        ParseTreeResult { root_nodes, errors }
    }

    /// Errors that make the tree unusable (warnings excluded)
    pub fn structural_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| e.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| !e.is_error())
    }

    pub fn has_structural_errors(&self) -> bool {
        self.structural_errors().next().is_some()
    }
}

/// A translatable message found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    pub id: String,
    pub meaning: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub messages: Vec<ExtractedMessage>,
    pub errors: Vec<ParseError>,
}

/// HTML/i18n parser collaborator.
///
/// Implementations hold no per-file mutable state: one instance is shared by
/// every transform call, including calls running on other threads.
pub trait TemplateParser: Send + Sync {
    /// Parse `source`, substituting messages from `catalog` when one is given.
    ///
    /// Missing translations are reported as `Warning` level errors according
    /// to `options.missing_translation`.
    fn parse(
        &self,
        source: &str,
        url: &str,
        catalog: Option<&TranslationCatalog>,
        options: ParseOptions,
    ) -> ParseTreeResult;

    /// Collect the translatable messages of `source` without merging anything.
    fn extract_messages(&self, source: &str, url: &str) -> ExtractionResult;
}

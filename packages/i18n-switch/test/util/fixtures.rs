use angular_i18n_switch::i18n::{CatalogLoader, LoadError, TranslationCatalog};
use angular_i18n_switch::ml_parser::ast::Node;
use angular_i18n_switch::ml_parser::{
    ExtractedMessage, ExtractionResult, ParseOptions, ParseTreeResult, TemplateParser,
};
use angular_i18n_switch::render::IdSource;
use indexmap::IndexMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

type BuildFn = dyn Fn(Option<&TranslationCatalog>) -> ParseTreeResult + Send + Sync;

/// Parser returning prepared trees.
///
/// `build` receives the catalog of the pass (`None` for the default pass)
/// and decides which nodes and errors that pass produces.
pub struct FixtureParser {
    messages: Vec<ExtractedMessage>,
    build: Box<BuildFn>,
    parses: AtomicUsize,
    options_seen: Mutex<Vec<ParseOptions>>,
}

impl FixtureParser {
    pub fn new<F>(message_ids: &[&str], build: F) -> Self
    where
        F: Fn(Option<&TranslationCatalog>) -> ParseTreeResult + Send + Sync + 'static,
    {
        FixtureParser {
            messages: message_ids
                .iter()
                .map(|id| ExtractedMessage {
                    id: id.to_string(),
                    meaning: String::new(),
                    description: String::new(),
                })
                .collect(),
            build: Box::new(build),
            parses: AtomicUsize::new(0),
            options_seen: Mutex::new(Vec::new()),
        }
    }

    /// Parser whose passes never report errors
    pub fn nodes<F>(message_ids: &[&str], build: F) -> Self
    where
        F: Fn(Option<&TranslationCatalog>) -> Vec<Node> + Send + Sync + 'static,
    {
        Self::new(message_ids, move |catalog| {
            ParseTreeResult::new(build(catalog), Vec::new())
        })
    }

    pub fn parse_count(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }

    pub fn options_seen(&self) -> Vec<ParseOptions> {
        self.options_seen.lock().unwrap().clone()
    }
}

impl TemplateParser for FixtureParser {
    fn parse(
        &self,
        _source: &str,
        _url: &str,
        catalog: Option<&TranslationCatalog>,
        options: ParseOptions,
    ) -> ParseTreeResult {
        self.parses.fetch_add(1, Ordering::SeqCst);
        self.options_seen.lock().unwrap().push(options);
        (self.build)(catalog)
    }

    fn extract_messages(&self, _source: &str, _url: &str) -> ExtractionResult {
        ExtractionResult {
            messages: self.messages.clone(),
            errors: Vec::new(),
        }
    }
}

/// Translated text for `id`, or `fallback` on the default pass or a miss
pub fn translated(catalog: Option<&TranslationCatalog>, id: &str, fallback: &str) -> String {
    catalog
        .and_then(|c| c.get(id))
        .unwrap_or(fallback)
        .to_string()
}

/// Loader for a line based `key=value` format; the `locale` key names the locale.
pub struct KeyValueLoader;

impl CatalogLoader for KeyValueLoader {
    fn load(&self, content: &str, url: &str) -> Result<TranslationCatalog, LoadError> {
        let mut locale = None;
        let mut messages = IndexMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                LoadError::new(url, format!("expected key=value on line {}", idx + 1))
            })?;
            if key == "locale" {
                locale = Some(value.to_string());
            } else {
                messages.insert(key.to_string(), value.to_string());
            }
        }

        Ok(TranslationCatalog::new(locale, messages))
    }
}

/// Predictable template identifiers: `id0`, `id1`, ...
#[derive(Default)]
pub struct SequentialIds(AtomicUsize);

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        format!("id{}", self.0.fetch_add(1, Ordering::SeqCst))
    }
}

/// Temporary directory holding translation files
pub struct TranslationDir {
    dir: TempDir,
}

impl TranslationDir {
    pub fn new() -> Self {
        TranslationDir {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

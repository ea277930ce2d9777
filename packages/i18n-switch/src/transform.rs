//! Template transform
//!
//! Rewrites one template into an `[ngSwitch]` container holding one
//! `*ngSwitchCase` branch per translation file plus a `*ngSwitchDefault`
//! branch with the untranslated template. Projection points are declared once
//! as `<ng-template>`s after the container and referenced from every branch.

use crate::config::{ConfigError, LoaderOptions, DEFAULT_LOCALE_BINDING};
use crate::error::{RenderError, Result, TransformError};
use crate::i18n::{CatalogLoader, CatalogLoaders, TranslationCatalog};
use crate::logging::{Logger, TracingLogger};
use crate::ml_parser::{ParseOptions, ParseTreeResult, TemplateParser};
use crate::render::{
    escape_attribute_value, render_pass, IdSource, RandomIdSource, RenderContext,
};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

static I18N_MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)i18n").expect("valid i18n marker pattern"));

/// Cheap check run before any parsing
pub fn contains_i18n_markup(content: &str) -> bool {
    I18N_MARKUP_RE.is_match(content)
}

/// Why a template was returned unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThroughReason {
    NoI18nMarkup,
    Disabled,
    NoTranslationFiles,
    UnsupportedFormat,
    InvalidOptions,
    NoMessages,
    DefaultBranchFailed,
}

impl From<&ConfigError> for PassThroughReason {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Disabled => PassThroughReason::Disabled,
            ConfigError::NoTranslationFiles => PassThroughReason::NoTranslationFiles,
            ConfigError::UnsupportedFormat { .. } => PassThroughReason::UnsupportedFormat,
            ConfigError::Malformed(_) => PassThroughReason::InvalidOptions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PassThrough(PassThroughReason),
    Transformed {
        /// Locales that produced a `*ngSwitchCase` branch, in file order
        locales: Vec<String>,
        /// Number of generated `<ng-template>` declarations
        templates: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub content: String,
    pub outcome: Outcome,
}

impl TransformOutput {
    fn pass_through(content: &str, reason: PassThroughReason) -> Self {
        TransformOutput {
            content: content.to_string(),
            outcome: Outcome::PassThrough(reason),
        }
    }

    pub fn is_transformed(&self) -> bool {
        matches!(self.outcome, Outcome::Transformed { .. })
    }
}

/// One template file handed to `Transformer::transform_all`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub path: PathBuf,
    pub content: String,
}

impl TemplateSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        TemplateSource {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Template transformer.
///
/// Holds only read-only collaborators; every `transform` call owns a fresh
/// `RenderContext`, so one instance can serve many threads.
pub struct Transformer {
    parser: Arc<dyn TemplateParser>,
    loaders: CatalogLoaders,
    logger: Arc<dyn Logger>,
    id_source: Arc<dyn IdSource>,
}

impl Transformer {
    pub fn new(parser: Arc<dyn TemplateParser>, loaders: CatalogLoaders) -> Self {
        Transformer {
            parser,
            loaders,
            logger: Arc::new(TracingLogger::default()),
            id_source: Arc::new(RandomIdSource::new()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_id_source(mut self, id_source: Arc<dyn IdSource>) -> Self {
        self.id_source = id_source;
        self
    }

    /// Transform independent templates in parallel.
    pub fn transform_all(
        &self,
        sources: &[TemplateSource],
        options: &LoaderOptions,
    ) -> Vec<Result<TransformOutput>> {
        sources
            .par_iter()
            .map(|source| self.transform(&source.content, &source.path, options))
            .collect()
    }

    /// Transform one template with the raw options handed over by the host:
    /// the loader query and the global section it may name.
    ///
    /// Options that do not deserialize are reported and the template is
    /// returned unchanged.
    pub fn transform_with_host(
        &self,
        content: &str,
        resource_path: &Path,
        query: &Value,
        global: &Value,
    ) -> Result<TransformOutput> {
        if !contains_i18n_markup(content) {
            return Ok(TransformOutput::pass_through(content, PassThroughReason::NoI18nMarkup));
        }

        match LoaderOptions::from_host(query, global) {
            Ok(options) => self.transform(content, resource_path, &options),
            Err(err) => {
                self.logger.warn(&format!(
                    "Ignoring i18n switch for {}: {}",
                    resource_path.display(),
                    err
                ));
                Ok(TransformOutput::pass_through(content, PassThroughReason::from(&err)))
            }
        }
    }

    /// Transform one template.
    ///
    /// Configuration problems and parse errors return the input unchanged;
    /// unreadable or malformed translation files are fatal.
    pub fn transform(
        &self,
        content: &str,
        resource_path: &Path,
        options: &LoaderOptions,
    ) -> Result<TransformOutput> {
        if !contains_i18n_markup(content) {
            return Ok(TransformOutput::pass_through(content, PassThroughReason::NoI18nMarkup));
        }

        if !options.is_enabled() {
            self.logger.debug(&format!(
                "i18n switch disabled, leaving {} untouched",
                resource_path.display()
            ));
            return Ok(TransformOutput::pass_through(content, PassThroughReason::Disabled));
        }

        if options.explicit_locale_binding().is_none() {
            self.logger.warn(&format!(
                "It seems there was no \"localeBinding\" specified in the config, falling back to default \"{}\".",
                DEFAULT_LOCALE_BINDING
            ));
        }

        let resolved = match options.resolve() {
            Ok(resolved) => resolved,
            Err(err) => {
                self.logger.warn(&err.to_string());
                return Ok(TransformOutput::pass_through(content, PassThroughReason::from(&err)));
            }
        };

        let Some(loader) = self.loaders.get(resolved.format) else {
            self.logger.warn(&format!(
                "No translation loader registered for format \"{}\", skipping.",
                resolved.format
            ));
            return Ok(TransformOutput::pass_through(
                content,
                PassThroughReason::UnsupportedFormat,
            ));
        };

        let url = resource_path.to_string_lossy();

        let extraction = self.parser.extract_messages(content, &url);
        for error in &extraction.errors {
            self.logger.debug(&error.to_string());
        }
        if extraction.messages.is_empty() {
            return Ok(TransformOutput::pass_through(content, PassThroughReason::NoMessages));
        }

        let mut ctx = RenderContext::new(self.id_source.as_ref());
        let mut branches = String::new();
        let mut locales = Vec::new();

        for path in &resolved.translation_files {
            let Some(catalog) = self.load_catalog(loader, path)? else {
                continue;
            };
            let locale = self.locale_tag(&catalog, path);

            let parsed = self
                .parser
                .parse(content, &url, Some(&catalog), ParseOptions::for_locale());
            if !self.check_parse(&parsed) {
                self.logger.error(&format!(
                    "Skipping locale \"{}\" for {}",
                    locale,
                    resource_path.display()
                ));
                continue;
            }

            match render_pass(&parsed.root_nodes, &mut ctx) {
                Ok(html) => {
                    branches.push_str(&switch_case(&locale, &html));
                    locales.push(locale);
                }
                Err(err @ RenderError::ProjectionMismatch { .. }) => {
                    self.logger.error(&format!(
                        "Skipping locale \"{}\" for {}: {}",
                        locale,
                        resource_path.display(),
                        err
                    ));
                }
                Err(err) => return Err(TransformError::Render(err)),
            }
        }

        let parsed = self
            .parser
            .parse(content, &url, None, ParseOptions::for_default());
        if !self.check_parse(&parsed) {
            return Ok(TransformOutput::pass_through(
                content,
                PassThroughReason::DefaultBranchFailed,
            ));
        }

        match render_pass(&parsed.root_nodes, &mut ctx) {
            Ok(html) => branches.push_str(&switch_default(&html)),
            Err(err @ RenderError::ProjectionMismatch { .. }) => {
                self.logger.error(&format!(
                    "Cannot render default branch of {}: {}",
                    resource_path.display(),
                    err
                ));
                return Ok(TransformOutput::pass_through(
                    content,
                    PassThroughReason::DefaultBranchFailed,
                ));
            }
            Err(err) => return Err(TransformError::Render(err)),
        }

        let binding = escape_attribute_value(&resolved.locale_binding);
        let output = format!(
            "<ng-container [ngSwitch]=\"{}\">{}</ng-container>{}",
            binding,
            branches,
            ctx.templates_joined()
        );

        Ok(TransformOutput {
            content: output,
            outcome: Outcome::Transformed {
                locales,
                templates: ctx.templates().len(),
            },
        })
    }

    /// Read and deserialize one translation file; `None` for an empty file.
    fn load_catalog(
        &self,
        loader: &dyn CatalogLoader,
        path: &Path,
    ) -> Result<Option<TranslationCatalog>> {
        let bytes = std::fs::read(path).map_err(|source| TransformError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if bytes.is_empty() {
            self.logger
                .debug(&format!("Translation file {} is empty, skipping.", path.display()));
            return Ok(None);
        }

        let text = String::from_utf8(bytes).map_err(|_| TransformError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        loader
            .load(&text, &path.to_string_lossy())
            .map(Some)
            .map_err(|source| TransformError::Load {
                path: path.to_path_buf(),
                source,
            })
    }

    fn locale_tag(&self, catalog: &TranslationCatalog, path: &Path) -> String {
        if let Some(locale) = catalog.locale.as_deref().filter(|l| !l.is_empty()) {
            return locale.to_string();
        }

        let fallback = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.logger.warn(&format!(
            "Translation file {} declares no locale, using \"{}\".",
            path.display(),
            fallback
        ));
        fallback
    }

    /// Log the diagnostics of a parse; `false` when it has structural errors.
    fn check_parse(&self, parsed: &ParseTreeResult) -> bool {
        for warning in parsed.warnings() {
            self.logger.warn(&warning.to_string());
        }

        for error in parsed.structural_errors() {
            self.logger.error(&error.to_string());
        }
        !parsed.has_structural_errors()
    }
}

fn switch_case(locale: &str, html: &str) -> String {
    let locale = escape_attribute_value(&locale.replace('\'', "\\'"));
    format!(
        "<ng-container *ngSwitchCase=\"'{}'\">{}</ng-container>",
        locale, html
    )
}

fn switch_default(html: &str) -> String {
    format!("<ng-container *ngSwitchDefault>{}</ng-container>", html)
}

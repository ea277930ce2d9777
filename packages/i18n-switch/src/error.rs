//! Error types

use crate::i18n::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of one render pass
#[derive(Debug, Error)]
pub enum RenderError {
    /// A replaying pass met a different number of projection points than the
    /// pass that generated the templates
    #[error("projection point mismatch: {generated} template(s) generated, {found} projection point(s) found")]
    ProjectionMismatch { generated: usize, found: usize },

    #[error("no unique template identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: usize },
}

/// Fatal failure of a transform call
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot read translation file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("translation file {} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("cannot load translation file {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("cannot generate template identifiers: {0}")]
    Render(#[source] RenderError),
}

pub type Result<T> = std::result::Result<T, TransformError>;

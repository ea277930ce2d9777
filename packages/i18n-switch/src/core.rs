//! Core enums shared between the transform and its parser collaborator.

use serde::{Deserialize, Serialize};

/// How a parser reacts to a message that has no entry in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MissingTranslationStrategy {
    Error = 0,
    #[default]
    Warning = 1,
    Ignore = 2,
}

//! ML (Markup Language) Parser Module
//!
//! AST node shapes, tag capabilities and the parser collaborator seam.

pub mod ast;
pub mod html_parser;
pub mod html_tags;

pub use ast::*;
pub use html_parser::{
    ExtractedMessage, ExtractionResult, ParseOptions, ParseTreeResult, TemplateParser,
};
pub use html_tags::{get_tag_capabilities, TagCapabilities};

//! Render Module
//!
//! Turns parsed template nodes into the HTML of one switch branch.

pub mod context;
pub mod html_visitor;
pub mod uniq_id;

pub use context::{RenderContext, GENERATED_TEMPLATE_PREFIX};
pub use html_visitor::{escape_attribute_value, is_i18n_attribute, visit, visit_all};
pub use uniq_id::{IdSource, RandomIdSource, ID_LENGTH};

use crate::error::RenderError;
use crate::ml_parser::ast::Node;

/// Render the root nodes of one parse as a complete pass.
pub fn render_pass(nodes: &[Node], ctx: &mut RenderContext<'_>) -> Result<String, RenderError> {
    ctx.begin_pass();
    let html = visit_all(nodes, ctx)?;
    ctx.finish_pass()?;
    Ok(html)
}

//! HTML Visitor
//!
//! Serializes parsed nodes back to template HTML. Translation attributes are
//! dropped, ICU expansions are written back in their textual form, and
//! projection points are routed through the `RenderContext`.

use super::context::RenderContext;
use crate::error::RenderError;
use crate::ml_parser::ast::*;
use crate::ml_parser::html_tags::{get_tag_capabilities, TagCapabilities};
use once_cell::sync::Lazy;
use regex::Regex;

/// `i18n`, `i18n-title`, `I18N-placeholder`, ...
static I18N_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^i18n(-.+)?$").expect("valid i18n attribute pattern"));

pub fn is_i18n_attribute(name: &str) -> bool {
    I18N_ATTR_RE.is_match(name)
}

/// Escape a value for use inside a double-quoted attribute (`& < > "`)
pub fn escape_attribute_value(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Render a sequence of sibling nodes
pub fn visit_all(nodes: &[Node], ctx: &mut RenderContext<'_>) -> Result<String, RenderError> {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&visit(node, ctx)?);
    }
    Ok(out)
}

/// Render a single node
pub fn visit(node: &Node, ctx: &mut RenderContext<'_>) -> Result<String, RenderError> {
    match node {
        Node::Element(element) => visit_element(element, ctx),
        Node::Attribute(attribute) => visit_attribute(attribute, ctx),
        Node::Text(text) => Ok(visit_text(text)),
        Node::Comment(comment) => Ok(visit_comment(comment)),
        Node::Expansion(expansion) => visit_expansion(expansion, ctx),
        Node::ExpansionCase(case) => visit_expansion_case(case, ctx),
    }
}

pub fn visit_element(
    element: &Element,
    ctx: &mut RenderContext<'_>,
) -> Result<String, RenderError> {
    let caps = get_tag_capabilities(&element.name);

    let mut attrs = Vec::with_capacity(element.attrs.len());
    for attr in &element.attrs {
        let rendered = visit_attribute(attr, ctx)?;
        if !rendered.is_empty() {
            attrs.push(rendered);
        }
    }
    let attrs = attrs.join(" ");
    let children = visit_all(&element.children, ctx)?;
    let self_close = children.is_empty() && caps.contains(TagCapabilities::VOID);

    let mut html =
        String::with_capacity(element.name.len() * 2 + attrs.len() + children.len() + 8);
    html.push('<');
    html.push_str(&element.name);
    if !attrs.is_empty() {
        html.push(' ');
        html.push_str(&attrs);
    }
    if self_close {
        html.push_str(" />");
    } else {
        html.push('>');
        html.push_str(&children);
        html.push_str("</");
        html.push_str(&element.name);
        html.push('>');
    }

    if caps.contains(TagCapabilities::PROJECTION_POINT) {
        return ctx.project(html);
    }

    Ok(html)
}

pub fn visit_attribute(
    attribute: &Attribute,
    ctx: &mut RenderContext<'_>,
) -> Result<String, RenderError> {
    if is_i18n_attribute(&attribute.name) {
        return Ok(String::new());
    }

    let value = match &attribute.value_nodes {
        Some(nodes) => visit_all(nodes, ctx)?,
        None => attribute.value.clone(),
    };

    if value.is_empty() {
        Ok(attribute.name.clone())
    } else {
        Ok(format!("{}=\"{}\"", attribute.name, escape_attribute_value(&value)))
    }
}

pub fn visit_text(text: &Text) -> String {
    text.value.clone()
}

/// Comments are not kept by the parser in a reproducible position
pub fn visit_comment(_comment: &Comment) -> String {
    String::new()
}

pub fn visit_expansion(
    expansion: &Expansion,
    ctx: &mut RenderContext<'_>,
) -> Result<String, RenderError> {
    let mut cases = Vec::with_capacity(expansion.cases.len());
    for case in &expansion.cases {
        let rendered = visit_expansion_case(case, ctx)?;
        if !rendered.is_empty() {
            cases.push(rendered);
        }
    }

    if cases.is_empty() {
        Ok(format!("{{{}, {}}}", expansion.switch_value, expansion.expansion_type))
    } else {
        Ok(format!(
            "{{{}, {}, {}}}",
            expansion.switch_value,
            expansion.expansion_type,
            cases.join(" ")
        ))
    }
}

pub fn visit_expansion_case(
    case: &ExpansionCase,
    ctx: &mut RenderContext<'_>,
) -> Result<String, RenderError> {
    let expression = visit_all(&case.expression, ctx)?;
    Ok(format!("{} {{{}}}", case.value, expression))
}

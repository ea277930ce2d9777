#![allow(dead_code)]

/**
 * Transform Test Utilities
 *
 * Stand-in collaborators (parser, catalog loader, id source) and node
 * builders shared by the integration tests.
 */
pub mod fixtures;

use angular_i18n_switch::ml_parser::ast::*;

pub use fixtures::{translated, FixtureParser, KeyValueLoader, SequentialIds, TranslationDir};

pub fn el(name: &str, attrs: Vec<Attribute>, children: Vec<Node>) -> Node {
    Node::Element(Element::new(name, attrs, children))
}

pub fn text(value: &str) -> Node {
    Node::Text(Text::new(value))
}

pub fn attr(name: &str, value: &str) -> Attribute {
    Attribute::new(name, value)
}

pub fn comment(value: &str) -> Node {
    Node::Comment(Comment::new(Some(value.to_string())))
}

pub fn expansion(switch_value: &str, kind: &str, cases: Vec<(&str, Vec<Node>)>) -> Node {
    Node::Expansion(Expansion::new(
        switch_value,
        kind,
        cases
            .into_iter()
            .map(|(value, expression)| ExpansionCase::new(value, expression))
            .collect(),
    ))
}

/// Number of non-overlapping occurrences of `needle`
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Template reference names in order of appearance
pub fn outlet_refs(html: &str) -> Vec<String> {
    let marker = "*ngTemplateOutlet=\"";
    html.match_indices(marker)
        .map(|(idx, _)| {
            let rest = &html[idx + marker.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

/// Reference variables of generated `<ng-template>` declarations
pub fn template_decls(html: &str) -> Vec<String> {
    let marker = "<ng-template #";
    html.match_indices(marker)
        .map(|(idx, _)| {
            let rest = &html[idx + marker.len()..];
            rest[..rest.find('>').unwrap()].to_string()
        })
        .collect()
}

//! HTML Tag Definitions
//!
//! Static capability table for the tag names the switch renderer treats
//! specially. Lookups are case-insensitive.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use std::collections::HashMap;

bitflags! {
    /// What a tag name means to the renderer
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TagCapabilities: u8 {
        const NONE = 0b0000;
        /// HTML void element, may render as `<tag />`
        const VOID = 0b0001;
        /// Content projection point, rendered through a shared `<ng-template>`
        const PROJECTION_POINT = 0b0010;
    }
}

/// Tag definitions registry
static TAG_CAPABILITIES: Lazy<HashMap<&'static str, TagCapabilities>> = Lazy::new(|| {
    let mut defs = HashMap::new();

    // Void elements (self-closing)
    for name in [
        "base", "meta", "area", "embed", "link", "img", "input", "param", "hr", "br", "source",
        "track", "wbr", "col",
    ] {
        defs.insert(name, TagCapabilities::VOID);
    }

    // Nested router placeholder and content projection slot
    defs.insert("router-outlet", TagCapabilities::PROJECTION_POINT);
    defs.insert("ng-content", TagCapabilities::PROJECTION_POINT);

    defs
});

/// Get the capabilities of a tag name
pub fn get_tag_capabilities(tag_name: &str) -> TagCapabilities {
    if let Some(caps) = TAG_CAPABILITIES.get(tag_name) {
        return *caps;
    }
    TAG_CAPABILITIES
        .get(tag_name.to_lowercase().as_str())
        .copied()
        .unwrap_or(TagCapabilities::NONE)
}

//! Tag tables
//!
//! Void elements never receive a closing counterpart or synthesized
//! children; membership is decided on the lowercased tag name.

use std::collections::HashSet;

use once_cell::sync::Lazy;

static VOID_TAGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["img", "input", "br", "hr", "meta", "link"].into_iter().collect());

/// Check tag membership in the void-element set (case-insensitive).
pub fn is_void_tag(tag_name: &str) -> bool {
    VOID_TAGS.contains(tag_name.to_ascii_lowercase().as_str())
}

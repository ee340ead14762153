//! Insertion action model
//!
//! Request payloads arrive as JSON from the editing pipeline; field names
//! are camelCase on the wire. Attribute order is significant, so the
//! attribute mapping is an `IndexMap`.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Structured description of an element to synthesize.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescription {
    pub tag_name: String,
    #[serde(default)]
    pub attributes: IndexMap<String, Value>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementDescription>,
}

impl ElementDescription {
    pub fn new(tag_name: impl Into<String>) -> Self {
        ElementDescription {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            text_content: None,
            children: Vec::new(),
        }
    }
}

/// Where the new element comes from: a raw source fragment to parse, or a
/// structured description to synthesize.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ElementSource {
    CodeBlock(String),
    Description(ElementDescription),
}

/// Target position within the parent's children.
///
/// `Index` counts only element-like children (the logical index). `None` is
/// the undefined sentinel carried by degraded upstream payloads; resolution
/// recovers by appending. The enum is closed: adding a position kind without
/// updating the resolver is a compile error, not a silent fallback.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "position", rename_all = "camelCase")]
pub enum InsertPos {
    Append,
    Prepend,
    Index {
        #[serde(default)]
        index: Option<usize>,
    },
}

/// A complete insertion request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertRequest {
    pub source: ElementSource,
    #[serde(flatten)]
    pub position: InsertPos,
}

//! Element construction
//!
//! Builds the detached node an insertion will splice in: either the parsed
//! result of a code-block fragment, taken verbatim, or an element
//! synthesized recursively from a structured description.

use jsx_tree::ast::{AttrValue, Attribute, Element, Node, Text};
use jsx_tree::parser::parse_fragment;
use jsx_tree::tags::is_void_tag;
use serde_json::Value;

use crate::actions::{ElementDescription, ElementSource};
use crate::error::BuildError;

/// Build the node to insert.
///
/// Code blocks delegate to the fragment parser and the parsed node is
/// trusted as syntactically complete. Descriptions are synthesized without
/// going through the parser. Construction is deterministic: attribute order
/// follows the mapping's iteration order, and `text_content` precedes nested
/// children.
pub fn build_inserted_element(source: &ElementSource) -> Result<Node, BuildError> {
    match source {
        ElementSource::CodeBlock(code) => Ok(parse_fragment(code)?),
        ElementSource::Description(description) => {
            Ok(Node::Element(create_element(description)))
        }
    }
}

fn create_element(description: &ElementDescription) -> Element {
    let attrs = description
        .attributes
        .iter()
        .map(|(name, value)| Attribute {
            name: name.clone(),
            value: Some(attr_value(value)),
        })
        .collect();

    let is_self_closing = is_void_tag(&description.tag_name);

    // Void elements emit an opening-only marker; any supplied text or
    // children are dropped.
    let mut children = Vec::new();
    if !is_self_closing {
        if let Some(text) = &description.text_content {
            children.push(Node::Text(Text::new(text.clone())));
        }
        children.extend(
            description
                .children
                .iter()
                .map(|child| Node::Element(create_element(child))),
        );
    }

    Element {
        name: description.tag_name.clone(),
        attrs,
        children,
        is_self_closing,
    }
}

// String props stay literal; every other JSON value rides in an expression
// container as its JSON text.
fn attr_value(value: &Value) -> AttrValue {
    match value {
        Value::String(text) => AttrValue::Literal(text.clone()),
        other => AttrValue::Expression(other.to_string()),
    }
}

//! Element builder tests

#[cfg(test)]
mod tests {
    use jsx_codemod::{build_inserted_element, BuildError, ElementDescription, ElementSource};
    use jsx_tree::ast::{AttrValue, Element, Node};
    use serde_json::json;

    fn as_element(node: &Node) -> &Element {
        match node {
            Node::Element(element) => element,
            other => panic!("expected element, got {:?}", other),
        }
    }

    fn build(description: ElementDescription) -> Node {
        build_inserted_element(&ElementSource::Description(description)).unwrap()
    }

    mod descriptions {
        use super::*;

        #[test]
        fn should_build_basic_element() {
            let mut description = ElementDescription::new("div");
            description.text_content = Some("Click me".to_string());

            let node = build(description);
            let element = as_element(&node);
            assert_eq!(element.name, "div");
            assert!(!element.is_self_closing);
            assert_eq!(element.children.len(), 1);
            assert!(matches!(&element.children[0], Node::Text(t) if t.value == "Click me"));
        }

        #[test]
        fn should_emit_string_attributes_as_literals() {
            let mut description = ElementDescription::new("div");
            description
                .attributes
                .insert("className".to_string(), json!("btn"));

            let node = build(description);
            let element = as_element(&node);
            assert_eq!(
                element.attrs[0].value,
                Some(AttrValue::Literal("btn".to_string()))
            );
        }

        #[test]
        fn should_emit_non_string_attributes_as_json_expressions() {
            let mut description = ElementDescription::new("div");
            description.attributes.insert("tabIndex".to_string(), json!(42));
            description.attributes.insert("hidden".to_string(), json!(true));
            description
                .attributes
                .insert("data".to_string(), json!({"a": 1}));

            let node = build(description);
            let element = as_element(&node);
            assert_eq!(
                element.attrs[0].value,
                Some(AttrValue::Expression("42".to_string()))
            );
            assert_eq!(
                element.attrs[1].value,
                Some(AttrValue::Expression("true".to_string()))
            );
            assert_eq!(
                element.attrs[2].value,
                Some(AttrValue::Expression("{\"a\":1}".to_string()))
            );
        }

        #[test]
        fn should_preserve_attribute_order() {
            let mut description = ElementDescription::new("div");
            for name in ["z", "a", "m"] {
                description.attributes.insert(name.to_string(), json!(name));
            }

            let node = build(description);
            let names: Vec<&str> = as_element(&node)
                .attrs
                .iter()
                .map(|attr| attr.name.as_str())
                .collect();
            assert_eq!(names, vec!["z", "a", "m"]);
        }

        #[test]
        fn should_place_text_content_before_nested_children() {
            let mut description = ElementDescription::new("div");
            description.text_content = Some("first".to_string());
            description.children = vec![
                ElementDescription::new("span"),
                ElementDescription::new("p"),
            ];

            let node = build(description);
            let element = as_element(&node);
            assert_eq!(element.children.len(), 3);
            assert!(matches!(&element.children[0], Node::Text(t) if t.value == "first"));
            assert_eq!(as_element(&element.children[1]).name, "span");
            assert_eq!(as_element(&element.children[2]).name, "p");
        }

        #[test]
        fn should_mark_void_tags_self_closing() {
            let node = build(ElementDescription::new("img"));
            assert!(as_element(&node).is_self_closing);
        }

        #[test]
        fn should_treat_void_tags_case_insensitively() {
            let mut description = ElementDescription::new("IMG");
            description.text_content = Some("ignored".to_string());
            description.children = vec![ElementDescription::new("span")];

            let node = build(description);
            let element = as_element(&node);
            assert!(element.is_self_closing);
            assert!(element.children.is_empty());
        }

        #[test]
        fn should_be_deterministic() {
            let mut description = ElementDescription::new("section");
            description.attributes.insert("id".to_string(), json!("s"));
            description.text_content = Some("t".to_string());
            description.children = vec![ElementDescription::new("p")];

            let first = build(description.clone());
            let second = build(description);
            assert_eq!(first, second);
        }
    }

    mod code_blocks {
        use super::*;

        #[test]
        fn should_parse_code_block_verbatim() {
            let source = ElementSource::CodeBlock("<span id=\"x\">hi</span>".to_string());
            let node = build_inserted_element(&source).unwrap();
            let element = as_element(&node);
            assert_eq!(element.name, "span");
            assert_eq!(element.children.len(), 1);
        }

        #[test]
        fn should_propagate_parse_errors() {
            let source = ElementSource::CodeBlock("<div>".to_string());
            let error = build_inserted_element(&source).unwrap_err();
            assert!(matches!(error, BuildError::Parse(_)));
        }
    }

    mod deserialization {
        use super::*;
        use jsx_codemod::{InsertPos, InsertRequest};

        #[test]
        fn should_deserialize_description_request() {
            let request: InsertRequest = serde_json::from_value(json!({
                "source": {
                    "tagName": "div",
                    "attributes": {"className": "card", "tabIndex": 3},
                    "textContent": "hello"
                },
                "position": "index",
                "index": 2
            }))
            .unwrap();

            assert_eq!(request.position, InsertPos::Index { index: Some(2) });
            match request.source {
                ElementSource::Description(description) => {
                    assert_eq!(description.tag_name, "div");
                    assert_eq!(description.attributes.len(), 2);
                    assert_eq!(description.text_content.as_deref(), Some("hello"));
                }
                other => panic!("expected description, got {:?}", other),
            }
        }

        #[test]
        fn should_deserialize_code_block_request() {
            let request: InsertRequest = serde_json::from_value(json!({
                "source": "<p>x</p>",
                "position": "append"
            }))
            .unwrap();

            assert_eq!(request.position, InsertPos::Append);
            assert!(matches!(request.source, ElementSource::CodeBlock(_)));
        }

        #[test]
        fn should_default_missing_index_to_sentinel() {
            let request: InsertRequest = serde_json::from_value(json!({
                "source": "<p>x</p>",
                "position": "index"
            }))
            .unwrap();

            assert_eq!(request.position, InsertPos::Index { index: None });
        }
    }
}

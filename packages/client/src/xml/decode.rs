//! Conversion of an XML document into a nested mapping.
//!
//! Conventions:
//! - an element becomes a mapping, its attributes stored under `@name`;
//! - a tag seen once becomes a single value, a repeated tag a list in
//!   document order;
//! - an element with only text becomes that (trimmed) string, an empty
//!   element becomes `""`;
//! - text next to attributes or child elements is stored under `#text`.

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use super::utils::{collect_text, get_tag_name};
use crate::error::Result;

/// Key under which mixed text content is stored.
pub const TEXT_KEY: &str = "#text";

/// Parse XML text into `{root_tag: decoded_root}`.
///
/// # Examples
/// ```
/// use wolframalpha_client::xml::parse;
///
/// let value = parse(r#"<queryresult success="true"><pod title="Result"/></queryresult>"#).unwrap();
/// assert_eq!(value["queryresult"]["@success"], "true");
/// assert_eq!(value["queryresult"]["pod"]["@title"], "Result");
/// ```
pub fn parse(text: &str) -> Result<Value> {
    let doc = Document::parse(text)?;
    let root = doc.root_element();

    let mut map = Map::new();
    map.insert(get_tag_name(root).to_string(), decode_element(root));
    Ok(Value::Object(map))
}

/// Decode a single element and its subtree.
pub fn decode_element(node: Node<'_, '_>) -> Value {
    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(
            format!("@{}", attr.name()),
            Value::String(attr.value().to_string()),
        );
    }

    for child in node.children().filter(|c| c.is_element()) {
        push_child(&mut map, get_tag_name(child), decode_element(child));
    }

    let text = collect_text(node);
    if map.is_empty() {
        return Value::String(text);
    }
    if !text.is_empty() {
        map.insert(TEXT_KEY.to_string(), Value::String(text));
    }
    Value::Object(map)
}

/// Insert a child value, promoting to a list when the tag repeats.
fn push_child(map: &mut Map<String, Value>, name: &str, value: Value) {
    match map.get_mut(name) {
        // decode_element never yields a list, so an existing list means a repeat
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name.to_string(), value);
        }
    }
}

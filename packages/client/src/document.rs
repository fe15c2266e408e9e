//! Typed views over the decoded response tree.
//!
//! Every view wraps a borrowed mapping from the tree produced by
//! [`crate::xml::parse`]. Fields are looked up under the element name first
//! and the `@`-prefixed attribute name second.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{AlphaError, Result};
use crate::xml::TEXT_KEY;

/// A decoded element: string keys to values.
pub type Mapping = Map<String, Value>;

/// Shared behavior of all views.
pub trait Document<'a>: Sized {
    /// Name used in shape errors.
    const KIND: &'static str;

    /// Wrap a mapping. Kinds that carry service errors reject them here.
    fn from_map(map: &'a Mapping) -> Result<Self>;

    /// The backing mapping.
    fn as_map(&self) -> &'a Mapping;

    /// Wrap a possibly-absent, possibly-singular node as a list of views.
    ///
    /// A single mapping yields one view, a list yields one view per item and
    /// an absent node yields none. An empty element (`<subpod/>`, decoded as
    /// `""`) counts as absent.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use wolframalpha_client::document::{Document, Element};
    ///
    /// let doc = json!({"foo": "bar"});
    /// let views = Element::from_doc(Some(&doc)).unwrap();
    /// assert_eq!(views.len(), 1);
    /// assert_eq!(views[0].as_map(), doc.as_object().unwrap());
    /// ```
    fn from_doc(doc: Option<&'a Value>) -> Result<Vec<Self>> {
        match doc {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) if is_empty_element(value) => Ok(Vec::new()),
            Some(Value::Object(map)) => Ok(vec![Self::from_map(map)?]),
            Some(Value::Array(items)) => items
                .iter()
                .filter(|item| !is_empty_element(item))
                .map(|item| match item {
                    Value::Object(map) => Self::from_map(map),
                    _ => Err(shape_error(Self::KIND)),
                })
                .collect(),
            Some(_) => Err(shape_error(Self::KIND)),
        }
    }

    /// Raw value of a field.
    fn field(&self, name: &str) -> Result<&'a Value> {
        lookup(self.as_map(), name)
    }

    /// Whether a field is present under either naming convention.
    fn has_field(&self, name: &str) -> bool {
        lookup(self.as_map(), name).is_ok()
    }

    /// A field's text content.
    fn str_field(&self, name: &str) -> Result<&'a str> {
        text_of(self.field(name)?).ok_or_else(|| shape_error(name))
    }

    /// A field's text content parsed into `T`.
    fn parse_field<T: FromStr>(&self, name: &str) -> Result<T> {
        let raw = self.str_field(name)?;
        raw.trim().parse().map_err(|_| AlphaError::InvalidValue {
            field: name.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Untyped view with only generic field access.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element<'a> {
    doc: &'a Mapping,
}

impl<'a> Element<'a> {
    pub fn new(doc: &'a Mapping) -> Self {
        Self { doc }
    }
}

impl<'a> Document<'a> for Element<'a> {
    const KIND: &'static str = "element";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

/// Look a field up as an element, then as an attribute.
pub fn lookup<'a>(map: &'a Mapping, name: &str) -> Result<&'a Value> {
    map.get(name)
        .or_else(|| map.get(&format!("@{name}")))
        .ok_or_else(|| AlphaError::MissingAttribute(name.to_string()))
}

/// Text of a leaf value, or of the `#text` entry of an element.
pub fn text_of(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get(TEXT_KEY).and_then(Value::as_str),
        _ => None,
    }
}

/// Fail if the mapping carries an `error` element.
///
/// Only the child element counts; the `error="false"` attribute the service
/// puts on every pod is not an error.
pub fn check_service_error(map: &Mapping) -> Result<()> {
    let Some(error) = map.get("error") else {
        return Ok(());
    };

    let part = |key: &str| {
        error
            .get(key)
            .and_then(text_of)
            .unwrap_or_default()
            .to_string()
    };
    Err(AlphaError::Service {
        code: part("code"),
        message: part("msg"),
    })
}

/// Decode an XML boolean: exactly `true` or `false`.
///
/// # Examples
/// ```
/// use wolframalpha_client::document::xml_bool;
///
/// assert!(xml_bool("true").unwrap());
/// assert!(!xml_bool("false").unwrap());
/// assert!(xml_bool("maybe").is_err());
/// ```
pub fn xml_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AlphaError::InvalidBool(other.to_string())),
    }
}

fn is_empty_element(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

fn shape_error(field: &str) -> AlphaError {
    AlphaError::UnexpectedShape {
        field: field.to_string(),
    }
}

//! Assumptions and warnings attached to a query result.

use crate::document::{Document, Mapping};
use crate::error::{AlphaError, Result};

/// Placeholder for the assumption description in a template.
const DESC_PLACEHOLDER: &str = "${desc1}";

/// Placeholder for the assumed word in a template.
const WORD_PLACEHOLDER: &str = "${word}";

/// A disambiguation choice the service made or offers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assumption<'a> {
    doc: &'a Mapping,
}

impl<'a> Document<'a> for Assumption<'a> {
    const KIND: &'static str = "assumption";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> Assumption<'a> {
    pub fn template(&self) -> Result<&'a str> {
        self.str_field("template")
    }

    pub fn description(&self) -> Result<&'a str> {
        self.str_field("description")
    }

    pub fn word(&self) -> Result<&'a str> {
        self.str_field("word")
    }

    /// Assumption category, e.g. `Clash` or `Unit`.
    pub fn kind(&self) -> Result<&'a str> {
        self.str_field("type")
    }

    pub fn count(&self) -> Result<usize> {
        self.parse_field("count")
    }

    /// The alternative interpretations offered.
    pub fn values(&self) -> Result<Vec<AssumptionValue<'a>>> {
        AssumptionValue::from_doc(self.doc.get("value"))
    }

    /// Render the template as a single sentence.
    ///
    /// The description replaces `${desc1}`, the word (when present) replaces
    /// `${word}`, and the result is cut right after the first `". "`.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use wolframalpha_client::{Assumption, Document};
    ///
    /// let doc = json!({
    ///     "@template": "Assuming ${desc1}. Use ${word} instead?",
    ///     "@description": "x is a constant"
    /// });
    /// let assumption = Assumption::from_map(doc.as_object().unwrap()).unwrap();
    /// assert_eq!(assumption.text().unwrap(), "Assuming x is a constant.");
    /// ```
    pub fn text(&self) -> Result<String> {
        let mut text = self
            .template()?
            .replace(DESC_PLACEHOLDER, self.description()?);

        match self.word() {
            Ok(word) => text = text.replace(WORD_PLACEHOLDER, word),
            Err(AlphaError::MissingAttribute(_)) => {}
            Err(e) => return Err(e),
        }

        match text.find(". ") {
            Some(index) => {
                text.truncate(index + 1);
                Ok(text)
            }
            None => Err(AlphaError::NoSentenceBoundary(text)),
        }
    }
}

/// One interpretation listed under an assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssumptionValue<'a> {
    doc: &'a Mapping,
}

impl<'a> Document<'a> for AssumptionValue<'a> {
    const KIND: &'static str = "value";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> AssumptionValue<'a> {
    pub fn name(&self) -> Result<&'a str> {
        self.str_field("name")
    }

    pub fn desc(&self) -> Result<&'a str> {
        self.str_field("desc")
    }

    /// Value to pass back as the `assumption` query parameter.
    pub fn input(&self) -> Result<&'a str> {
        self.str_field("input")
    }
}

/// A warning about how the query was interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warning<'a> {
    kind: Option<&'a str>,
    doc: &'a Mapping,
}

impl<'a> Document<'a> for Warning<'a> {
    const KIND: &'static str = "warning";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self {
            kind: None,
            doc: map,
        })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> Warning<'a> {
    pub(crate) fn with_kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Tag of the warning element (`spellcheck`, `delimiters`, ...), when
    /// the warning came from a `warnings` container.
    pub fn kind(&self) -> Option<&'a str> {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn assumption(value: &Value) -> Assumption<'_> {
        Assumption::from_map(value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_text_skips_missing_word() {
        let doc = json!({
            "@template": "Assuming ${desc1}. Use ${word} instead?",
            "@description": "x is a constant"
        });
        assert_eq!(assumption(&doc).text().unwrap(), "Assuming x is a constant.");
    }

    #[test]
    fn test_text_substitutes_word() {
        let doc = json!({
            "@template": "Assuming \"${word}\" is ${desc1}. Use as a unit instead",
            "@description": "a mathematical constant",
            "@word": "pi"
        });
        assert_eq!(
            assumption(&doc).text().unwrap(),
            "Assuming \"pi\" is a mathematical constant."
        );
    }

    #[test]
    fn test_text_truncates_at_first_boundary() {
        let doc = json!({
            "@template": "Use ${desc1}. Or this. Or that. ",
            "@description": "e"
        });
        assert_eq!(assumption(&doc).text().unwrap(), "Use e.");
    }

    #[test]
    fn test_text_boundary_inside_description() {
        let doc = json!({
            "@template": "Assuming ${desc1} here. Done",
            "@description": "approx. 3"
        });
        assert_eq!(assumption(&doc).text().unwrap(), "Assuming approx.");
    }

    #[test]
    fn test_text_without_boundary_fails() {
        let doc = json!({
            "@template": "Assuming ${desc1}",
            "@description": "x is a constant"
        });
        let err = assumption(&doc).text().unwrap_err();
        assert!(matches!(err, AlphaError::NoSentenceBoundary(t) if t == "Assuming x is a constant"));
    }

    #[test]
    fn test_text_requires_description() {
        let doc = json!({"@template": "Assuming ${desc1}. Use"});
        let err = assumption(&doc).text().unwrap_err();
        assert!(matches!(err, AlphaError::MissingAttribute(name) if name == "description"));
    }

    #[test]
    fn test_values() {
        let doc = json!({
            "@type": "Clash",
            "@word": "pi",
            "@count": "2",
            "value": [
                {"@name": "NamedConstant", "@desc": "a mathematical constant", "@input": "*C.pi-_*NamedConstant-"},
                {"@name": "Character", "@desc": "a character", "@input": "*C.pi-_*Character-"}
            ]
        });
        let assumption = assumption(&doc);
        assert_eq!(assumption.kind().unwrap(), "Clash");
        assert_eq!(assumption.count().unwrap(), 2);

        let values = assumption.values().unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].name().unwrap(), "NamedConstant");
        assert_eq!(values[0].desc().unwrap(), "a mathematical constant");
        assert_eq!(values[1].input().unwrap(), "*C.pi-_*Character-");
    }

    #[test]
    fn test_warning_generic_access() {
        let doc = json!({"@word": "pii", "@suggestion": "pi", "@text": "Interpreting \"pii\" as \"pi\""});
        let warning = Warning::from_map(doc.as_object().unwrap()).unwrap();
        assert_eq!(warning.kind(), None);
        assert_eq!(warning.str_field("suggestion").unwrap(), "pi");

        let warning = warning.with_kind("spellcheck");
        assert_eq!(warning.kind(), Some("spellcheck"));
    }
}

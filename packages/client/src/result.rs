//! The top-level query result.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::assumption::{Assumption, Warning};
use crate::document::{check_service_error, xml_bool, Document, Element, Mapping};
use crate::error::{AlphaError, Result};
use crate::pod::Pod;
use crate::xml;

/// Name of the root element of every response.
pub const ROOT_ELEMENT: &str = "queryresult";

/// Title the service gives to the pod holding a direct answer.
pub const RESULT_TITLE: &str = "Result";

/// One entry of [`QueryResult::info`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Info<'a> {
    Pod(Pod<'a>),
    Assumption(Assumption<'a>),
    Warning(Warning<'a>),
}

/// Parsed response to a query.
///
/// Owns the decoded document; pods, assumptions and warnings borrow from it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    doc: Mapping,
}

impl QueryResult {
    /// Decode a response body and select its `queryresult` element.
    ///
    /// Fails with the service's own code and message when the response
    /// carries an `error` block.
    pub fn parse(text: &str) -> Result<Self> {
        let root = match xml::parse(text)? {
            Value::Object(mut map) => map.remove(ROOT_ELEMENT),
            _ => None,
        };

        let doc = match root {
            Some(Value::Object(doc)) => doc,
            // <queryresult/> decodes to an empty string
            Some(Value::String(_)) => Mapping::new(),
            _ => {
                return Err(AlphaError::MissingElement {
                    element: ROOT_ELEMENT.to_string(),
                    context: "response document".to_string(),
                })
            }
        };

        Self::from_map(doc)
    }

    /// Wrap an already decoded `queryresult` mapping.
    pub fn from_map(doc: Mapping) -> Result<Self> {
        check_service_error(&doc)?;
        Ok(Self { doc })
    }

    pub fn as_map(&self) -> &Mapping {
        &self.doc
    }

    /// Generic field access over the `queryresult` element.
    pub fn view(&self) -> Element<'_> {
        Element::new(&self.doc)
    }

    /// Raw value of a field, element first, then attribute.
    pub fn field(&self, name: &str) -> Result<&Value> {
        self.view().field(name)
    }

    /// Whether the service could interpret the input.
    pub fn success(&self) -> Result<bool> {
        xml_bool(self.view().str_field("success")?)
    }

    pub fn num_pods(&self) -> Result<usize> {
        self.view().parse_field("numpods")
    }

    /// Comma-separated data types the service recognized in the input.
    pub fn datatypes(&self) -> Result<&str> {
        self.view().str_field("datatypes")
    }

    pub fn pod(&self) -> Result<Vec<Pod<'_>>> {
        Pod::from_doc(self.doc.get("pod"))
    }

    pub fn pods(&self) -> Result<Vec<Pod<'_>>> {
        self.pod()
    }

    pub fn assumptions(&self) -> Result<Vec<Assumption<'_>>> {
        let mut assumptions = Vec::new();
        for (_, child) in container_children(self.doc.get("assumptions")) {
            assumptions.extend(Assumption::from_doc(Some(child))?);
        }
        Ok(assumptions)
    }

    pub fn warnings(&self) -> Result<Vec<Warning<'_>>> {
        let mut warnings = Vec::new();
        for (kind, child) in container_children(self.doc.get("warnings")) {
            warnings.extend(
                Warning::from_doc(Some(child))?
                    .into_iter()
                    .map(|w| w.with_kind(kind)),
            );
        }
        Ok(warnings)
    }

    /// Pods, then assumptions, then warnings.
    pub fn info(&self) -> Result<Vec<Info<'_>>> {
        let mut info: Vec<Info<'_>> = self.pods()?.into_iter().map(Info::Pod).collect();
        info.extend(self.assumptions()?.into_iter().map(Info::Assumption));
        info.extend(self.warnings()?.into_iter().map(Info::Warning));
        Ok(info)
    }

    /// Number of entries in [`info`](Self::info).
    pub fn len(&self) -> Result<usize> {
        Ok(self.info()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Pods holding the answer to a simple, discrete query: those marked
    /// primary or titled `Result`.
    pub fn results(&self) -> Result<Vec<Pod<'_>>> {
        let mut results = Vec::new();
        for pod in self.pods()? {
            if pod.primary()? || pod.title()? == RESULT_TITLE {
                results.push(pod);
            }
        }
        Ok(results)
    }

    /// Answer text by pod title. A repeated title keeps the last pod's text.
    pub fn details(&self) -> Result<BTreeMap<&str, &str>> {
        let mut details = BTreeMap::new();
        for pod in self.pods()? {
            details.insert(pod.title()?, pod.text()?);
        }
        Ok(details)
    }
}

/// Child elements of a container, attributes and text excluded. Repeated
/// tags are yielded once with their list value.
fn container_children(container: Option<&Value>) -> impl Iterator<Item = (&str, &Value)> {
    container
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter())
        .filter(|(key, _)| !key.starts_with('@') && !key.starts_with('#'))
        .map(|(key, value)| (key.as_str(), value))
}

//! Pods, subpods and images.

use crate::document::{check_service_error, xml_bool, Document, Mapping};
use crate::error::{AlphaError, Result};

/// Groups answers and the information contextualizing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pod<'a> {
    doc: &'a Mapping,
}

impl<'a> Document<'a> for Pod<'a> {
    const KIND: &'static str = "pod";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        check_service_error(map)?;
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> Pod<'a> {
    pub fn title(&self) -> Result<&'a str> {
        self.str_field("title")
    }

    /// Ordering hint, in steps of 100 on the service side.
    pub fn position(&self) -> Result<f64> {
        self.parse_field("position")
    }

    pub fn numsubpods(&self) -> Result<usize> {
        self.parse_field("numsubpods")
    }

    pub fn scanner(&self) -> Result<&'a str> {
        self.str_field("scanner")
    }

    pub fn id(&self) -> Result<&'a str> {
        self.str_field("id")
    }

    /// Whether the service marked this pod as the best single answer.
    ///
    /// Only the attribute is consulted; a pod without it is not primary.
    pub fn primary(&self) -> Result<bool> {
        match self.doc.get("@primary") {
            None => Ok(false),
            Some(value) => match value.as_str() {
                Some(raw) => xml_bool(raw),
                None => Err(AlphaError::InvalidBool(value.to_string())),
            },
        }
    }

    pub fn subpod(&self) -> Result<Vec<Subpod<'a>>> {
        Subpod::from_doc(self.doc.get("subpod"))
    }

    pub fn subpods(&self) -> Result<Vec<Subpod<'a>>> {
        self.subpod()
    }

    /// Plain text of every subpod, in document order.
    pub fn texts(&self) -> Result<Vec<&'a str>> {
        self.subpod()?.iter().map(Subpod::plaintext).collect()
    }

    /// Plain text of the first subpod.
    pub fn text(&self) -> Result<&'a str> {
        match self.subpod()?.first() {
            Some(subpod) => subpod.plaintext(),
            None => Err(AlphaError::EmptyPod(
                self.title().unwrap_or_default().to_string(),
            )),
        }
    }
}

/// Holds a specific answer or additional information relevant to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subpod<'a> {
    doc: &'a Mapping,
}

impl<'a> Document<'a> for Subpod<'a> {
    const KIND: &'static str = "subpod";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> Subpod<'a> {
    pub fn title(&self) -> Result<&'a str> {
        self.str_field("title")
    }

    pub fn plaintext(&self) -> Result<&'a str> {
        self.str_field("plaintext")
    }

    pub fn img(&self) -> Result<Vec<Image<'a>>> {
        Image::from_doc(self.doc.get("img"))
    }

    /// The first attached image, if any.
    pub fn image(&self) -> Result<Option<Image<'a>>> {
        Ok(self.img()?.into_iter().next())
    }
}

/// Information about an image included with an answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Image<'a> {
    doc: &'a Mapping,
}

impl<'a> Document<'a> for Image<'a> {
    const KIND: &'static str = "img";

    fn from_map(map: &'a Mapping) -> Result<Self> {
        Ok(Self { doc: map })
    }

    fn as_map(&self) -> &'a Mapping {
        self.doc
    }
}

impl<'a> Image<'a> {
    pub fn src(&self) -> Result<&'a str> {
        self.str_field("src")
    }

    pub fn alt(&self) -> Result<&'a str> {
        self.str_field("alt")
    }

    pub fn title(&self) -> Result<&'a str> {
        self.str_field("title")
    }

    pub fn height(&self) -> Result<u32> {
        self.parse_field("height")
    }

    pub fn width(&self) -> Result<u32> {
        self.parse_field("width")
    }
}

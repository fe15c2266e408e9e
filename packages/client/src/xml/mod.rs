//! XML decoding into a generic nested mapping.
//!
//! Response documents are turned into a [`serde_json::Value`] tree that the
//! view types in [`crate::document`] project into typed accessors.

mod decode;
mod utils;

pub use decode::{decode_element, parse, TEXT_KEY};
pub use utils::{collect_text, get_tag_name};

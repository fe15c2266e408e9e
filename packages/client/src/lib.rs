//! Wolfram|Alpha v2.0 query client.
//!
//! Submits natural-language queries over HTTPS and exposes the XML response
//! as typed, read-only views: a [`QueryResult`] holding [`Pod`]s (made of
//! [`Subpod`]s and [`Image`]s), [`Assumption`]s and [`Warning`]s.
//!
//! # Example
//!
//! ```
//! use wolframalpha_client::QueryResult;
//!
//! let xml = r#"<queryresult success="true" numpods="1">
//!   <pod title="Result" position="100" numsubpods="1">
//!     <subpod title=""><plaintext>3.14159</plaintext></subpod>
//!   </pod>
//! </queryresult>"#;
//!
//! let result = QueryResult::parse(xml).unwrap();
//! assert_eq!(result.results().unwrap().len(), 1);
//! assert_eq!(result.details().unwrap()["Result"], "3.14159");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, validation and client settings
//! - [`error`]: Error types and Result alias
//! - [`client`]: HTTP transport and query parameters
//! - [`xml`]: XML to nested-mapping decoding
//! - [`document`]: Shared view behavior and field access
//! - [`result`], [`pod`], [`assumption`]: Typed views
//! - [`cli`]: Command-line interface

pub mod assumption;
pub mod cli;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod pod;
pub mod result;
pub mod xml;

// Re-export commonly used items
pub use assumption::{Assumption, AssumptionValue, Warning};
pub use client::{Client, Query};
pub use config::ClientConfig;
pub use document::{xml_bool, Document, Element};
pub use error::{AlphaError, Result};
pub use pod::{Image, Pod, Subpod};
pub use result::{Info, QueryResult};

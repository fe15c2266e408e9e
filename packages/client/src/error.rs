//! Error types for the client.
//!
//! A single `AlphaError` covers transport failures, document decoding
//! failures, and errors reported by the service itself.

use thiserror::Error;

/// Main error type for the client library.
#[derive(Debug, Error)]
pub enum AlphaError {
    /// HTTP request failed (connection error or non-2xx status).
    ///
    /// The request URL is stripped: its query string carries the app id.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The response did not declare the expected XML content type.
    #[error("Unexpected content type: expected '{expected}', got '{}'", .actual.as_deref().unwrap_or("<none>"))]
    UnexpectedContentType {
        expected: &'static str,
        actual: Option<String>,
    },

    /// The response body is not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// The service reported an error in the response document.
    #[error("Error {code}: {message}")]
    Service { code: String, message: String },

    /// A field is absent under both the element and the attribute name.
    #[error("No such attribute: {0}")]
    MissingAttribute(String),

    /// A boolean field holds something other than `true` or `false`.
    #[error("Invalid boolean literal: '{0}'")]
    InvalidBool(String),

    /// A field could not be converted to the requested type.
    #[error("Invalid value for '{field}': '{value}'")]
    InvalidValue { field: String, value: String },

    /// A field holds a shape the view cannot wrap (e.g. text where elements were expected).
    #[error("Unexpected document shape for '{field}'")]
    UnexpectedShape { field: String },

    /// `Pod::text` was requested on a pod without subpods.
    #[error("Pod '{0}' has no subpods")]
    EmptyPod(String),

    /// Rendered assumption text contains no ". " to truncate at.
    #[error("No sentence boundary in assumption text: '{0}'")]
    NoSentenceBoundary(String),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AlphaError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AlphaError>;

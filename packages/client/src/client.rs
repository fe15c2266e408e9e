//! HTTP client for the query endpoint.

use std::sync::OnceLock;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use url::Url;

use crate::config::{ClientConfig, EXPECTED_CONTENT_TYPE};
use crate::error::{AlphaError, Result};
use crate::result::QueryResult;

/// A query and its parameters.
///
/// Extra parameters keep their order and may repeat a key (several
/// `assumption` values, for instance). Options behave like a mapping:
/// setting a key again replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    input: String,
    params: Vec<(String, String)>,
    options: Vec<(String, String)>,
}

impl Query {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a parameter, keeping any earlier value for the same key.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append an `assumption` parameter.
    pub fn assumption(self, value: impl Into<String>) -> Self {
        self.param("assumption", value)
    }

    /// Set a named option, replacing an earlier value for the same key.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.options.push((key, value)),
        }
        self
    }

    /// Outgoing parameters: extra params, then `input` and `appid`, then options.
    ///
    /// # Examples
    /// ```
    /// use wolframalpha_client::Query;
    ///
    /// let query = Query::new("pi")
    ///     .assumption("*C.pi-_*NamedConstant-")
    ///     .option("format", "plaintext");
    /// assert_eq!(
    ///     query.to_pairs("DEMO"),
    ///     vec![
    ///         ("assumption", "*C.pi-_*NamedConstant-"),
    ///         ("input", "pi"),
    ///         ("appid", "DEMO"),
    ///         ("format", "plaintext"),
    ///     ]
    /// );
    /// ```
    pub fn to_pairs<'a>(&'a self, app_id: &'a str) -> Vec<(&'a str, &'a str)> {
        let params = self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let required = [("input", self.input.as_str()), ("appid", app_id)];
        let options = self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        params.chain(required).chain(options).collect()
    }
}

/// Wolfram|Alpha v2.0 client.
///
/// The HTTP session is created on first use and reused afterwards.
/// Two concurrent first queries may each build a session; only one is kept.
///
/// NOTE: Do NOT derive `Debug` on this struct, the app id would be exposed.
pub struct Client {
    config: ClientConfig,
    session: OnceLock<reqwest::Client>,
}

impl Client {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(app_id))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            session: OnceLock::new(),
        }
    }

    /// Use an existing session instead of creating one.
    pub fn with_session(config: ClientConfig, session: reqwest::Client) -> Self {
        Self {
            config,
            session: OnceLock::from(session),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The HTTP session, created if absent.
    pub fn session(&self) -> Result<&reqwest::Client> {
        if let Some(session) = self.session.get() {
            return Ok(session);
        }

        tracing::debug!("Creating HTTP session");
        let session = reqwest::Client::builder()
            .user_agent(&self.config.user_agent)
            .build()?;
        Ok(self.session.get_or_init(|| session))
    }

    /// Query with no extra parameters.
    pub async fn query(&self, input: &str) -> Result<QueryResult> {
        self.send(&Query::new(input)).await
    }

    /// Issue a single GET for `query` and parse the response.
    pub async fn send(&self, query: &Query) -> Result<QueryResult> {
        let url = Url::parse_with_params(
            &self.config.endpoint,
            query.to_pairs(&self.config.app_id),
        )?;

        tracing::debug!(input = query.input(), endpoint = %self.config.endpoint, "Sending query");
        let response = self.session()?.get(url).send().await?.error_for_status()?;
        tracing::debug!(status = %response.status(), "Received response");

        check_content_type(response.headers())?;

        let bytes = response.bytes().await?;
        let text = String::from_utf8(bytes.to_vec())?;
        QueryResult::parse(&text)
    }
}

/// Require the exact XML content type before any parsing.
pub fn check_content_type(headers: &HeaderMap) -> Result<()> {
    let actual = headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    if actual.as_deref() == Some(EXPECTED_CONTENT_TYPE) {
        return Ok(());
    }

    tracing::warn!(
        expected = EXPECTED_CONTENT_TYPE,
        actual = actual.as_deref().unwrap_or("<none>"),
        "Unexpected content type"
    );
    Err(AlphaError::UnexpectedContentType {
        expected: EXPECTED_CONTENT_TYPE,
        actual,
    })
}

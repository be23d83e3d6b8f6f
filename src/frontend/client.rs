// src/frontend/client.rs

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::frontend::notice::Notice;
use crate::responses::payload::STATUS_NO_RESULTS;

const USER_AGENT: &str = concat!("listing-frontend/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid backend URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("HTTP client setup failed: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Why a call produced no usable body. Every variant maps to a notice
/// for the user; none of them is a program fault.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// 404 carrying the backend's `no_results` status.
    NoResults(String),
    NotFound,
    ServerError,
    Unexpected { status: u16, body: String },
    Transport(String),
    InvalidBody(String),
}

impl Failure {
    pub fn notice(&self) -> Notice {
        match self {
            Failure::NoResults(_) => Notice::info("No listings found for the selected filters."),
            Failure::NotFound => Notice::warning("Resource not found."),
            Failure::ServerError => Notice::error("Internal server error."),
            Failure::Unexpected { status, body } => Notice::error(format!("Error: {status} - {body}")),
            Failure::Transport(msg) => Notice::error(format!("Connection error: {msg}")),
            Failure::InvalidBody(msg) => Notice::error(format!("Invalid response from server: {msg}")),
        }
    }
}

/// Result of one backend call: the parsed JSON body, or why there is none.
pub type ApiOutcome = Result<Value, Failure>;

/// Blocking client for the query service. One attempt per call, no retries.
pub struct ApiClient {
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        // A trailing slash makes `join` append rather than replace the last segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&normalized).map_err(|source| ClientError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET and DELETE send `params` as the query string; POST and PUT send
    /// `data` as a JSON body.
    pub fn request(
        &self,
        endpoint: &str,
        method: Method,
        params: &[(&str, String)],
        data: Option<&Value>,
    ) -> ApiOutcome {
        let url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| Failure::Transport(e.to_string()))?;

        let builder = match method {
            Method::Get => self.client.get(url).query(params),
            Method::Delete => self.client.delete(url).query(params),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
        };

        // Only write methods carry a body, and only when one was given.
        let builder = match (method, data) {
            (Method::Post | Method::Put, Some(d)) => builder.json(d),
            _ => builder,
        };

        let resp = builder.send().map_err(|e| {
            log::warn!("Backend request to {endpoint} failed: {e}");
            Failure::Transport(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().map_err(|e| Failure::Transport(e.to_string()))?;

        classify(status, &text)
    }
}

/// Map a status code and raw body to an outcome.
pub fn classify(status: StatusCode, body: &str) -> ApiOutcome {
    match status {
        StatusCode::OK => serde_json::from_str(body).map_err(|e| Failure::InvalidBody(e.to_string())),
        StatusCode::NOT_FOUND => match no_results_message(body) {
            Some(message) => Err(Failure::NoResults(message)),
            None => Err(Failure::NotFound),
        },
        StatusCode::INTERNAL_SERVER_ERROR => Err(Failure::ServerError),
        other => Err(Failure::Unexpected {
            status: other.as_u16(),
            body: body.to_string(),
        }),
    }
}

fn no_results_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    if value.get("status")?.as_str()? != STATUS_NO_RESULTS {
        return None;
    }

    Some(
        value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    )
}

//! HTTP fetch for the payload URL.
//!
//! Builds a `reqwest::Client` with a bounded timeout and a stable User-Agent,
//! performs the single GET the relay contract allows, and decodes the body
//! into the payload list. No auth, no extra headers, no retries.

use std::env;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::RelayError;

/// Thin wrapper around a configured `reqwest::Client` for payload fetches.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
}

impl RelayClient {
    /// Construct a client with the given total-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "conrelay/{}; {}",
                env!("CARGO_PKG_VERSION"),
                env::consts::OS
            ))
            .build()
            .map_err(|source| RelayError::ClientBuild { source })?;
        Ok(Self { http })
    }

    /// GET the payload URL and return the decoded connector list.
    ///
    /// Transport failures and non-success statuses surface as
    /// [`RelayError::Fetch`]; a body that is not valid JSON surfaces as
    /// [`RelayError::PayloadParse`]; valid JSON that is not a list surfaces
    /// as [`RelayError::Shape`].
    pub async fn fetch_payload(&self, url: &str) -> Result<Vec<Value>, RelayError> {
        let parsed = Url::parse(url).map_err(|source| RelayError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        debug!(%parsed, "fetching payload");
        let response = self
            .http
            .get(parsed)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| RelayError::Fetch {
                url: url.to_string(),
                source,
            })?;

        debug!(status = %response.status(), "payload response received");
        let body = response.text().await.map_err(|source| RelayError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let payload: Value =
            serde_json::from_str(&body).map_err(|source| RelayError::PayloadParse {
                url: url.to_string(),
                source,
            })?;

        match payload {
            Value::Array(connectors) => Ok(connectors),
            _ => Err(RelayError::Shape),
        }
    }
}

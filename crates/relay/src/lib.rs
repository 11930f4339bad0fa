//! Payload relay pipeline.
//!
//! This crate implements the one contract behind the `conrelay` binary, used
//! as a Terraform external data source. It focuses on:
//!
//! - Decoding the request object Terraform writes to standard input
//! - Extracting the payload URL from a configurable field
//! - Performing a single bounded HTTP GET for the payload
//! - Validating that the payload is a list of connector configurations
//! - Re-encoding the list into the flat string map Terraform expects
//!
//! The primary entry point is [`relay`]. Configure it through
//! [`RelayOptions`] and hand it the raw stdin text:
//!
//! ```ignore
//! use conrelay_core::{relay, RelayOptions};
//!
//! # async fn run() -> Result<(), conrelay_core::RelayError> {
//! let response = relay(r#"{"payload_link": "https://example.com/p.json"}"#,
//!                      &RelayOptions::default()).await?;
//! println!("{}", serde_json::to_string(&response).unwrap());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

mod error;
mod fetch;
mod request;
mod response;

pub use error::RelayError;
pub use fetch::RelayClient;
pub use request::extract_url;
pub use response::RelayResponse;

/// Name of the request field holding the payload URL when none is configured.
pub const DEFAULT_URL_KEY: &str = "payload_link";

/// Bound on the payload fetch when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-invocation configuration for the relay.
#[derive(Debug, Clone)]
pub struct RelayOptions {
    /// Request field holding the payload URL. Known deployments use
    /// `payload_link` or `payload_url`.
    pub url_key: String,
    /// Total-request timeout applied to the HTTP GET.
    pub timeout: Duration,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self {
            url_key: DEFAULT_URL_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Run the full relay pipeline against the request text read from stdin.
///
/// Any error is terminal for the caller; there is no retry and no partial
/// output. The HTTP client lives only for the duration of this call.
pub async fn relay(input: &str, options: &RelayOptions) -> Result<RelayResponse, RelayError> {
    let url = request::extract_url(input, &options.url_key)?;
    let client = fetch::RelayClient::new(options.timeout)?;
    let connectors = client.fetch_payload(&url).await?;
    RelayResponse::from_payload(&connectors)
}

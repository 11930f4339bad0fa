//! Error taxonomy for the relay pipeline.
//!
//! Every failure the relay can hit maps to one variant here, and every
//! variant is terminal for the calling process: the binary prints the error
//! chain to stderr and exits non-zero. Underlying reqwest/serde_json errors
//! are kept as sources so the chain carries the transport or parser detail.

use thiserror::Error;

/// Failures surfaced by the relay pipeline.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Standard input was not valid JSON.
    #[error("failed to parse input as JSON")]
    InputParse {
        #[source]
        source: serde_json::Error,
    },

    /// Standard input decoded to something other than a JSON object.
    #[error("input must be a JSON object")]
    InputObject,

    /// The configured URL field was absent, empty, or not a string.
    #[error("{key} not provided in input")]
    MissingField { key: String },

    /// The URL field did not hold a parseable URL.
    #[error("invalid payload URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Transport failure or non-success HTTP status while fetching the payload.
    #[error("error fetching payload from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("error parsing payload from {url}")]
    PayloadParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded payload was valid JSON but not a list.
    #[error("payload from URL must contain a list of connector configurations")]
    Shape,

    /// The response object could not be re-encoded as JSON.
    #[error("failed to encode response")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

//! Response construction for the external data source protocol.
//!
//! Terraform's external data source only accepts a flat string map, so the
//! connector list is re-serialized to text and embedded as one string value
//! under `connectors`, never as nested JSON.

use serde::Serialize;
use serde_json::Value;

use crate::error::RelayError;

/// The object written to standard output on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayResponse {
    /// The fetched connector list, JSON-encoded as a single string.
    pub connectors: String,
}

impl RelayResponse {
    /// Re-encode the validated connector list into the response shape.
    pub fn from_payload(connectors: &[Value]) -> Result<Self, RelayError> {
        let connectors = serde_json::to_string(connectors)
            .map_err(|source| RelayError::Encode { source })?;
        Ok(Self { connectors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connectors_field_round_trips_the_payload() {
        let payload = vec![json!({"a": 1})];
        let response = RelayResponse::from_payload(&payload).unwrap();
        let decoded: Vec<Value> = serde_json::from_str(&response.connectors).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn empty_list_encodes_as_empty_array_string() {
        let response = RelayResponse::from_payload(&[]).unwrap();
        assert_eq!(response.connectors, "[]");
    }

    #[test]
    fn response_serializes_with_connectors_as_a_string_value() {
        let payload = vec![json!({"name": "oci-logging"})];
        let response = RelayResponse::from_payload(&payload).unwrap();
        let out = serde_json::to_value(&response).unwrap();
        assert!(out.get("connectors").unwrap().is_string());
    }
}

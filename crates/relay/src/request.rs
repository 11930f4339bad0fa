//! Request parsing: decode the stdin JSON object and pull out the payload URL.

use serde_json::Value;

use crate::error::RelayError;

/// Decode the request read from standard input and extract the payload URL
/// stored under `url_key`.
///
/// The field must exist, be a string, and be non-empty; anything else is
/// reported as the field not being provided, matching what callers see when
/// the Terraform configuration forgets to wire the attribute through.
pub fn extract_url(input: &str, url_key: &str) -> Result<String, RelayError> {
    let request: Value =
        serde_json::from_str(input).map_err(|source| RelayError::InputParse { source })?;

    let Value::Object(fields) = request else {
        return Err(RelayError::InputObject);
    };

    match fields.get(url_key) {
        Some(Value::String(url)) if !url.is_empty() => Ok(url.clone()),
        _ => Err(RelayError::MissingField {
            key: url_key.to_string(),
        }),
    }
}

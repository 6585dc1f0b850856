use serde::{Deserialize, Serialize};

/// Body of the POST to the validation endpoint.
///
/// Both fields carry the raw original buffer text, never a re-serialized
/// form, so the remote service reports positions against exactly what the
/// user typed. Field names follow the service contract.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateRequest {
    /// Serialized text of the schema document
    pub schema: String,
    /// Serialized text of the data document
    pub json: String,
}

impl ValidateRequest {
    /// Builds a request from the raw buffer contents
    pub fn from_raw_text(schema: &str, json: &str) -> Self {
        ValidateRequest {
            schema: schema.to_string(),
            json: json.to_string(),
        }
    }
}

/// Successful response from the validation endpoint.
///
/// `errors` is kept as a loose value on purpose: the payload's shape is only
/// weakly guaranteed and normalization tolerates anything it may hold.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_the_contract_field_names() {
        let request = ValidateRequest::from_raw_text("{\"type\":\"object\"}", "{}");
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({"schema": "{\"type\":\"object\"}", "json": "{}"})
        );
    }

    #[test]
    fn response_without_errors_deserializes() {
        let response: ValidateResponse = serde_json::from_str("{\"valid\": true}").unwrap();
        assert!(response.valid);
        assert_eq!(response.errors, None);
    }

    #[test]
    fn loose_error_payloads_are_preserved_verbatim() {
        let response: ValidateResponse =
            serde_json::from_str("{\"valid\": false, \"errors\": \"oops\"}").unwrap();
        assert_eq!(response.errors, Some(json!("oops")));
    }
}

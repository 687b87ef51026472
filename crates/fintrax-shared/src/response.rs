//! Standardized API response envelope.
//!
//! Every response, success or failure, uses the same shape:
//! `{ "status": <http code>, "message": <text>, "data": ..., "error": ... }`
//! with `data` and `error` omitted when absent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 201,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Envelope with no payload, for deletions and the like.
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Failure envelope, optionally carrying error details.
    pub fn failure(
        status: u16,
        message: impl Into<String>,
        error: Option<serde_json::Value>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::ok("Fetched", json!({"count": 3}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"status": 200, "message": "Fetched", "data": {"count": 3}})
        );
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let response = ApiResponse::failure(429, "Too many requests", None);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": 429, "message": "Too many requests"}));
    }

    #[test]
    fn test_failure_envelope_carries_error_details() {
        let response = ApiResponse::failure(400, "Invalid request", Some(json!("missing email")));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], json!("missing email"));
    }
}

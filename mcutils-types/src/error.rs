use serde::{Deserialize, Serialize};

/// The uniform failure body of the API.
///
/// The remote service answers every non-success status with this shape. The `code` mirrors the
/// HTTP status in most cases, but the client never interprets it, so any kind of error is whatever
/// the service states here.
#[derive(thiserror::Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[error("api error {code}: {message}")]
pub struct ErrorResponse {
    /// The machine-readable error code.
    pub code: u16,
    /// The human-readable description of the failure.
    pub message: String,
    /// The time at which the error was produced, as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The error for string representations that do not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not name a known server platform.
    #[error("unknown server platform: {0}")]
    UnknownPlatform(String),

    /// The string does not name a known image format.
    #[error("unknown image format: {0}")]
    UnknownImageFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_response() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"code": 404, "message": "Player not found"}"#).unwrap();
        assert_eq!(error.code, 404);
        assert_eq!(error.message, "Player not found");
        assert_eq!(error.timestamp, None);
        assert_eq!(error.to_string(), "api error 404: Player not found");
    }

    #[test]
    fn decode_error_response_with_timestamp() {
        let error: ErrorResponse = serde_json::from_str(
            r#"{"code": 429, "message": "slow down", "timestamp": "2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(error.timestamp.as_deref(), Some("2025-01-01T00:00:00Z"));
    }
}

//! Shared HTTP error body.

use serde::Serialize;

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn invalid_category(message: impl Into<String>) -> Self {
        Self::new("invalid_category", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_error_and_message() {
        let body = serde_json::to_value(ErrorResponse::not_found("no such session")).unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "no such session");
    }
}

//! API error types and JSON error response formatting.
//!
//! Every failure is rendered as `{"error": <message>, "code": <code>}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use fxchat_chat::ChatError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code (e.g., "bad_request").
    pub code: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid input.
    BadRequest(String),
    /// 500 Internal Server Error - upstream failure or unexpected error.
    Internal(String),
}

impl ApiError {
    /// An unexpected failure, prefixed the same way for every endpoint.
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        ApiError::Internal(format!("An unexpected error occurred: {}", detail))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::unexpected(rejection.body_text())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => ApiError::BadRequest("Empty message".to_string()),
            other => ApiError::unexpected(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let resp = ApiError::BadRequest("Amount must be greater than 0".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Amount must be greater than 0");
        assert_eq!(json["code"], "bad_request");
    }

    #[tokio::test]
    async fn test_internal_response() {
        let resp = ApiError::unexpected("boom").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "An unexpected error occurred: boom");
        assert_eq!(json["code"], "internal_error");
    }

    #[test]
    fn test_from_chat_error() {
        match ApiError::from(ChatError::EmptyMessage) {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Empty message"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
        match ApiError::from(ChatError::LlmError("down".to_string())) {
            ApiError::Internal(msg) => assert!(msg.contains("LLM error: down")),
            other => panic!("Expected Internal, got {:?}", other),
        }
    }
}

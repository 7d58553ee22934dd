//! Error type for the chat route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced while answering one chat turn.
///
/// The classifier and renderers never fail; everything here comes from
/// the request body or the outbound call to the query backend, and all
/// of it collapses to a 500 with a JSON `{"error": ...}` body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to reach query backend: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Error detail reported by the backend itself.
    #[error("{0}")]
    Backend(String),

    #[error("invalid response format from backend")]
    InvalidResponse,

    #[error("chat request contained no messages")]
    EmptyChat,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("chat request failed: {self}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_failure_becomes_a_500_with_a_json_error_body() {
        let response = AppError::EmptyChat.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "chat request contained no messages");
    }

    #[tokio::test]
    async fn backend_detail_is_surfaced_verbatim() {
        let response = AppError::Backend("Question not recognized".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Question not recognized");
    }
}

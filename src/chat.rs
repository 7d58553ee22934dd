//! The chat API: forwards one question to the query backend and wraps
//! the formatted answer in a server-sent-events envelope.
//!
//! This is not real streaming. The backend answers each question in one
//! piece; the whole answer is wrapped as a single completion chunk
//! followed by the `[DONE]` marker, which is enough for the chat page
//! to consume it through the usual SSE framing.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::Response,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app::AppState;
use crate::error::AppError;
use crate::format::format_table_content;
use crate::html::render_payload;

/// One message in the chat transcript.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Reply from the query backend: `response` on success, `detail` on
/// failure. Both optional so either shape deserializes.
#[derive(Debug, Deserialize)]
struct QueryReply {
    response: Option<String>,
    detail: Option<String>,
}

/// Handle one chat turn
///
/// Takes the latest message, forwards it to the query backend, runs
/// the answer through the table formatter, and returns the rendered
/// content as a single-chunk event stream.
///
/// # Arguments
/// * `state` - Application state holding the backend URL and HTTP client
/// * `request` - The chat transcript; only the latest message is sent
///
/// # Returns
/// * `Result<Response, AppError>` - The SSE response, or an error that
///   renders as a 500 with a JSON body
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let question = latest_question(&request)?.to_string();

    log::info!("forwarding query to {}/query", state.config.api_url);

    let reply = state
        .http
        .post(format!("{}/query", state.config.api_url))
        .json(&json!({ "query": question }))
        .send()
        .await?;

    let status = reply.status();
    let body: QueryReply = reply.json().await?;

    if !status.is_success() {
        return Err(AppError::Backend(body.detail.unwrap_or_else(|| {
            "Failed to fetch from query backend".to_string()
        })));
    }

    let answer = body.response.ok_or(AppError::InvalidResponse)?;
    let content = render_payload(&format_table_content(&answer));

    let stream = sse_envelope(&content, Utc::now().timestamp_millis());

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(axum::body::Body::from(stream))
        .unwrap())
}

/// Pick the question for this turn: the latest message in the
/// transcript. An empty transcript is an error.
fn latest_question(request: &ChatRequest) -> Result<&str, AppError> {
    request
        .messages
        .last()
        .map(|message| message.content.as_str())
        .ok_or(AppError::EmptyChat)
}

/// Build the two-frame SSE body: one chat.completion.chunk carrying
/// the whole answer, then the `[DONE]` marker.
fn sse_envelope(content: &str, millis: i64) -> String {
    let chunk = json!({
        "id": format!("chatcmpl-{millis}"),
        "object": "chat.completion.chunk",
        "created": millis,
        "model": "gpt-4",
        "choices": [{
            "delta": { "content": content },
            "index": 0,
            "finish_reason": null,
        }],
    });

    format!("data: {chunk}\n\ndata: [DONE]\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_transcript_is_rejected() {
        let request: ChatRequest = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert!(matches!(latest_question(&request), Err(AppError::EmptyChat)));
    }

    #[test]
    fn latest_message_is_the_question() {
        let request: ChatRequest = serde_json::from_str(
            r#"{"messages": [
                {"role": "user", "content": "first question"},
                {"role": "assistant", "content": "first answer"},
                {"role": "user", "content": "second question"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(latest_question(&request).unwrap(), "second question");
    }

    #[test]
    fn envelope_carries_the_content_in_one_chunk() {
        let body = sse_envelope("Q10 exists in the database.", 1_700_000_000_000);

        let mut frames = body.split("\n\n").filter(|frame| !frame.is_empty());
        let first = frames.next().unwrap();
        let second = frames.next().unwrap();
        assert_eq!(frames.next(), None);

        assert_eq!(second, "data: [DONE]");

        let chunk: serde_json::Value =
            serde_json::from_str(first.strip_prefix("data: ").unwrap()).unwrap();
        assert_eq!(chunk["id"], "chatcmpl-1700000000000");
        assert_eq!(chunk["object"], "chat.completion.chunk");
        assert_eq!(chunk["created"], 1_700_000_000_000_i64);
        assert_eq!(chunk["model"], "gpt-4");
        assert_eq!(
            chunk["choices"][0]["delta"]["content"],
            "Q10 exists in the database."
        );
        assert_eq!(chunk["choices"][0]["index"], 0);
        assert!(chunk["choices"][0]["finish_reason"].is_null());
    }

    #[test]
    fn envelope_survives_content_with_newlines_and_quotes() {
        // Table markup and quoted text must stay inside the JSON frame.
        let body = sse_envelope("line one\nline \"two\"", 1);

        let first = body.split("\n\n").next().unwrap();
        let chunk: serde_json::Value =
            serde_json::from_str(first.strip_prefix("data: ").unwrap()).unwrap();
        assert_eq!(chunk["choices"][0]["delta"]["content"], "line one\nline \"two\"");
    }
}

//! The style-check proxy endpoint.
//!
//! Each request runs a fixed validation sequence, makes at most one upstream
//! call, and always produces a response — the first failed precondition
//! short-circuits the rest.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::extract::parse_result;
use crate::rules::{build_system_prompt, ContentType};
use crate::server::AppState;
use crate::upstream::UpstreamError;

/// Longest accepted input, in characters.
pub const MAX_INPUT_LENGTH: usize = 2000;

/// The inbound request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleCheckRequest {
    #[serde(default)]
    pub content_type: String,

    #[serde(default)]
    pub text: String,
}

/// One edit the service made, with the rule it applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub original: String,
    pub revised: String,
    pub rule: String,
    pub explanation: String,
}

/// The normalized reply returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleCheckResult {
    pub revised: String,
    pub changes: Vec<Change>,
    pub summary: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// `POST /api/style-check`.
pub async fn style_check(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request: StyleCheckRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return reject(StatusCode::BAD_REQUEST, "Invalid JSON in request body"),
    };

    let Some(content_type) = ContentType::parse(&request.content_type) else {
        return reject(
            StatusCode::BAD_REQUEST,
            &format!("Invalid content type. Use: {}", ContentType::valid_values()),
        );
    };

    let text = request.text.trim();
    if text.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "Text is required");
    }
    if request.text.chars().count() > MAX_INPUT_LENGTH {
        return reject(
            StatusCode::BAD_REQUEST,
            &format!("Text too long. Maximum {MAX_INPUT_LENGTH} characters."),
        );
    }

    let Some(api_key) = std::env::var(&state.api_key_env)
        .ok()
        .filter(|key| !key.is_empty())
    else {
        return reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!(
                "API key not configured. Set {} in the server environment.",
                state.api_key_env
            ),
        );
    };

    let system = build_system_prompt(content_type);
    let reply = match state
        .upstream
        .request_revision(&api_key, &system, content_type.as_str(), text)
        .await
    {
        Ok(reply) => reply,
        Err(UpstreamError::Status(_)) => {
            return reject(
                StatusCode::BAD_GATEWAY,
                "Style check service is temporarily unavailable. Try again.",
            );
        }
        Err(UpstreamError::Empty) => {
            return reject(
                StatusCode::BAD_GATEWAY,
                "Received empty response from the style checker.",
            );
        }
        Err(error @ UpstreamError::Transport(_)) => {
            tracing::error!("style check request failed: {error}");
            return reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred. Try again.",
            );
        }
    };

    match parse_result(&reply) {
        Some(result) => with_cors((StatusCode::OK, Json(result)).into_response()),
        None => reject(
            StatusCode::BAD_GATEWAY,
            "Style checker returned an unexpected format. Try again.",
        ),
    }
}

/// Build a JSON error response with the permissive CORS header.
pub(crate) fn reject(status: StatusCode, message: &str) -> Response {
    with_cors(
        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response(),
    )
}

pub(crate) fn with_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

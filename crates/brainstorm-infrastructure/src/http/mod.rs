//! HTTP adapters for both backends.
//!
//! Each client is a thin request/response mapping: build the request, send
//! it once, translate the status code into a [`BrainstormError`], decode the
//! JSON body. No retries and no client-side timeouts.

mod app_api;
mod brainstorm_api;
mod dto;

pub use app_api::AppApiClient;
pub use brainstorm_api::BrainstormApiClient;

use brainstorm_core::error::{BrainstormError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// What a request was about, for error messages.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Target<'a> {
    pub entity: &'static str,
    pub id: &'a str,
}

impl<'a> Target<'a> {
    pub(crate) fn new(entity: &'static str, id: &'a str) -> Self {
        Self { entity, id }
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> BrainstormError {
    BrainstormError::transport(format!("request failed: {err}"))
}

/// Passes successful responses through and maps the rest to errors.
pub(crate) async fn ensure_success(response: Response, target: Target<'_>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "failed to read error body".to_string());
    Err(map_status(status, body, target))
}

fn map_status(status: StatusCode, body: String, target: Target<'_>) -> BrainstormError {
    let message = extract_message(&body);
    match status {
        StatusCode::UNAUTHORIZED => BrainstormError::unauthorized(message),
        StatusCode::FORBIDDEN => BrainstormError::forbidden(message),
        StatusCode::NOT_FOUND => BrainstormError::not_found(target.entity, target.id),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            BrainstormError::validation(message)
        }
        _ => BrainstormError::http(status.as_u16(), message),
    }
}

/// Pulls a human message out of the common error body shapes
/// (`{"detail": ..}`, `{"message": ..}`, `{"error": ..}`), else the raw body.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.trim().to_string()
}

pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| BrainstormError::Serialization {
            format: "JSON".to_string(),
            message: format!("failed to decode response body: {err}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_status_variants() {
        let target = Target::new("idea", "9");
        assert!(map_status(StatusCode::UNAUTHORIZED, String::new(), target).is_unauthorized());
        assert_eq!(
            map_status(StatusCode::NOT_FOUND, String::new(), target),
            BrainstormError::not_found("idea", "9")
        );
        assert!(map_status(StatusCode::BAD_REQUEST, "bad".into(), target).is_validation());
        assert_eq!(
            map_status(StatusCode::BAD_GATEWAY, "upstream".into(), target),
            BrainstormError::http(502, "upstream")
        );
    }

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(r#"{"detail": "session missing"}"#), "session missing");
        assert_eq!(extract_message(r#"{"message": "nope", "status": 400}"#), "nope");
        assert_eq!(extract_message("  plain text \n"), "plain text");
    }
}

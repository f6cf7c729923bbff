//! Error normalization middleware
//!
//! Handler errors already leave as `{message, status}`. Framework-generated
//! failures (405, body limits, path rejections) do not, so this layer
//! rewrites any non-JSON error response into the same shape.

use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::body::ErrorBody;

use crate::presentation::extract::is_json_content_type;

// Framework error bodies are short plain text.
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

pub async fn normalize_errors(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    if is_json_content_type(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, MAX_ERROR_BODY_BYTES)
        .await
        .unwrap_or_default();
    let text = String::from_utf8_lossy(&bytes).trim().to_string();

    let error_body = if text.is_empty() {
        ErrorBody::from_status(status.as_u16())
    } else {
        ErrorBody::new(text, status.as_u16())
    };

    tracing::debug!(
        status = error_body.status,
        message = %error_body.message,
        "Normalized error response"
    );

    let mut headers = parts.headers;
    headers.remove(header::CONTENT_TYPE);
    headers.remove(header::CONTENT_LENGTH);

    let mut normalized = error_body.into_response();
    // Repeated headers (`Vary`, `Set-Cookie`) keep every value.
    for (name, value) in headers.iter() {
        normalized.headers_mut().append(name.clone(), value.clone());
    }
    normalized
}

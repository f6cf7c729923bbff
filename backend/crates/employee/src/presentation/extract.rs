//! JSON body extraction
//!
//! Unlike `axum::Json`, [`JsonBody`] checks emptiness before the content
//! type, treats `{}` and `null` as empty, and answers a non-JSON content
//! type with 422 instead of 415.

use crate::error::EmployeeError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validated JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EmployeeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                EmployeeError::PayloadTooLarge
            } else {
                EmployeeError::InvalidBody(rejection.body_text())
            }
        })?;

        parse_body(&bytes, json_content_type).map(JsonBody)
    }
}

/// Validation order: empty body (400), content type (422), JSON shape (400)
pub fn parse_body<T>(bytes: &[u8], json_content_type: bool) -> Result<T, EmployeeError>
where
    T: DeserializeOwned,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(EmployeeError::EmptyBody);
    }

    // `{}` and `null` count as empty whatever the declared content type.
    let parsed = serde_json::from_slice::<Value>(bytes);
    if matches!(&parsed, Ok(value) if is_empty_document(value)) {
        return Err(EmployeeError::EmptyBody);
    }

    if !json_content_type {
        return Err(EmployeeError::UnsupportedContentType);
    }

    let value = parsed.map_err(|e| EmployeeError::InvalidBody(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| EmployeeError::InvalidBody(e.to_string()))
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// `application/json`, optionally with parameters, or any `application/*+json`
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

//! Error Body - the `{message, status}` wire shape
//!
//! Every failure the service answers with is serialized as an [`ErrorBody`].

use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// Status used when a failure does not carry one.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

fn default_status() -> u16 {
    DEFAULT_ERROR_STATUS
}

/// Uniform error payload
///
/// ## Examples
/// ```rust
/// use kernel::error::body::ErrorBody;
///
/// let body: ErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
/// assert_eq!(body.status, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default = "default_status")]
    pub status: u16,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Body for a bare status, using its reason phrase as the message.
    pub fn from_status(status: u16) -> Self {
        let message = ErrorKind::from_status_code(status)
            .map(|kind| kind.as_str())
            .unwrap_or("Request failed");
        Self::new(message, status)
    }
}

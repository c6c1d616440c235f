//! # Response Envelope
//!
//! Every response — success or failure — is the same wire object:
//!
//! ```json
//! {"message": "...", "code": 200, "data": ...}
//! ```
//!
//! `data` is omitted on pure-message responses. The envelope is produced
//! exactly once per request; handlers return it (or an error that renders
//! as one) and never write to the response directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Human-readable outcome summary.
    pub message: String,
    /// HTTP-style status code, duplicated into the body for clients that
    /// only look at the payload.
    pub code: u16,
    /// The entity or collection, when the operation produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Envelope carrying an entity or collection.
    pub fn with_data(code: StatusCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            code: code.as_u16(),
            data: Some(data),
        }
    }

    /// Pure-message envelope.
    pub fn message_only(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.as_u16(),
            data: None,
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

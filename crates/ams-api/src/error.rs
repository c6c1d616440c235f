//! # API Error Type
//!
//! Single error type for the request pipeline, implementing
//! [`IntoResponse`] as a message-only [`Envelope`]. Every failure path
//! terminates the request with exactly one envelope; nothing is retried.
//!
//! Status mapping: decode, validation, identifier, and generic store
//! failures are 400 with the underlying message surfaced verbatim (the
//! legacy contract); a missing record and an unknown resource segment are
//! 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use ams_core::{CodecError, IdentifierError, ValidationError};
use ams_store::StoreError;

use crate::envelope::Envelope;
use crate::registry::UnknownResource;

/// Anything that can abort a pipeline operation.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request body could not be decoded into the resource's entity.
    #[error(transparent)]
    Decode(#[from] CodecError),

    /// A field-level constraint was violated. The message names the field
    /// and the rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The path identifier failed the defensive filter.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// The path named a resource the registry does not know.
    #[error(transparent)]
    UnknownResource(#[from] UnknownResource),

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) | Self::Identifier(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownResource(_) => StatusCode::NOT_FOUND,
            Self::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Store(err) = &self {
            if !matches!(err, StoreError::NotFound { .. } | StoreError::InvalidId(_)) {
                tracing::warn!(error = %err, "store operation failed");
            }
        }
        Envelope::message_only(self.status(), self.to_string()).into_response()
    }
}

//! # Error Types
//!
//! Structured errors for the core layer, built with `thiserror`.
//! Every failure that can reach a client carries a human-readable message;
//! the API layer decides status codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Normalized report of a single field-level constraint violation.
///
/// Exactly one of these is produced per failed validation call — the first
/// violation encountered in field declaration order. The field names and
/// casing match the legacy wire shape consumed by existing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Dotted entity-qualified field path, e.g. `Company.Email`.
    pub namespace: String,
    /// Wire name of the offending field.
    pub field: String,
    /// Struct-qualified field path; identical to `namespace` here (no
    /// alternate tag-name mapping is registered).
    pub struct_namespace: String,
    /// Struct field name; identical to `field`.
    pub struct_field: String,
    /// Tag of the violated rule, e.g. `required`, `max`, `email`.
    pub tag: String,
    /// Underlying rule tag; identical to `tag` (no tag aliasing).
    pub actual_tag: String,
    /// Kind of the field's value, e.g. `string`, `uint`, `time`.
    pub kind: String,
    /// Type of the field's value; identical to `kind`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// The offending value, rendered as a string.
    pub value: String,
    /// Rule parameter, e.g. the length limit for `max`.
    pub param: String,
    /// Human-readable summary naming the field and the violated rule.
    pub message: String,
}

/// Failure to decode a request body into an entity, or to re-encode one.
///
/// Decode failures are always client errors: the payload was malformed or
/// carried values of the wrong shape for the target entity.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The body was not valid JSON.
    #[error("malformed request body: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The body was valid JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A field carried a value incompatible with the entity's schema.
    #[error("invalid field value: {0}")]
    Shape(#[source] serde_json::Error),

    /// Re-encoding an entity failed. Entities are plain data records, so
    /// this indicates a programming error rather than bad input.
    #[error("entity encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A path-supplied identifier token failed the defensive filter.
///
/// Malformed client-side tokens (`"null"`, `"undefined"`, `"NaN"`, `"0"`,
/// empty or whitespace-only strings) are rejected before any Store call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("id is required")]
pub struct IdentifierError;

//! # Identifier Token Filter
//!
//! Defensive filter for path-supplied record identifiers. JavaScript clients
//! routinely interpolate absent values into URLs, producing tokens like
//! `"null"`, `"undefined"`, or `"NaN"`; these must never reach the Store.

use crate::error::IdentifierError;

/// Tokens produced by broken client-side interpolation.
const REJECTED_TOKENS: &[&str] = &["0", "null", "undefined", "NaN"];

/// Validate a raw path identifier, returning it unchanged when acceptable.
///
/// Rejects empty and whitespace-only strings and the known garbage tokens.
/// Anything else passes through verbatim — whether it names an existing
/// record is the Store's call.
pub fn require_identifier(raw: &str) -> Result<&str, IdentifierError> {
    if raw.trim().is_empty() || REJECTED_TOKENS.contains(&raw) {
        return Err(IdentifierError);
    }
    Ok(raw)
}

//! # ams-core — Foundational Types for the AMS Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Entity schemas are data, not reflection.** Every entity declares an
//!    explicit, ordered list of field accessors and rules ([`FieldSpec`]).
//!    Validation walks that list; there is no runtime type introspection.
//!
//! 2. **First violation only.** [`validate`] reports the first failing
//!    constraint in field declaration order as a single, fully-populated
//!    [`ValidationError`] — the wire shape the legacy clients expect.
//!
//! 3. **Tolerant decoding.** The codec overlays a payload onto a zero-valued
//!    instance, so partial objects are legal and absent fields keep their
//!    zero values. The same merge primitive drives partial updates.

pub mod codec;
pub mod error;
pub mod ident;
pub mod model;
pub mod validate;

pub use error::{CodecError, IdentifierError, ValidationError};
pub use ident::require_identifier;
pub use validate::{validate, validate_except, FieldSpec, FieldValue, Rule, Validatable};

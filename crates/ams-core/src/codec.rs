//! # Entity Codec
//!
//! Conversion between wire bytes and entity values, independent of any
//! concrete entity type at the call site.
//!
//! Decoding is **tolerant of partial objects**: the payload is overlaid onto
//! a base value (a zero-valued instance for creates, the stored record for
//! updates), so fields absent from the payload keep the base's values. The
//! merged object then round-trips through the concrete entity type, which
//! type-checks the supplied fields and canonicalizes the field set — unknown
//! payload keys are dropped, declared-but-absent keys appear with their zero
//! values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CodecError;

/// Decode a payload into a fresh, zero-valued entity.
///
/// Missing fields keep the zero value; unknown fields are ignored.
pub fn decode<T>(bytes: &[u8]) -> Result<T, CodecError>
where
    T: Serialize + DeserializeOwned + Default,
{
    let base = encode(&T::default())?;
    decode_merged(&base, bytes)
}

/// Decode a payload overlaid onto an existing entity value.
///
/// The merge is shallow: each top-level field present in the payload
/// replaces the base's field wholesale; fields absent from the payload are
/// untouched. This is the primitive behind partial updates.
pub fn decode_merged<T>(base: &Value, bytes: &[u8]) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    let patch: Value = serde_json::from_slice(bytes).map_err(CodecError::Malformed)?;
    let Value::Object(patch) = patch else {
        return Err(CodecError::NotAnObject);
    };

    let mut merged = match base {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };
    for (key, value) in patch {
        merged.insert(key, value);
    }

    serde_json::from_value(Value::Object(merged)).map_err(CodecError::Shape)
}

/// Encode an entity as a JSON value.
pub fn encode<T: Serialize>(entity: &T) -> Result<Value, CodecError> {
    serde_json::to_value(entity).map_err(CodecError::Encode)
}

/// Encode an entity as wire bytes.
pub fn encode_bytes<T: Serialize>(entity: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(entity).map_err(CodecError::Encode)
}

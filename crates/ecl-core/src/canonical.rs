//! # Canonical Serialization
//!
//! [`CanonicalBytes`] is the only input accepted by the digest functions in
//! [`crate::digest`]. It is produced by serializing to a JSON value, rejecting
//! floats, and emitting RFC 8785 (JSON Canonicalization Scheme) bytes via
//! `serde_jcs`: sorted keys, compact separators, no insignificant whitespace.
//!
//! Generated structured documents are canonicalized before hashing so that
//! a regeneration that changes only field order or whitespace yields the
//! same digest, and indexers are not asked to re-crawl unchanged pages.
//!
//! Floats are rejected because catalog documents never carry fractional
//! numbers and JCS number formatting is the one place two serializers can
//! legitimately disagree.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - Object keys are sorted; separators are compact.
/// - No float values appear anywhere in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value contains a
    /// non-integer number, and [`CanonicalizationError::SerializationFailed`]
    /// if serialization itself fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// The canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The canonical form as UTF-8 text.
    pub fn as_str(&self) -> &str {
        // serde_jcs emits a String, so the bytes are valid UTF-8.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Err(CanonicalizationError::FloatRejected(f)),
            _ => Ok(()),
        },
        Value::Array(items) => items.iter().try_for_each(reject_floats),
        Value::Object(map) => map.values().try_for_each(reject_floats),
    }
}

//! # Content Versions
//!
//! A [`Version`] is a dotted numeric string (`1.0`, `2.1`, `1.0.3`). Ordering
//! is component-wise numeric with missing trailing components read as zero,
//! so `1.10 > 1.9` and `1.0 == 1`. The original text is kept for display and
//! serialization.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::ValidationError;

/// A monotonically comparable content version.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct Version {
    raw: String,
    parts: Vec<u64>,
}

impl_validating_deserialize!(Version);

impl Version {
    /// Parse a dotted numeric version.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVersion`] for empty input, empty
    /// components (`1..2`, `.1`) or non-digit characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let parts = raw
            .split('.')
            .map(|p| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                p.parse::<u64>().ok()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| ValidationError::InvalidVersion(raw.clone()))?;
        Ok(Self { raw, parts })
    }

    /// The version as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the version has exactly `major.minor` shape.
    ///
    /// Other shapes are valid; callers may use this to lint authoring style.
    pub fn is_major_minor(&self) -> bool {
        self.parts.len() == 2
    }

    /// Components with trailing zeros removed; equal versions share this.
    fn significant(&self) -> &[u64] {
        let end = self
            .parts
            .iter()
            .rposition(|&p| p != 0)
            .map_or(0, |i| i + 1);
        &self.parts[..end]
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let a = self.parts.get(i).copied().unwrap_or(0);
                let b = other.parts.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Version {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(s: &str) -> Version {
        Version::new(s).unwrap()
    }

    #[test]
    fn numeric_not_lexical_ordering() {
        assert!(v("1.10") > v("1.9"));
        assert!(v("2.0") > v("1.99"));
        assert!(v("1.0.1") > v("1.0"));
    }

    #[test]
    fn trailing_zeros_are_equal() {
        assert_eq!(v("1.0"), v("1"));
        assert_eq!(v("1.0.0"), v("1.0"));
        assert_eq!(v("1.0").cmp(&v("1")), Ordering::Equal);
    }

    #[test]
    fn keeps_original_text() {
        assert_eq!(v("1.0").to_string(), "1.0");
        assert_eq!(serde_json::to_string(&v("2.1")).unwrap(), "\"2.1\"");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "1.", ".1", "1..2", "v1.0", "1.0-beta", "1.a", " 1.0"] {
            assert!(Version::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_yaml::from_str::<Version>("\"1.2\"").is_ok());
        assert!(serde_json::from_str::<Version>("\"one\"").is_err());
    }

    #[test]
    fn major_minor_shape() {
        assert!(v("1.0").is_major_minor());
        assert!(!v("1").is_major_minor());
        assert!(!v("1.0.3").is_major_minor());
    }

    fn version_strategy() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..50, 1..4)
    }

    fn render(parts: &[u32]) -> String {
        parts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    proptest! {
        #[test]
        fn ordering_is_antisymmetric(a in version_strategy(), b in version_strategy()) {
            let va = v(&render(&a));
            let vb = v(&render(&b));
            prop_assert_eq!(va.cmp(&vb), vb.cmp(&va).reverse());
            prop_assert_eq!(va == vb, va.cmp(&vb) == Ordering::Equal);
        }

        #[test]
        fn appending_zero_is_identity(a in version_strategy()) {
            let base = render(&a);
            prop_assert_eq!(v(&base), v(&format!("{base}.0")));
        }

        #[test]
        fn bumping_last_component_increases(a in version_strategy()) {
            let mut bumped = a.clone();
            if let Some(last) = bumped.last_mut() {
                *last += 1;
            }
            prop_assert!(v(&render(&bumped)) > v(&render(&a)));
        }
    }
}

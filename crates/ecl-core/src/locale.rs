//! # Locales and Localized Text
//!
//! Every public-facing field in the catalog is a [`LocalizedText`]: a map
//! from locale to a non-empty string, validated against the configured
//! [`LocaleSet`] at construction time.
//!
//! ## Invariant
//!
//! A `LocalizedText` carries *exactly* the supported locales. No locale may
//! silently fall back to another, so a missing translation is a construction
//! error rather than a rendering-time surprise. Adding a locale to the set is
//! a configuration change only; no type in the workspace changes shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A locale tag such as `en`, `tr` or `pt-br`.
///
/// Lowercase primary subtag of 2–3 letters, optionally followed by
/// `-`-separated subtags of 2–8 lowercase alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Locale(String);

impl_validating_deserialize!(Locale);

impl Locale {
    /// Create a locale from a tag, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLocale`] for malformed tags.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if !is_valid_tag(&tag) {
            return Err(ValidationError::InvalidLocale(tag));
        }
        Ok(Self(tag))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_lowercase()));
    primary_ok
        && parts.all(|p| {
            (2..=8).contains(&p.len())
                && p.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

// ---------------------------------------------------------------------------
// LocaleSet
// ---------------------------------------------------------------------------

/// The ordered, duplicate-free set of supported locales.
///
/// Order is significant: batch generation walks locales in this order so that
/// output is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Locale>", into = "Vec<Locale>")]
pub struct LocaleSet(Vec<Locale>);

impl LocaleSet {
    /// Build a locale set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyLocaleSet`] for an empty input and
    /// [`ValidationError::DuplicateLocale`] if a locale repeats.
    pub fn new(locales: impl IntoIterator<Item = Locale>) -> Result<Self, ValidationError> {
        let mut out: Vec<Locale> = Vec::new();
        for locale in locales {
            if out.contains(&locale) {
                return Err(ValidationError::DuplicateLocale(locale.0));
            }
            out.push(locale);
        }
        if out.is_empty() {
            return Err(ValidationError::EmptyLocaleSet);
        }
        Ok(Self(out))
    }

    /// Parse a comma-separated list such as `"en,tr"`.
    pub fn parse_list(list: &str) -> Result<Self, ValidationError> {
        let locales = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Locale::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(locales)
    }

    /// Whether the locale is supported.
    pub fn contains(&self, locale: &Locale) -> bool {
        self.0.contains(locale)
    }

    /// Iterate in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.0.iter()
    }

    /// Number of supported locales.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Locale>> for LocaleSet {
    type Error = ValidationError;

    fn try_from(value: Vec<Locale>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocaleSet> for Vec<Locale> {
    fn from(set: LocaleSet) -> Self {
        set.0
    }
}

// ---------------------------------------------------------------------------
// LocalizedText
// ---------------------------------------------------------------------------

/// A string per supported locale.
///
/// Construct with [`LocalizedText::new`], which checks the entries against a
/// [`LocaleSet`]. Serializes as a plain `{locale: text}` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Build localized text covering exactly `locales`.
    ///
    /// Text is trimmed. Entries are checked in input order, then the set is
    /// checked for coverage in configured order, so the first reported error
    /// is stable for a given input.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnexpectedLocale`] for a locale outside the set.
    /// - [`ValidationError::DuplicateLocale`] for a repeated locale.
    /// - [`ValidationError::EmptyText`] for blank text.
    /// - [`ValidationError::MissingLocale`] when a supported locale is absent.
    pub fn new<S: Into<String>>(
        locales: &LocaleSet,
        entries: impl IntoIterator<Item = (Locale, S)>,
    ) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();
        for (locale, text) in entries {
            if !locales.contains(&locale) {
                return Err(ValidationError::UnexpectedLocale(locale.0));
            }
            let text = text.into().trim().to_string();
            if text.is_empty() {
                return Err(ValidationError::EmptyText(locale.0));
            }
            if map.contains_key(&locale) {
                return Err(ValidationError::DuplicateLocale(locale.0));
            }
            map.insert(locale, text);
        }
        if let Some(missing) = locales.iter().find(|l| !map.contains_key(*l)) {
            return Err(ValidationError::MissingLocale(missing.0.clone()));
        }
        Ok(Self(map))
    }

    /// Build from an already-parsed map, e.g. one read from a catalog file.
    pub fn from_map(
        locales: &LocaleSet,
        map: BTreeMap<Locale, String>,
    ) -> Result<Self, ValidationError> {
        Self::new(locales, map)
    }

    /// Text for a locale, if present.
    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Text for a locale, failing rather than falling back.
    pub fn require(&self, locale: &Locale) -> Result<&str, ValidationError> {
        self.get(locale)
            .ok_or_else(|| ValidationError::MissingLocale(locale.0.clone()))
    }

    /// Iterate `(locale, text)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.0.iter().map(|(l, t)| (l, t.as_str()))
    }
}

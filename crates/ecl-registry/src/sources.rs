//! # Primary Source Registry
//!
//! Per-slug ordered lists of [`SourceEntry`]s, plus the optional
//! [`AuthoritySection`] authored for the same entry.
//!
//! Lists keep registration order: citation style is often hierarchy- or
//! chronology-sensitive, so the registry never reorders. Use
//! `PrecedenceResolver::sort_by_authority` for an authority ordering.
//!
//! A registered list is never empty, and every entry in it carries a
//! canonical id (unique within the list) and a jurisdiction.
//!
//! This registry knows nothing about content records. Going through
//! [`Catalog`](crate::Catalog) ties source lists to registered records and
//! reports a record without sources as an empty list.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use ecl_authority::{AuthoritySection, AuthorityTier, SourceEntry, Weight};
use ecl_core::{normalize_citation_text, Locale, LocaleSet, Slug};

use crate::error::RegistryError;

/// A source projected to one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedSource {
    /// Normalized citation string.
    pub citation: String,
    /// Binding force.
    pub weight: Weight,
    /// Named tier, if classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<AuthorityTier>,
    /// Summary in the requested locale.
    pub summary: String,
    /// Stable instrument id.
    pub canonical_id: String,
    /// Issuing jurisdiction.
    pub jurisdiction: String,
    /// Official text, if linked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Default)]
struct SourceIndex {
    entries: BTreeMap<Slug, Vec<SourceEntry>>,
    authority: BTreeMap<Slug, AuthoritySection>,
}

/// Shared handle to the primary source registry.
#[derive(Debug, Clone)]
pub struct PrimarySourceRegistry {
    locales: LocaleSet,
    inner: Arc<RwLock<SourceIndex>>,
}

impl PrimarySourceRegistry {
    /// Create an empty registry serving `locales`.
    pub fn new(locales: LocaleSet) -> Self {
        Self {
            locales,
            inner: Arc::new(RwLock::new(SourceIndex::default())),
        }
    }

    /// Register the source list for a slug.
    ///
    /// Citations are normalized through the citation canon. Returns the
    /// number of entries registered.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptySourceList`] for an empty list.
    /// - [`RegistryError::MissingSourceField`] for a blank canonical id or
    ///   jurisdiction.
    /// - [`RegistryError::DuplicateCanonicalId`] if an id repeats in the list.
    /// - [`RegistryError::DuplicateSlug`] if a list is already registered.
    /// - [`RegistryError::Validation`] if a summary lacks a supported locale.
    pub fn register(&self, slug: Slug, entries: Vec<SourceEntry>) -> Result<usize, RegistryError> {
        check_identity(&slug, &entries)?;
        let normalized = entries
            .into_iter()
            .map(|entry| self.normalize(entry))
            .collect::<Result<Vec<_>, _>>()?;

        let mut index = self.inner.write();
        if index.entries.contains_key(&slug) {
            return Err(RegistryError::DuplicateSlug(slug.to_string()));
        }
        let count = normalized.len();
        tracing::info!(slug = %slug, count, "primary sources registered");
        index.entries.insert(slug, normalized);
        Ok(count)
    }

    /// Sources for a slug, projected to one locale, in registration order.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnsupportedLocale`] for a locale outside the set.
    /// - [`RegistryError::NotFound`] for an unregistered slug.
    pub fn sources_for(
        &self,
        slug: &Slug,
        locale: &Locale,
    ) -> Result<Vec<LocalizedSource>, RegistryError> {
        if !self.locales.contains(locale) {
            return Err(RegistryError::UnsupportedLocale(locale.to_string()));
        }
        self.entries(slug)?
            .iter()
            .map(|entry| -> Result<LocalizedSource, RegistryError> {
                Ok(LocalizedSource {
                    citation: entry.citation().to_string(),
                    weight: entry.weight(),
                    tier: entry.tier(),
                    summary: entry.summary_in(locale)?.to_string(),
                    canonical_id: entry.canonical_id().to_string(),
                    jurisdiction: entry.jurisdiction().to_string(),
                    url: entry.url().map(str::to_string),
                })
            })
            .collect()
    }

    /// Raw entries for a slug, in registration order.
    pub fn entries(&self, slug: &Slug) -> Result<Vec<SourceEntry>, RegistryError> {
        self.inner
            .read()
            .entries
            .get(slug)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("primary sources for \"{slug}\"")))
    }

    /// Registered slugs in sorted order.
    pub fn slugs(&self) -> Vec<Slug> {
        self.inner.read().entries.keys().cloned().collect()
    }

    /// Attach the authority section for a slug after validating it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateSlug`] if a section is already attached.
    /// - [`RegistryError::Authority`] if the section fails validation.
    pub fn attach_authority(
        &self,
        slug: Slug,
        section: AuthoritySection,
    ) -> Result<(), RegistryError> {
        section.validate()?;
        let mut index = self.inner.write();
        if index.authority.contains_key(&slug) {
            return Err(RegistryError::DuplicateSlug(slug.to_string()));
        }
        index.authority.insert(slug, section);
        Ok(())
    }

    /// The authority section for a slug, if one is attached.
    pub fn authority(&self, slug: &Slug) -> Option<AuthoritySection> {
        self.inner.read().authority.get(slug).cloned()
    }

    /// Locales this registry serves.
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    fn normalize(&self, entry: SourceEntry) -> Result<SourceEntry, RegistryError> {
        for locale in self.locales.iter() {
            entry.summary_in(locale)?;
        }
        let canonical = normalize_citation_text(entry.citation());
        Ok(entry.with_citation(canonical)?)
    }
}

fn check_identity(slug: &Slug, entries: &[SourceEntry]) -> Result<(), RegistryError> {
    if entries.is_empty() {
        return Err(RegistryError::EmptySourceList(slug.to_string()));
    }
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let missing = |field: &'static str| RegistryError::MissingSourceField {
            slug: slug.to_string(),
            index,
            field,
        };
        if entry.canonical_id().is_empty() {
            return Err(missing("canonical_id"));
        }
        if entry.jurisdiction().is_empty() {
            return Err(missing("jurisdiction"));
        }
        if !seen.insert(entry.canonical_id()) {
            return Err(RegistryError::DuplicateCanonicalId {
                slug: slug.to_string(),
                canonical_id: entry.canonical_id().to_string(),
            });
        }
    }
    Ok(())
}

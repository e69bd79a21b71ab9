//! The catalog context.
//!
//! One [`Catalog`] is built at process start and passed to the generator,
//! renderer and resolver. It bundles site configuration with both
//! registries; there is no global registry state.

use ecl_authority::SourceEntry;
use ecl_core::{Locale, SiteConfig, Slug};

use crate::content::ContentRegistry;
use crate::error::RegistryError;
use crate::record::ContentRecord;
use crate::sources::{LocalizedSource, PrimarySourceRegistry};

/// Site configuration plus the content and primary-source registries.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: SiteConfig,
    content: ContentRegistry,
    sources: PrimarySourceRegistry,
}

impl Catalog {
    /// An empty catalog for a site.
    pub fn new(config: SiteConfig) -> Self {
        let sources = PrimarySourceRegistry::new(config.locales().clone());
        Self {
            config,
            content: ContentRegistry::new(),
            sources,
        }
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Content registry handle.
    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    /// Primary source registry handle.
    pub fn sources(&self) -> &PrimarySourceRegistry {
        &self.sources
    }

    /// Fail unless the locale is configured.
    pub fn require_locale(&self, locale: &Locale) -> Result<(), RegistryError> {
        if self.config.locales().contains(locale) {
            Ok(())
        } else {
            Err(RegistryError::UnsupportedLocale(locale.to_string()))
        }
    }

    /// Canonical URL of a record: `{siteRoot}/{locale}/{slug}`.
    pub fn canonical_url(
        &self,
        record: &ContentRecord,
        locale: &Locale,
    ) -> Result<String, RegistryError> {
        self.require_locale(locale)?;
        Ok(self.config.url_for(locale, record.slug().as_str()))
    }

    /// Look up a record and check the locale in one step.
    pub fn record_for(&self, slug: &Slug, locale: &Locale) -> Result<ContentRecord, RegistryError> {
        self.require_locale(locale)?;
        self.content.get(slug)
    }

    /// Register the source list of an existing record.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when no record has the slug, plus every
    /// error of [`PrimarySourceRegistry::register`].
    pub fn register_sources(
        &self,
        slug: Slug,
        entries: Vec<SourceEntry>,
    ) -> Result<usize, RegistryError> {
        if !self.content.contains(&slug) {
            return Err(RegistryError::NotFound(format!("content record \"{slug}\"")));
        }
        self.sources.register(slug, entries)
    }

    /// Sources of a record in registration order. A record without a
    /// source list yields an empty list.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when no record has the slug.
    pub fn sources_of(&self, slug: &Slug) -> Result<Vec<SourceEntry>, RegistryError> {
        if !self.content.contains(slug) {
            return Err(RegistryError::NotFound(format!("content record \"{slug}\"")));
        }
        match self.sources.entries(slug) {
            Err(RegistryError::NotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// [`sources_of`](Self::sources_of) projected to one locale.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnsupportedLocale`] for a locale outside the set.
    /// - [`RegistryError::NotFound`] when no record has the slug.
    pub fn sources_for(
        &self,
        slug: &Slug,
        locale: &Locale,
    ) -> Result<Vec<LocalizedSource>, RegistryError> {
        let record = self.record_for(slug, locale)?;
        match self.sources.sources_for(record.slug(), locale) {
            Err(RegistryError::NotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }
}

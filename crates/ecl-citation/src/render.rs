//! # Citation Renderer
//!
//! Pure formatting of a [`ContentRecord`] into a citation string. Every
//! rendering, in every style, includes the citation key, the version, the
//! last-modified date (`YYYY-MM-DD`) and the canonical URL, so a reader
//! can always resolve the exact text that was cited.
//!
//! Formats:
//!
//! ```text
//! inline:          {publisher}, {title} v{version} ({dateModified}) [{key}] {url}
//! full-reference:  {publisher}. "{title}". Version {version}. Last modified {dateModified}.
//!                  Citation key: {key}. Available at: {url}.
//! ```
//!
//! Without a title the title segment is dropped and the publisher stands
//! alone.

use ecl_core::{normalize_label_text, Locale, SiteConfig};
use ecl_registry::{Catalog, ContentRecord};

use crate::error::CitationError;
use crate::style::CitationStyle;

/// Renders citations for records of one catalog.
#[derive(Debug, Clone, Copy)]
pub struct CitationRenderer<'a> {
    config: &'a SiteConfig,
}

impl<'a> CitationRenderer<'a> {
    /// A renderer reading publisher, site root and locales from `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::for_config(catalog.config())
    }

    /// A renderer over a bare site configuration.
    pub fn for_config(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Citation without a page title.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::UnsupportedLocale`] for a locale outside the
    /// configured set.
    pub fn render(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        style: CitationStyle,
    ) -> Result<String, CitationError> {
        self.format(record, None, locale, style)
    }

    /// Citation including the page title. A blank title renders as
    /// [`render`](Self::render) does.
    pub fn render_titled(
        &self,
        record: &ContentRecord,
        title: &str,
        locale: &Locale,
        style: CitationStyle,
    ) -> Result<String, CitationError> {
        let title = normalize_label_text(title);
        let title = (!title.is_empty()).then_some(title.as_str());
        self.format(record, title, locale, style)
    }

    fn format(
        &self,
        record: &ContentRecord,
        title: Option<&str>,
        locale: &Locale,
        style: CitationStyle,
    ) -> Result<String, CitationError> {
        if !self.config.locales().contains(locale) {
            return Err(CitationError::UnsupportedLocale(locale.to_string()));
        }
        let publisher = self.config.publisher_name();
        let version = record.version();
        let modified = record.date_modified().to_iso();
        let key = record.citation_key();
        let url = self.config.url_for(locale, record.slug().as_str());

        let citation = match (style, title) {
            (CitationStyle::Inline, Some(title)) => {
                format!("{publisher}, {title} v{version} ({modified}) [{key}] {url}")
            }
            (CitationStyle::Inline, None) => {
                format!("{publisher}, v{version} ({modified}) [{key}] {url}")
            }
            (CitationStyle::FullReference, Some(title)) => format!(
                "{publisher}. \"{title}\". Version {version}. Last modified {modified}. \
                 Citation key: {key}. Available at: {url}."
            ),
            (CitationStyle::FullReference, None) => format!(
                "{publisher}. Version {version}. Last modified {modified}. \
                 Citation key: {key}. Available at: {url}."
            ),
        };
        Ok(citation)
    }
}

/// Render a citation for `record` using `catalog`'s configuration.
pub fn render(
    catalog: &Catalog,
    record: &ContentRecord,
    locale: &Locale,
    style: CitationStyle,
) -> Result<String, CitationError> {
    CitationRenderer::new(catalog).render(record, locale, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecl_core::{CalendarDate, CitationKey, ContentType, LocaleSet, Slug, Version};

    fn config() -> SiteConfig {
        SiteConfig::new(
            "https://example.org",
            LocaleSet::parse_list("en,tr").unwrap(),
            "Example Press",
        )
        .unwrap()
    }

    fn record() -> ContentRecord {
        ContentRecord::draft(
            Slug::new("encyclopedia/what-is-nda").unwrap(),
            Version::new("2.1").unwrap(),
            CalendarDate::parse("2025-06-01").unwrap(),
            CalendarDate::parse("2026-01-25").unwrap(),
            CitationKey::new("ecl-enc-00007").unwrap(),
            ContentType::EncyclopediaEntry,
        )
        .unwrap()
    }

    fn en() -> Locale {
        Locale::new("en").unwrap()
    }

    #[test]
    fn inline_untitled() {
        let config = config();
        let out = CitationRenderer::for_config(&config)
            .render(&record(), &en(), CitationStyle::Inline)
            .unwrap();
        assert_eq!(
            out,
            "Example Press, v2.1 (2026-01-25) [ecl-enc-00007] https://example.org/en/encyclopedia/what-is-nda"
        );
    }

    #[test]
    fn full_reference_titled() {
        let config = config();
        let out = CitationRenderer::for_config(&config)
            .render_titled(
                &record(),
                "What Is a  Non-Disclosure Agreement",
                &Locale::new("tr").unwrap(),
                CitationStyle::FullReference,
            )
            .unwrap();
        assert_eq!(
            out,
            "Example Press. \"What Is a Non-Disclosure Agreement\". Version 2.1. \
             Last modified 2026-01-25. Citation key: ecl-enc-00007. \
             Available at: https://example.org/tr/encyclopedia/what-is-nda."
        );
    }

    #[test]
    fn blank_title_falls_back() {
        let config = config();
        let renderer = CitationRenderer::for_config(&config);
        assert_eq!(
            renderer
                .render_titled(&record(), "  ", &en(), CitationStyle::Inline)
                .unwrap(),
            renderer.render(&record(), &en(), CitationStyle::Inline).unwrap()
        );
    }

    #[test]
    fn unsupported_locale() {
        let config = config();
        let err = CitationRenderer::for_config(&config)
            .render(&record(), &Locale::new("de").unwrap(), CitationStyle::Inline)
            .unwrap_err();
        assert_eq!(err, CitationError::UnsupportedLocale("de".into()));
    }

    #[test]
    fn every_style_carries_resolution_fields() {
        let config = config();
        let renderer = CitationRenderer::for_config(&config);
        for style in CitationStyle::all() {
            let out = renderer
                .render_titled(&record(), "NDA", &en(), *style)
                .unwrap();
            for needle in ["ecl-enc-00007", "2.1", "2026-01-25", "https://example.org/en/"] {
                assert!(out.contains(needle), "{style}: {out} lacks {needle}");
            }
        }
    }
}

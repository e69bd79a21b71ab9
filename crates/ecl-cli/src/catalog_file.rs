//! # Catalog Files
//!
//! Loads a catalog YAML file into a populated [`Catalog`] plus the page
//! fields the generator needs. Records are registered in file order;
//! sources and authority sections are attached per record.
//!
//! ```yaml
//! site:
//!   site_root: https://legal.example.org
//!   locales: [en, tr]
//!   publisher_name: Example Legal Reference
//! records:
//!   - slug: llc-guide
//!     version: "1.0"
//!     date_published: 2025-06-01
//!     date_modified: 2026-02-17
//!     citation_key: ecl-gde-00014
//!     content_type: jurisdictional-guide
//!     title: { en: Forming a US LLC, tr: ABD'de LLC Kurmak }
//!     sources:
//!       - citation: 26 USC 7701
//!         canonical_id: US-26USC-7701
//!         jurisdiction: US
//!         url: https://www.law.cornell.edu/uscode/text/26/7701
//!         tier: federal_statute
//!         summary: { en: Entity classification., tr: Varlık sınıflandırması. }
//! ```
//!
//! Versions must be quoted: an unquoted `1.0` is a YAML float.
//!
//! ## Site configuration
//!
//! A [`SiteSource`] says where the site configuration comes from: a
//! `--config` file or the catalog's own `site` section, then any `ECL_*`
//! overrides it carries. Only the binary captures overrides from the
//! process environment, so [`parse`] and the handlers stay deterministic.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use ecl_authority::{
    classify_scope, AuthoritySection, AuthorityTier, CaseIllustration, ScopeClassification,
    SourceEntry, Weight,
};
use ecl_core::{
    CalendarDate, CitationKey, ContentType, Locale, LocaleSet, LocalizedText, SiteConfig, Slug,
    Version,
};
use ecl_registry::{Catalog, ContentRecord};
use ecl_schema::{PageContent, ScholarlyFields};

type LocaleMap = BTreeMap<Locale, String>;

// ─── On-disk shape ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    site: Option<RawSite>,
    #[serde(default)]
    records: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSite {
    site_root: String,
    locales: LocaleSet,
    publisher_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    slug: Slug,
    version: Version,
    date_published: CalendarDate,
    date_modified: CalendarDate,
    citation_key: CitationKey,
    content_type: ContentType,
    word_count: Option<u32>,
    #[serde(default)]
    retired: bool,
    title: Option<LocaleMap>,
    description: Option<LocaleMap>,
    #[serde(default)]
    keywords: Vec<LocaleMap>,
    canonical_path: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<LocaleMap>,
    alternative_headline: Option<LocaleMap>,
    #[serde(default)]
    about: Vec<LocaleMap>,
    sources: Option<Vec<RawSource>>,
    authority: Option<RawAuthority>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    citation: String,
    canonical_id: String,
    jurisdiction: String,
    url: Option<String>,
    weight: Option<Weight>,
    tier: Option<AuthorityTier>,
    summary: LocaleMap,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct RawAuthority {
    interpretive_notes: Vec<LocaleMap>,
    scopes: Vec<RawScope>,
    case_illustrations: Vec<RawCase>,
    unresolved: Vec<LocaleMap>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScope {
    topic: String,
    #[serde(default)]
    resolves: Vec<LocaleMap>,
    #[serde(default)]
    does_not_resolve: Vec<LocaleMap>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCase {
    citation: String,
    principle: LocaleMap,
}

// ─── Site source ─────────────────────────────────────────────────────

/// Where the site configuration comes from.
#[derive(Debug, Clone, Default)]
pub struct SiteSource {
    /// File replacing the catalog's `site` section.
    pub config: Option<PathBuf>,
    /// `ECL_*` override values, applied after the base configuration.
    pub overrides: BTreeMap<String, String>,
}

impl SiteSource {
    /// Use a configuration file instead of the catalog's `site` section.
    pub fn with_config(config: impl Into<PathBuf>) -> Self {
        Self {
            config: Some(config.into()),
            overrides: BTreeMap::new(),
        }
    }

    /// Capture `ECL_*` variables from the process environment.
    pub fn from_env(config: Option<PathBuf>) -> Self {
        let overrides = std::env::vars()
            .filter(|(key, _)| key.starts_with("ECL_"))
            .collect();
        Self { config, overrides }
    }

    /// Add one override.
    pub fn override_with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    fn resolve(&self, site: Option<RawSite>, origin: &str) -> Result<SiteConfig> {
        let base = match (&self.config, site) {
            (Some(path), _) => SiteConfig::load(path)?,
            (None, Some(site)) => SiteConfig::new(&site.site_root, site.locales, &site.publisher_name)?,
            (None, None) => bail!("{origin}: no site section and no --config given"),
        };
        Ok(base.with_overrides(|key| self.overrides.get(key).cloned())?)
    }
}

// ─── Loaded catalog ──────────────────────────────────────────────────

/// Page-layer fields for one record.
#[derive(Debug, Clone)]
pub struct PageEntry {
    /// Title, description, keywords and canonical path.
    pub content: PageContent,
    abstract_text: Option<LocalizedText>,
    alternative_headline: Option<LocalizedText>,
    about: Vec<LocalizedText>,
}

impl PageEntry {
    /// Scholarly extras projected to one locale.
    pub fn scholarly_fields(&self, locale: &Locale) -> ScholarlyFields {
        let pick = |text: &Option<LocalizedText>| {
            text.as_ref()
                .and_then(|t| t.get(locale))
                .map(str::to_string)
        };
        ScholarlyFields {
            abstract_text: pick(&self.abstract_text),
            alternative_headline: pick(&self.alternative_headline),
            about_topics: self
                .about
                .iter()
                .filter_map(|t| t.get(locale))
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A catalog populated from a file.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// Config plus both registries.
    pub catalog: Catalog,
    pages: BTreeMap<Slug, PageEntry>,
}

impl LoadedCatalog {
    /// Page fields for a slug, if the file supplied a title.
    pub fn page(&self, slug: &Slug) -> Option<&PageEntry> {
        self.pages.get(slug)
    }

    /// Slugs that have page fields, in sorted order.
    pub fn paged_slugs(&self) -> impl Iterator<Item = &Slug> {
        self.pages.keys()
    }
}

/// Load a catalog file.
pub fn load(path: &Path, site: &SiteSource) -> Result<LoadedCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let origin = path.display().to_string();
    parse(&text, &origin, site)
}

/// Parse catalog YAML. `origin` names the source in error messages.
pub fn parse(text: &str, origin: &str, site: &SiteSource) -> Result<LoadedCatalog> {
    let raw: RawCatalog =
        serde_yaml::from_str(text).with_context(|| format!("failed to parse catalog {origin}"))?;

    let config = site.resolve(raw.site, origin)?;
    tracing::debug!(site_root = config.site_root(), locales = config.locales().len(), "site configuration loaded");

    let catalog = Catalog::new(config);
    let mut pages = BTreeMap::new();
    for record in raw.records {
        let slug = record.slug.clone();
        let page = register_record(&catalog, record)
            .with_context(|| format!("{origin}: record \"{slug}\""))?;
        if let Some(page) = page {
            pages.insert(slug, page);
        }
    }
    tracing::info!(records = catalog.content().len(), "catalog loaded");
    Ok(LoadedCatalog { catalog, pages })
}

fn register_record(catalog: &Catalog, raw: RawRecord) -> Result<Option<PageEntry>> {
    let locales = catalog.config().locales();
    let slug = raw.slug.clone();

    let draft = ContentRecord::draft(
        raw.slug,
        raw.version,
        raw.date_published,
        raw.date_modified,
        raw.citation_key,
        raw.content_type,
    )?
    .with_word_count(raw.word_count.unwrap_or(0));
    catalog.content().register(draft)?;
    if raw.retired {
        catalog.content().retire(&slug)?;
    }

    if let Some(sources) = raw.sources {
        let entries = sources
            .into_iter()
            .map(|s| source_entry(locales, s))
            .collect::<Result<Vec<_>>>()?;
        catalog.register_sources(slug.clone(), entries)?;
    }
    if let Some(authority) = raw.authority {
        let section = authority_section(locales, authority)?;
        catalog.sources().attach_authority(slug.clone(), section)?;
    }

    let Some(title) = raw.title else {
        return Ok(None);
    };
    let mut content = PageContent::titled(LocalizedText::from_map(locales, title)?);
    content.description = optional_text(locales, raw.description)?;
    content.keywords = texts(locales, raw.keywords)?;
    content.canonical_path = raw.canonical_path;
    Ok(Some(PageEntry {
        content,
        abstract_text: optional_text(locales, raw.abstract_text)?,
        alternative_headline: optional_text(locales, raw.alternative_headline)?,
        about: texts(locales, raw.about)?,
    }))
}

fn source_entry(locales: &LocaleSet, raw: RawSource) -> Result<SourceEntry> {
    let summary = LocalizedText::from_map(locales, raw.summary)?;
    let entry = match (raw.tier, raw.weight) {
        (Some(tier), None) => SourceEntry::with_tier(raw.citation, tier, summary)?,
        (Some(tier), Some(weight)) => SourceEntry::with_tier(raw.citation, tier, summary)?.weighted(weight),
        (None, Some(weight)) => SourceEntry::new(raw.citation, weight, summary)?,
        (None, None) => bail!("source \"{}\" needs a weight or a tier", raw.citation),
    };
    let entry = entry.identified(raw.canonical_id, raw.jurisdiction);
    Ok(match raw.url {
        Some(url) => entry.with_url(url),
        None => entry,
    })
}

fn authority_section(locales: &LocaleSet, raw: RawAuthority) -> Result<AuthoritySection> {
    let scopes = raw
        .scopes
        .into_iter()
        .map(|s| -> Result<ScopeClassification> {
            Ok(classify_scope(
                &s.topic,
                texts(locales, s.resolves)?,
                texts(locales, s.does_not_resolve)?,
            )?)
        })
        .collect::<Result<Vec<_>>>()?;
    let case_illustrations = raw
        .case_illustrations
        .into_iter()
        .map(|c| -> Result<CaseIllustration> {
            Ok(CaseIllustration {
                citation: c.citation.trim().to_string(),
                principle: LocalizedText::from_map(locales, c.principle)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AuthoritySection {
        interpretive_notes: texts(locales, raw.interpretive_notes)?,
        scopes,
        case_illustrations,
        unresolved: texts(locales, raw.unresolved)?,
    })
}

fn optional_text(locales: &LocaleSet, map: Option<LocaleMap>) -> Result<Option<LocalizedText>> {
    Ok(map
        .map(|m| LocalizedText::from_map(locales, m))
        .transpose()?)
}

fn texts(locales: &LocaleSet, maps: Vec<LocaleMap>) -> Result<Vec<LocalizedText>> {
    Ok(maps
        .into_iter()
        .map(|m| LocalizedText::from_map(locales, m))
        .collect::<Result<Vec<_>, _>>()?)
}

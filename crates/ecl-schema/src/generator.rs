//! # Metadata Generator
//!
//! Builds structured documents from a [`ContentRecord`], a locale and
//! page-supplied fields. Generation is a pure function of its inputs and
//! the catalog configuration: the same inputs always yield byte-identical
//! canonical JSON.
//!
//! Every document is validated against its embedded schema before it is
//! returned. Any failure aborts the whole document.

use std::collections::HashSet;

use serde::Serialize;

use ecl_core::{normalize_label_text, CanonicalizationError, Locale, Slug};
use ecl_registry::{Catalog, ContentRecord};

use crate::document::{
    Answer, ArticleDoc, BreadcrumbDoc, CitationBlock, FaqDoc, ListItem, NodeRef, Question,
    SchemaType, ScholarlyDoc, StructuredDocument, Topic, WebPageRef, SCHEMA_ORG,
};
use crate::error::GenerationError;
use crate::meta_tags::{citation_meta_tags, MetaTag};
use crate::page::{Crumb, FaqEntry, PageContent, PageFields, ScholarlyFields};
use crate::validate::DocumentValidator;

/// JSON-LD fragment of the author node.
pub const AUTHOR_FRAGMENT: &str = "author";
/// JSON-LD fragment of the publisher node.
pub const ORGANIZATION_FRAGMENT: &str = "organization";

/// Structured metadata generator bound to one catalog.
#[derive(Debug)]
pub struct MetadataGenerator<'a> {
    catalog: &'a Catalog,
    validator: DocumentValidator,
}

impl<'a> MetadataGenerator<'a> {
    /// Create a generator, compiling the embedded schemas.
    pub fn new(catalog: &'a Catalog) -> Result<Self, GenerationError> {
        Ok(Self {
            catalog,
            validator: DocumentValidator::new()?,
        })
    }

    /// The catalog this generator reads configuration from.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Generate an `Article`.
    ///
    /// Record state is not checked: a retired record keeps its documents so
    /// citations already published against its key still resolve.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::UnsupportedLocale`] for a locale outside the set.
    /// - [`GenerationError::IncompleteMetadata`] for a blank title or a blank
    ///   canonical path override.
    pub fn article(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        fields: &PageFields,
    ) -> Result<ArticleDoc, GenerationError> {
        let doc = self.build_article(record, locale, fields, SchemaType::Article)?;
        self.check(SchemaType::Article, &doc)?;
        tracing::debug!(slug = %record.slug(), locale = %locale, "article generated");
        Ok(doc)
    }

    /// Generate a `ScholarlyArticle`: an article plus abstract, alternative
    /// headline, word count and topics.
    pub fn scholarly(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        fields: &PageFields,
        extra: &ScholarlyFields,
    ) -> Result<ScholarlyDoc, GenerationError> {
        let article = self.build_article(record, locale, fields, SchemaType::ScholarlyArticle)?;
        let doc = ScholarlyDoc {
            article,
            abstract_text: non_blank(extra.abstract_text.as_deref()),
            alternative_headline: non_blank(extra.alternative_headline.as_deref()),
            word_count: record.word_count().filter(|&n| n > 0),
            about_topics: extra
                .about_topics
                .iter()
                .filter_map(|t| non_blank(Some(t.as_str())))
                .map(|name| Topic {
                    node_type: "Thing",
                    name,
                })
                .collect(),
        };
        self.check(SchemaType::ScholarlyArticle, &doc)?;
        tracing::debug!(slug = %record.slug(), locale = %locale, "scholarly article generated");
        Ok(doc)
    }

    /// Generate a `BreadcrumbList`. Positions are `1..=N` in supplied order.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InsufficientBreadcrumbs`] for fewer than two crumbs.
    /// - [`GenerationError::IncompleteMetadata`] for a blank name or URL.
    pub fn breadcrumbs(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        crumbs: &[Crumb],
    ) -> Result<BreadcrumbDoc, GenerationError> {
        self.require_locale(locale)?;
        if crumbs.len() < 2 {
            return Err(GenerationError::InsufficientBreadcrumbs(crumbs.len()));
        }
        let item_list_element = crumbs
            .iter()
            .enumerate()
            .map(|(i, crumb)| {
                let name = normalize_label_text(&crumb.name);
                if name.is_empty() {
                    return Err(GenerationError::incomplete(format!("breadcrumb[{i}].name")));
                }
                let item = self.resolve_link(&crumb.url).ok_or_else(|| {
                    GenerationError::incomplete(format!("breadcrumb[{i}].url"))
                })?;
                Ok(ListItem {
                    node_type: "ListItem",
                    position: (i + 1) as u32,
                    name,
                    item,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let doc = BreadcrumbDoc {
            context: SCHEMA_ORG,
            schema_type: SchemaType::BreadcrumbList,
            url: self.record_url(record, locale)?,
            in_language: locale.to_string(),
            identifier: record.citation_key().to_string(),
            item_list_element,
        };
        self.check(SchemaType::BreadcrumbList, &doc)?;
        Ok(doc)
    }

    /// Generate an `FAQPage`. Questions keep supplied order.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::IncompleteMetadata`] for an empty list or a blank
    ///   question or answer.
    /// - [`GenerationError::DuplicateQuestion`] when two questions have the
    ///   same text after whitespace normalization.
    pub fn faq(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        entries: &[FaqEntry],
    ) -> Result<FaqDoc, GenerationError> {
        self.require_locale(locale)?;
        if entries.is_empty() {
            return Err(GenerationError::incomplete("faq"));
        }
        let mut seen = HashSet::new();
        let mut main_entity = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let name = normalize_label_text(&entry.question);
            if name.is_empty() {
                return Err(GenerationError::incomplete(format!("faq[{i}].question")));
            }
            let text = entry.answer.trim();
            if text.is_empty() {
                return Err(GenerationError::incomplete(format!("faq[{i}].answer")));
            }
            if !seen.insert(name.clone()) {
                return Err(GenerationError::DuplicateQuestion(name));
            }
            main_entity.push(Question {
                node_type: "Question",
                name,
                accepted_answer: Answer {
                    node_type: "Answer",
                    text: text.to_string(),
                },
            });
        }

        let doc = FaqDoc {
            context: SCHEMA_ORG,
            schema_type: SchemaType::FaqPage,
            url: self.record_url(record, locale)?,
            in_language: locale.to_string(),
            identifier: record.citation_key().to_string(),
            main_entity,
        };
        self.check(SchemaType::FaqPage, &doc)?;
        Ok(doc)
    }

    /// Citation `<meta>` tags for a page, derived from the article's
    /// citation block.
    pub fn citation_meta_tags(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        fields: &PageFields,
    ) -> Result<Vec<MetaTag>, GenerationError> {
        let article = self.article(record, locale, fields)?;
        Ok(citation_meta_tags(&article.citation_metadata))
    }

    /// One `Article` per configured locale, in locale-set order. Retired
    /// records are included, as for [`article`](Self::article).
    ///
    /// # Errors
    ///
    /// Fails on the first locale whose document cannot be generated; no
    /// partial batch is returned.
    pub fn generate_all(
        &self,
        slug: &Slug,
        content: &PageContent,
    ) -> Result<Vec<StructuredDocument>, GenerationError> {
        let record = self.catalog.content().get(slug)?;
        let docs = self
            .catalog
            .config()
            .locales()
            .iter()
            .map(|locale| {
                self.article(&record, locale, &content.fields_for(locale))
                    .map(StructuredDocument::from)
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(slug = %slug, documents = docs.len(), "regenerated structured data");
        Ok(docs)
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn build_article(
        &self,
        record: &ContentRecord,
        locale: &Locale,
        fields: &PageFields,
        schema_type: SchemaType,
    ) -> Result<ArticleDoc, GenerationError> {
        self.require_locale(locale)?;
        let config = self.catalog.config();

        let headline = normalize_label_text(&fields.title);
        if headline.is_empty() {
            return Err(GenerationError::incomplete("title"));
        }
        let url = match fields.canonical_path.as_deref() {
            Some(path) if path.trim().trim_matches('/').is_empty() => {
                return Err(GenerationError::incomplete("canonical_path"));
            }
            Some(path) => config.url_for(locale, path.trim()),
            None => self.record_url(record, locale)?,
        };
        let keywords: Vec<String> = fields
            .keywords
            .iter()
            .filter_map(|k| non_blank(Some(k.as_str())))
            .collect();

        let citation_metadata = CitationBlock {
            citation_title: headline.clone(),
            citation_publisher: config.publisher_name().to_string(),
            citation_publication_date: record.date_published().to_citation(),
            citation_lastmod: record.date_modified().to_citation(),
            citation_version: record.version().to_string(),
            citation_language: locale.to_string(),
            citation_fulltext_html_url: url.clone(),
            citation_id: record.citation_key().to_string(),
            citation_keywords: (!keywords.is_empty()).then(|| keywords.join(", ")),
        };

        Ok(ArticleDoc {
            context: SCHEMA_ORG,
            schema_type,
            headline,
            description: non_blank(fields.description.as_deref()),
            author: NodeRef {
                id: config.site_id(AUTHOR_FRAGMENT),
            },
            publisher: NodeRef {
                id: config.site_id(ORGANIZATION_FRAGMENT),
            },
            url: url.clone(),
            main_entity_of_page: WebPageRef {
                node_type: "WebPage",
                id: url,
            },
            date_published: record.date_published().to_iso(),
            date_modified: record.date_modified().to_iso(),
            in_language: locale.to_string(),
            version: record.version().to_string(),
            identifier: record.citation_key().to_string(),
            keywords,
            citation_metadata,
        })
    }

    fn require_locale(&self, locale: &Locale) -> Result<(), GenerationError> {
        if self.catalog.config().locales().contains(locale) {
            Ok(())
        } else {
            Err(GenerationError::UnsupportedLocale(locale.to_string()))
        }
    }

    fn record_url(&self, record: &ContentRecord, locale: &Locale) -> Result<String, GenerationError> {
        Ok(self.catalog.canonical_url(record, locale)?)
    }

    /// Absolute `http(s)` links pass through; anything else is joined to
    /// the site root. Blank links resolve to `None`.
    fn resolve_link(&self, link: &str) -> Option<String> {
        let link = link.trim();
        if link.is_empty() {
            return None;
        }
        if link.starts_with("https://") || link.starts_with("http://") {
            return Some(link.to_string());
        }
        let path = link.trim_matches('/');
        let root = self.catalog.config().site_root();
        if path.is_empty() {
            Some(root.to_string())
        } else {
            Some(format!("{root}/{path}"))
        }
    }

    fn check<T: Serialize>(&self, schema_type: SchemaType, doc: &T) -> Result<(), GenerationError> {
        let value = serde_json::to_value(doc).map_err(CanonicalizationError::from)?;
        self.validator.validate_value(schema_type, &value)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

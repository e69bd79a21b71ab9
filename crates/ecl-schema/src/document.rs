//! # Structured Documents
//!
//! Output-only JSON-LD trees in the schema.org vocabulary. Every document
//! carries its locale (`inLanguage`), the canonical URL of the page it
//! describes, and the record's citation key (`identifier`).
//!
//! Field order in the Rust structs is the emitted key order; no maps with
//! nondeterministic iteration appear anywhere in a document, so identical
//! inputs serialize to identical bytes.
//!
//! Two date formats coexist, as the consuming indexers expect:
//! `datePublished` / `dateModified` use `YYYY-MM-DD`, `citation_*` fields
//! use `YYYY/MM/DD`.

use serde::Serialize;

use ecl_core::{sha256_hex, CanonicalBytes};

use crate::error::GenerationError;

/// The JSON-LD context of every document.
pub const SCHEMA_ORG: &str = "https://schema.org";

/// Top-level document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SchemaType {
    /// schema.org `Article`.
    Article,
    /// schema.org `BreadcrumbList`.
    BreadcrumbList,
    /// schema.org `FAQPage`.
    #[serde(rename = "FAQPage")]
    FaqPage,
    /// schema.org `ScholarlyArticle`.
    ScholarlyArticle,
}

impl SchemaType {
    /// The `@type` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::BreadcrumbList => "BreadcrumbList",
            Self::FaqPage => "FAQPage",
            Self::ScholarlyArticle => "ScholarlyArticle",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON-LD node reference: `{"@id": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    /// Node identifier.
    #[serde(rename = "@id")]
    pub id: String,
}

/// `mainEntityOfPage` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    /// Always `WebPage`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    /// Canonical URL of the page.
    #[serde(rename = "@id")]
    pub id: String,
}

// ─── Article ─────────────────────────────────────────────────────────

/// Citation fields read by scholarly indexers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitationBlock {
    /// Page title.
    pub citation_title: String,
    /// Configured publisher name.
    pub citation_publisher: String,
    /// `YYYY/MM/DD`.
    pub citation_publication_date: String,
    /// `YYYY/MM/DD`.
    pub citation_lastmod: String,
    /// Content version.
    pub citation_version: String,
    /// Locale tag.
    pub citation_language: String,
    /// Canonical URL.
    pub citation_fulltext_html_url: String,
    /// Citation key.
    pub citation_id: String,
    /// Keywords joined with `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_keywords: Option<String>,
}

/// schema.org `Article`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDoc {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// `Article`, or `ScholarlyArticle` when wrapped by [`ScholarlyDoc`].
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Page title.
    pub headline: String,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `{siteRoot}/#author`.
    pub author: NodeRef,
    /// `{siteRoot}/#organization`.
    pub publisher: NodeRef,
    /// Canonical URL.
    pub url: String,
    /// The page this article is the main entity of.
    pub main_entity_of_page: WebPageRef,
    /// `YYYY-MM-DD`.
    pub date_published: String,
    /// `YYYY-MM-DD`.
    pub date_modified: String,
    /// Locale tag.
    pub in_language: String,
    /// Content version.
    pub version: String,
    /// Citation key.
    pub identifier: String,
    /// Keywords in supplied order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Citation fields.
    pub citation_metadata: CitationBlock,
}

// ─── Scholarly Article ───────────────────────────────────────────────

/// `about` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Always `Thing`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    /// Topic tag.
    pub name: String,
}

/// schema.org `ScholarlyArticle`: an article plus abstract, alternative
/// headline, word count and topics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarlyDoc {
    /// The article fields, with `@type` set to `ScholarlyArticle`.
    #[serde(flatten)]
    pub article: ArticleDoc,
    /// Abstract.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Alternative headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_headline: Option<String>,
    /// Word count; present only when positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    /// Topic tags.
    #[serde(rename = "about", skip_serializing_if = "Vec::is_empty")]
    pub about_topics: Vec<Topic>,
}

// ─── Breadcrumbs ─────────────────────────────────────────────────────

/// One `ListItem` of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Always `ListItem`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    /// 1-indexed position in supplied order.
    pub position: u32,
    /// Label.
    pub name: String,
    /// Absolute URL.
    pub item: String,
}

/// schema.org `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbDoc {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// `BreadcrumbList`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Canonical URL of the page the trail belongs to.
    pub url: String,
    /// Locale tag.
    pub in_language: String,
    /// Citation key.
    pub identifier: String,
    /// Crumbs, positions `1..=N`.
    pub item_list_element: Vec<ListItem>,
}

// ─── FAQ ─────────────────────────────────────────────────────────────

/// `acceptedAnswer` of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Always `Answer`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    /// Answer text.
    pub text: String,
}

/// One FAQ `Question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Always `Question`.
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    /// Question text.
    pub name: String,
    /// The answer.
    pub accepted_answer: Answer,
}

/// schema.org `FAQPage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDoc {
    /// JSON-LD context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// `FAQPage`.
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    /// Canonical URL.
    pub url: String,
    /// Locale tag.
    pub in_language: String,
    /// Citation key.
    pub identifier: String,
    /// Questions in supplied order.
    pub main_entity: Vec<Question>,
}

// ─── Structured Document ─────────────────────────────────────────────

/// Any generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StructuredDocument {
    /// `Article`.
    Article(ArticleDoc),
    /// `BreadcrumbList`.
    Breadcrumb(BreadcrumbDoc),
    /// `FAQPage`.
    Faq(FaqDoc),
    /// `ScholarlyArticle`.
    Scholarly(ScholarlyDoc),
}

impl StructuredDocument {
    /// The `@type` discriminator.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Self::Article(d) => d.schema_type,
            Self::Breadcrumb(d) => d.schema_type,
            Self::Faq(d) => d.schema_type,
            Self::Scholarly(d) => d.article.schema_type,
        }
    }

    /// Locale tag of the document.
    pub fn locale(&self) -> &str {
        match self {
            Self::Article(d) => &d.in_language,
            Self::Breadcrumb(d) => &d.in_language,
            Self::Faq(d) => &d.in_language,
            Self::Scholarly(d) => &d.article.in_language,
        }
    }

    /// Canonical URL of the described page.
    pub fn url(&self) -> &str {
        match self {
            Self::Article(d) => &d.url,
            Self::Breadcrumb(d) => &d.url,
            Self::Faq(d) => &d.url,
            Self::Scholarly(d) => &d.article.url,
        }
    }

    /// Citation key back-reference.
    pub fn citation_key(&self) -> &str {
        match self {
            Self::Article(d) => &d.identifier,
            Self::Breadcrumb(d) => &d.identifier,
            Self::Faq(d) => &d.identifier,
            Self::Scholarly(d) => &d.article.identifier,
        }
    }

    /// The document as a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value, GenerationError> {
        serde_json::to_value(self)
            .map_err(|e| GenerationError::Canonicalization(e.into()))
    }

    /// RFC 8785 canonical bytes.
    pub fn to_canonical_json(&self) -> Result<CanonicalBytes, GenerationError> {
        Ok(CanonicalBytes::new(self)?)
    }

    /// SHA-256 hex digest of the canonical bytes. Equal documents share a
    /// digest regardless of how they were produced.
    pub fn content_digest(&self) -> Result<String, GenerationError> {
        Ok(sha256_hex(&self.to_canonical_json()?))
    }
}

impl From<ArticleDoc> for StructuredDocument {
    fn from(doc: ArticleDoc) -> Self {
        Self::Article(doc)
    }
}

impl From<BreadcrumbDoc> for StructuredDocument {
    fn from(doc: BreadcrumbDoc) -> Self {
        Self::Breadcrumb(doc)
    }
}

impl From<FaqDoc> for StructuredDocument {
    fn from(doc: FaqDoc) -> Self {
        Self::Faq(doc)
    }
}

impl From<ScholarlyDoc> for StructuredDocument {
    fn from(doc: ScholarlyDoc) -> Self {
        Self::Scholarly(doc)
    }
}

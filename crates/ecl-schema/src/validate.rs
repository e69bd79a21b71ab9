//! # Document Validation
//!
//! Every generated document is checked against an embedded JSON Schema
//! (Draft 2020-12) before it leaves the generator. The schemas pin the
//! `@type` values, both date formats, URL shape, and forbid properties the
//! generator does not emit.
//!
//! Schemas are compiled once when the validator is built; a
//! [`DocumentValidator`] is `Send + Sync` and cheap to share by reference.

use jsonschema::Validator;
use serde_json::Value;

use crate::document::{SchemaType, StructuredDocument};
use crate::error::{GenerationError, ValidationViolations, Violation};

const ARTICLE_SCHEMA: &str = include_str!("../schemas/article.schema.json");
const BREADCRUMB_SCHEMA: &str = include_str!("../schemas/breadcrumb.schema.json");
const FAQ_SCHEMA: &str = include_str!("../schemas/faq.schema.json");
const SCHOLARLY_SCHEMA: &str = include_str!("../schemas/scholarly.schema.json");

/// Compiled validators for every document type.
pub struct DocumentValidator {
    article: Validator,
    breadcrumb: Validator,
    faq: Validator,
    scholarly: Validator,
}

impl std::fmt::Debug for DocumentValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentValidator").finish_non_exhaustive()
    }
}

impl DocumentValidator {
    /// Compile the embedded schemas.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidSchema`] if an embedded schema is
    /// not valid JSON or does not compile.
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self {
            article: compile("article.schema.json", ARTICLE_SCHEMA)?,
            breadcrumb: compile("breadcrumb.schema.json", BREADCRUMB_SCHEMA)?,
            faq: compile("faq.schema.json", FAQ_SCHEMA)?,
            scholarly: compile("scholarly.schema.json", SCHOLARLY_SCHEMA)?,
        })
    }

    /// Schema filename used for a document type.
    pub fn schema_name(schema_type: SchemaType) -> &'static str {
        match schema_type {
            SchemaType::Article => "article.schema.json",
            SchemaType::BreadcrumbList => "breadcrumb.schema.json",
            SchemaType::FaqPage => "faq.schema.json",
            SchemaType::ScholarlyArticle => "scholarly.schema.json",
        }
    }

    /// Validate a generated document.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::SchemaViolation`] listing every violation.
    pub fn validate(&self, document: &StructuredDocument) -> Result<(), GenerationError> {
        let instance = document.to_json_value()?;
        self.validate_value(document.schema_type(), &instance)
    }

    /// Validate a raw JSON value against the schema for `schema_type`.
    pub fn validate_value(
        &self,
        schema_type: SchemaType,
        instance: &Value,
    ) -> Result<(), GenerationError> {
        let validator = match schema_type {
            SchemaType::Article => &self.article,
            SchemaType::BreadcrumbList => &self.breadcrumb,
            SchemaType::FaqPage => &self.faq,
            SchemaType::ScholarlyArticle => &self.scholarly,
        };

        let errors: Vec<Violation> = validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            let schema = Self::schema_name(schema_type);
            tracing::error!(schema, count = errors.len(), "generated document failed validation");
            Err(GenerationError::SchemaViolation {
                schema,
                violations: ValidationViolations(errors),
            })
        }
    }
}

fn compile(name: &'static str, source: &str) -> Result<Validator, GenerationError> {
    let schema: Value =
        serde_json::from_str(source).map_err(|e| GenerationError::InvalidSchema {
            schema: name,
            reason: format!("invalid JSON: {e}"),
        })?;
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&schema)
        .map_err(|e| GenerationError::InvalidSchema {
            schema: name,
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> DocumentValidator {
        DocumentValidator::new().expect("embedded schemas compile")
    }

    fn breadcrumb() -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "BreadcrumbList",
            "url": "https://example.org/en/llc-guide",
            "inLanguage": "en",
            "identifier": "ecl-gde-00014",
            "itemListElement": [
                {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://example.org/en"},
                {"@type": "ListItem", "position": 2, "name": "LLC", "item": "https://example.org/en/llc-guide"}
            ]
        })
    }

    #[test]
    fn valid_breadcrumb_passes() {
        validator()
            .validate_value(SchemaType::BreadcrumbList, &breadcrumb())
            .expect("valid");
    }

    #[test]
    fn single_crumb_fails() {
        let mut doc = breadcrumb();
        doc["itemListElement"]
            .as_array_mut()
            .expect("array")
            .truncate(1);
        let err = validator()
            .validate_value(SchemaType::BreadcrumbList, &doc)
            .expect_err("too short");
        match err {
            GenerationError::SchemaViolation { schema, violations } => {
                assert_eq!(schema, "breadcrumb.schema.json");
                assert!(!violations.is_empty());
                assert!(violations.violations()[0]
                    .instance_path
                    .contains("itemListElement"));
            }
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn unknown_property_fails() {
        let mut doc = breadcrumb();
        doc["extra"] = json!(true);
        assert!(validator()
            .validate_value(SchemaType::BreadcrumbList, &doc)
            .is_err());
    }

    #[test]
    fn article_date_format_is_enforced() {
        let doc = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": "T",
            "author": {"@id": "https://example.org/#author"},
            "publisher": {"@id": "https://example.org/#organization"},
            "url": "https://example.org/en/t",
            "mainEntityOfPage": {"@type": "WebPage", "@id": "https://example.org/en/t"},
            "datePublished": "2025/06/01",
            "dateModified": "2025-06-01",
            "inLanguage": "en",
            "version": "1.0",
            "identifier": "ecl-gde-00001",
            "citationMetadata": {
                "citation_title": "T",
                "citation_publisher": "P",
                "citation_publication_date": "2025/06/01",
                "citation_lastmod": "2025/06/01",
                "citation_version": "1.0",
                "citation_language": "en",
                "citation_fulltext_html_url": "https://example.org/en/t",
                "citation_id": "ecl-gde-00001"
            }
        });
        let err = validator()
            .validate_value(SchemaType::Article, &doc)
            .expect_err("slash date in datePublished");
        assert!(err.to_string().contains("datePublished"));
    }
}

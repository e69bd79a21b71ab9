//! Primary-source entries.

use serde::Serialize;

use ecl_core::{Locale, LocalizedText, ValidationError};

use crate::error::AuthorityError;
use crate::tier::{AuthorityTier, Weight};

/// A primary legal source supporting a catalog entry.
///
/// `canonical_id` (e.g. `US-26USC-7701`) identifies the instrument
/// independently of how its citation is written; `jurisdiction` names the
/// issuing system (`US`, `US-DE`, `TR`). Both start blank and are set with
/// [`identified`](SourceEntry::identified); the source registry refuses
/// entries where either is still blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceEntry {
    citation: String,
    weight: Weight,
    #[serde(skip_serializing_if = "Option::is_none")]
    tier: Option<AuthorityTier>,
    summary: LocalizedText,
    canonical_id: String,
    jurisdiction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl SourceEntry {
    /// An untiered entry with an explicit weight.
    ///
    /// # Errors
    ///
    /// [`AuthorityError::EmptyCitation`] for a blank citation.
    pub fn new(
        citation: impl Into<String>,
        weight: Weight,
        summary: LocalizedText,
    ) -> Result<Self, AuthorityError> {
        Ok(Self {
            citation: non_blank(citation.into())?,
            weight,
            tier: None,
            summary,
            canonical_id: String::new(),
            jurisdiction: String::new(),
            url: None,
        })
    }

    /// A tiered entry; the weight is the tier's default.
    pub fn with_tier(
        citation: impl Into<String>,
        tier: AuthorityTier,
        summary: LocalizedText,
    ) -> Result<Self, AuthorityError> {
        Ok(Self {
            citation: non_blank(citation.into())?,
            weight: tier.default_weight(),
            tier: Some(tier),
            summary,
            canonical_id: String::new(),
            jurisdiction: String::new(),
            url: None,
        })
    }

    /// Override the weight of a tiered entry.
    ///
    /// Used for sources whose force departs from their tier's default, such
    /// as agency guidance that a statute expressly incorporates.
    pub fn weighted(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the stable instrument id and jurisdiction. Both are trimmed.
    pub fn identified(
        mut self,
        canonical_id: impl Into<String>,
        jurisdiction: impl Into<String>,
    ) -> Self {
        self.canonical_id = canonical_id.into().trim().to_string();
        self.jurisdiction = jurisdiction.into().trim().to_string();
        self
    }

    /// Link to the official text. A blank URL clears it.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into().trim().to_string();
        self.url = (!url.is_empty()).then_some(url);
        self
    }

    /// Replace the citation text, e.g. with its normalized form.
    pub fn with_citation(mut self, citation: impl Into<String>) -> Result<Self, AuthorityError> {
        self.citation = non_blank(citation.into())?;
        Ok(self)
    }

    /// The legal citation string.
    pub fn citation(&self) -> &str {
        &self.citation
    }

    /// Binding force.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Named tier, if classified.
    pub fn tier(&self) -> Option<AuthorityTier> {
        self.tier
    }

    /// Stable instrument id; blank until [`identified`](Self::identified).
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    /// Issuing jurisdiction; blank until [`identified`](Self::identified).
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Official text, if linked.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Localized one-sentence summary.
    pub fn summary(&self) -> &LocalizedText {
        &self.summary
    }

    /// Summary in one locale, without fallback.
    pub fn summary_in(&self, locale: &Locale) -> Result<&str, ValidationError> {
        self.summary.require(locale)
    }
}

fn non_blank(citation: String) -> Result<String, AuthorityError> {
    let trimmed = citation.trim();
    if trimmed.is_empty() {
        return Err(AuthorityError::EmptyCitation);
    }
    Ok(trimmed.to_string())
}

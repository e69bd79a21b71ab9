//! # Scope Classification and the Authority Section
//!
//! For each topic an entry addresses, editors list what the cited
//! authority settles ("resolves") and what it leaves open ("does not
//! resolve"). The two lists must be disjoint: a bullet cannot be both.
//!
//! An [`AuthoritySection`] groups the per-entry authority material:
//! interpretive notes, scope classifications, case illustrations and
//! unresolved items. All prose is [`LocalizedText`] supplied by authors.

use serde::Serialize;

use ecl_core::{normalize_label_text, LocalizedText};

use crate::error::AuthorityError;

/// A short analytical note on how conflicts are treated.
pub type InterpretiveNote = LocalizedText;

/// One bullet of a resolves / does-not-resolve list.
pub type ResolutionBullet = LocalizedText;

/// A question the cited authority leaves open.
pub type UnresolvedItem = LocalizedText;

/// A topic's claims partitioned into settled and open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScopeClassification {
    /// Topic label.
    pub topic: String,
    /// Claims the authority settles.
    pub settled: Vec<ResolutionBullet>,
    /// Claims the authority leaves open.
    pub open: Vec<ResolutionBullet>,
}

/// Partition a topic's bullets into settled and open.
///
/// Bullets are compared per locale on their trimmed text; a bullet overlaps
/// when any locale's text appears in both lists.
///
/// # Errors
///
/// - [`AuthorityError::EmptyTopic`] for a blank topic.
/// - [`AuthorityError::OverlappingScope`] for the first overlapping bullet.
pub fn classify_scope(
    topic: &str,
    resolves: Vec<ResolutionBullet>,
    does_not_resolve: Vec<ResolutionBullet>,
) -> Result<ScopeClassification, AuthorityError> {
    let topic = normalize_label_text(topic);
    if topic.is_empty() {
        return Err(AuthorityError::EmptyTopic);
    }
    check_disjoint(&topic, &resolves, &does_not_resolve)?;
    Ok(ScopeClassification {
        topic,
        settled: resolves,
        open: does_not_resolve,
    })
}

fn check_disjoint(
    topic: &str,
    resolves: &[ResolutionBullet],
    does_not_resolve: &[ResolutionBullet],
) -> Result<(), AuthorityError> {
    for settled in resolves {
        for open in does_not_resolve {
            let clash = settled
                .iter()
                .find(|(locale, text)| open.get(locale) == Some(*text));
            if let Some((_, text)) = clash {
                return Err(AuthorityError::OverlappingScope {
                    topic: topic.to_string(),
                    bullet: text.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// A decided case illustrating how a principle is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseIllustration {
    /// Case citation.
    pub citation: String,
    /// The principle the case illustrates.
    pub principle: LocalizedText,
}

/// Authority material attached to one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthoritySection {
    /// Notes on how conflicts between sources are treated.
    pub interpretive_notes: Vec<InterpretiveNote>,
    /// Per-topic scope classifications.
    pub scopes: Vec<ScopeClassification>,
    /// Case illustrations.
    pub case_illustrations: Vec<CaseIllustration>,
    /// Open questions the authority does not reach.
    pub unresolved: Vec<UnresolvedItem>,
}

impl AuthoritySection {
    /// Re-check every scope's disjointness and topic.
    ///
    /// Scopes built through [`classify_scope`] always pass; this guards
    /// sections assembled field by field.
    pub fn validate(&self) -> Result<(), AuthorityError> {
        for scope in &self.scopes {
            if scope.topic.trim().is_empty() {
                return Err(AuthorityError::EmptyTopic);
            }
            check_disjoint(&scope.topic, &scope.settled, &scope.open)?;
        }
        if self
            .case_illustrations
            .iter()
            .any(|c| c.citation.trim().is_empty())
        {
            return Err(AuthorityError::EmptyCitation);
        }
        Ok(())
    }

    /// Whether the section carries no material.
    pub fn is_empty(&self) -> bool {
        self.interpretive_notes.is_empty()
            && self.scopes.is_empty()
            && self.case_illustrations.is_empty()
            && self.unresolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecl_core::{Locale, LocaleSet};

    fn bullet(en: &str, tr: &str) -> ResolutionBullet {
        let set = LocaleSet::parse_list("en,tr").unwrap();
        LocalizedText::new(
            &set,
            [(Locale::new("en").unwrap(), en), (Locale::new("tr").unwrap(), tr)],
        )
        .unwrap()
    }

    #[test]
    fn disjoint_lists_classify() {
        let scope = classify_scope(
            "  Default  classification ",
            vec![bullet("Single-member LLCs are disregarded.", "Tek üyeli LLC'ler yok sayılır.")],
            vec![bullet("State franchise tax treatment.", "Eyalet franchise vergisi.")],
        )
        .unwrap();
        assert_eq!(scope.topic, "Default classification");
        assert_eq!(scope.settled.len(), 1);
        assert_eq!(scope.open.len(), 1);
    }

    #[test]
    fn bullet_in_both_lists_rejected() {
        let shared = bullet("Check-the-box election timing.", "Seçim zamanlaması.");
        let err = classify_scope("Elections", vec![shared.clone()], vec![shared]).unwrap_err();
        assert!(matches!(err, AuthorityError::OverlappingScope { ref topic, .. } if topic == "Elections"));
    }

    #[test]
    fn overlap_in_one_locale_is_enough() {
        let settled = bullet("Timing of Form 8832.", "Form 8832 zamanlaması.");
        let open = bullet("Late election relief.", "Form 8832 zamanlaması.");
        let err = classify_scope("Elections", vec![settled], vec![open]).unwrap_err();
        match err {
            AuthorityError::OverlappingScope { bullet, .. } => {
                assert_eq!(bullet, "Form 8832 zamanlaması.")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_topic_rejected() {
        assert_eq!(
            classify_scope("   ", vec![], vec![]).unwrap_err(),
            AuthorityError::EmptyTopic
        );
    }

    #[test]
    fn section_validate_catches_hand_built_overlap() {
        let shared = bullet("Same.", "Aynı.");
        let section = AuthoritySection {
            scopes: vec![ScopeClassification {
                topic: "T".into(),
                settled: vec![shared.clone()],
                open: vec![shared],
            }],
            ..AuthoritySection::default()
        };
        assert!(section.validate().is_err());
        assert!(!section.is_empty());
        assert!(AuthoritySection::default().validate().is_ok());
        assert!(AuthoritySection::default().is_empty());
    }

    #[test]
    fn section_validate_rejects_blank_case_citation() {
        let section = AuthoritySection {
            case_illustrations: vec![CaseIllustration {
                citation: " ".into(),
                principle: bullet("Principle.", "İlke."),
            }],
            ..AuthoritySection::default()
        };
        assert_eq!(section.validate().unwrap_err(), AuthorityError::EmptyCitation);
    }
}

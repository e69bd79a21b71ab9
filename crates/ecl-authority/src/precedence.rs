//! # Precedence Resolver
//!
//! Decides which of two conflicting sources controls.
//!
//! ## Rules, in order
//!
//! 1. Different weights: the binding entry wins.
//! 2. Equal weights, both entries tiered, tiers on different ladder levels:
//!    the higher level wins.
//! 3. Otherwise: [`AuthorityError::AmbiguousPrecedence`]. Resolution is
//!    never guessed.
//!
//! Untiered entries therefore follow the plain two-level model. Co-equal
//! tiers (statute and treaty) stay ambiguous: which controls depends on
//! enactment order, which the catalog does not record.
//!
//! Every rule is symmetric, so `resolve(a, b)` and `resolve(b, a)` select
//! the same entry.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::AuthorityError;
use crate::source::SourceEntry;
use crate::tier::{TierLadder, Weight};

/// Outcome of [`PrecedenceResolver::resolve_or_flag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// This entry controls.
    Controls(&'a SourceEntry),
    /// No rule separates the entries; an editor must decide.
    NeedsReview(ReviewFlag),
}

/// An ambiguous pair routed to human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewFlag {
    /// Citation of the first source.
    pub first: String,
    /// Citation of the second source.
    pub second: String,
    /// The weight both sources share.
    pub weight: Weight,
    /// Human-readable reason.
    pub reason: String,
}

/// Applies the precedence rules against a tier ladder.
#[derive(Debug, Clone, Default)]
pub struct PrecedenceResolver {
    ladder: TierLadder,
}

impl PrecedenceResolver {
    /// A resolver using a custom ladder.
    pub fn new(ladder: TierLadder) -> Self {
        Self { ladder }
    }

    /// The ladder in use.
    pub fn ladder(&self) -> &TierLadder {
        &self.ladder
    }

    /// Select the controlling entry.
    ///
    /// # Errors
    ///
    /// [`AuthorityError::AmbiguousPrecedence`] when no rule separates them.
    pub fn resolve<'a>(
        &self,
        a: &'a SourceEntry,
        b: &'a SourceEntry,
    ) -> Result<&'a SourceEntry, AuthorityError> {
        match self.compare(a, b) {
            Some(Ordering::Less) => Ok(a),
            Some(Ordering::Greater) => Ok(b),
            _ => Err(AuthorityError::AmbiguousPrecedence {
                first: a.citation().to_string(),
                second: b.citation().to_string(),
                weight: a.weight(),
            }),
        }
    }

    /// Like [`resolve`](Self::resolve), but routes ambiguity to review
    /// instead of failing.
    pub fn resolve_or_flag<'a>(&self, a: &'a SourceEntry, b: &'a SourceEntry) -> Resolution<'a> {
        match self.resolve(a, b) {
            Ok(winner) => Resolution::Controls(winner),
            Err(err) => {
                tracing::warn!(
                    first = a.citation(),
                    second = b.citation(),
                    weight = %a.weight(),
                    "precedence ambiguous, flagged for review"
                );
                Resolution::NeedsReview(ReviewFlag {
                    first: a.citation().to_string(),
                    second: b.citation().to_string(),
                    weight: a.weight(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Entries ordered strongest first: weight, then ladder level (unranked
    /// last), then citation text, then canonical id.
    pub fn sort_by_authority<'a>(&self, entries: &'a [SourceEntry]) -> Vec<&'a SourceEntry> {
        let mut sorted: Vec<&SourceEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.weight()
                .rank()
                .cmp(&b.weight().rank())
                .then_with(|| self.sort_level(a).cmp(&self.sort_level(b)))
                .then_with(|| a.citation().cmp(b.citation()))
                .then_with(|| a.canonical_id().cmp(b.canonical_id()))
        });
        sorted
    }

    /// Review flags for every pair the rules cannot separate, adjacent in
    /// the authority ordering or not. Pairs are reported in that ordering.
    ///
    /// Only entries of equal weight can be ambiguous, so each pair is
    /// checked within its weight class.
    pub fn flag_ambiguities(&self, entries: &[SourceEntry]) -> Vec<ReviewFlag> {
        let sorted = self.sort_by_authority(entries);
        let mut flags = Vec::new();
        for (i, first) in sorted.iter().enumerate() {
            for second in sorted[i + 1..]
                .iter()
                .take_while(|e| e.weight() == first.weight())
            {
                if let Resolution::NeedsReview(flag) = self.resolve_or_flag(first, second) {
                    flags.push(flag);
                }
            }
        }
        flags
    }

    /// `Less` means `a` is stronger. `None` means no rule applies.
    fn compare(&self, a: &SourceEntry, b: &SourceEntry) -> Option<Ordering> {
        let by_weight = a.weight().rank().cmp(&b.weight().rank());
        if by_weight.is_ne() {
            return Some(by_weight);
        }
        let level_a = self.ladder.level_of(a.tier()?)?;
        let level_b = self.ladder.level_of(b.tier()?)?;
        let by_level = level_a.cmp(&level_b);
        by_level.is_ne().then_some(by_level)
    }

    fn sort_level(&self, entry: &SourceEntry) -> usize {
        entry
            .tier()
            .and_then(|t| self.ladder.level_of(t))
            .unwrap_or(usize::MAX)
    }
}

/// Resolve under the standard ladder.
///
/// # Errors
///
/// [`AuthorityError::AmbiguousPrecedence`] when no rule separates the entries.
pub fn resolve_conflict<'a>(
    a: &'a SourceEntry,
    b: &'a SourceEntry,
) -> Result<&'a SourceEntry, AuthorityError> {
    PrecedenceResolver::default().resolve(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::AuthorityTier;
    use ecl_core::{Locale, LocaleSet, LocalizedText};
    use proptest::prelude::*;

    fn summary() -> LocalizedText {
        let set = LocaleSet::parse_list("en").unwrap();
        LocalizedText::new(&set, [(Locale::new("en").unwrap(), "Summary.")]).unwrap()
    }

    fn plain(citation: &str, weight: Weight) -> SourceEntry {
        SourceEntry::new(citation, weight, summary()).unwrap()
    }

    fn tiered(citation: &str, tier: AuthorityTier) -> SourceEntry {
        SourceEntry::with_tier(citation, tier, summary()).unwrap()
    }

    #[test]
    fn binding_beats_persuasive_in_either_order() {
        let statute = plain("26 U.S.C. § 7701", Weight::Binding);
        let guidance = plain("Rev. Proc. 2013-30", Weight::Persuasive);
        assert_eq!(resolve_conflict(&statute, &guidance).unwrap(), &statute);
        assert_eq!(resolve_conflict(&guidance, &statute).unwrap(), &statute);
    }

    #[test]
    fn equal_untiered_weights_are_ambiguous() {
        let a = plain("26 U.S.C. § 7701", Weight::Binding);
        let b = plain("26 C.F.R. § 301.7701-3", Weight::Binding);
        let err = resolve_conflict(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            AuthorityError::AmbiguousPrecedence { weight: Weight::Binding, .. }
        ));
    }

    #[test]
    fn ladder_separates_equal_weights() {
        let statute = tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute);
        let regulation = tiered("26 C.F.R. § 301.7701-3", AuthorityTier::FederalRegulation);
        assert_eq!(resolve_conflict(&regulation, &statute).unwrap(), &statute);

        let guidance = tiered("Rev. Proc. 2013-30", AuthorityTier::AgencyGuidance);
        let form = tiered("Form 8832 Instructions", AuthorityTier::FormInstruction);
        assert_eq!(resolve_conflict(&form, &guidance).unwrap(), &guidance);
    }

    #[test]
    fn statute_and_treaty_stay_ambiguous() {
        let statute = tiered("26 U.S.C. § 894", AuthorityTier::FederalStatute);
        let treaty = tiered("US-Turkey Income Tax Treaty art. 7", AuthorityTier::Treaty);
        assert!(resolve_conflict(&statute, &treaty).is_err());
    }

    #[test]
    fn one_untiered_side_falls_back_to_two_level_model() {
        let statute = tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute);
        let other = plain("Del. Code Ann. tit. 6, § 18-201", Weight::Binding);
        assert!(resolve_conflict(&statute, &other).is_err());
    }

    #[test]
    fn weight_rule_precedes_ladder() {
        // Guidance promoted to binding outranks a persuasive court opinion,
        // even though both sit below statutes on the ladder.
        let promoted = tiered("Rev. Proc. 2013-30", AuthorityTier::AgencyGuidance)
            .weighted(Weight::Binding);
        let statute_as_persuasive = tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute)
            .weighted(Weight::Persuasive);
        assert_eq!(
            resolve_conflict(&statute_as_persuasive, &promoted).unwrap(),
            &promoted
        );
    }

    #[test]
    fn custom_ladder_leaves_unranked_ambiguous() {
        let resolver = PrecedenceResolver::new(
            TierLadder::new(vec![vec![AuthorityTier::AgencyGuidance]]).unwrap(),
        );
        let a = tiered("Rev. Proc. 2013-30", AuthorityTier::AgencyGuidance);
        let b = tiered("IRS Pub. 3402", AuthorityTier::Publication);
        assert!(resolver.resolve(&a, &b).is_err());
    }

    #[test]
    fn resolve_or_flag_routes_to_review() {
        let resolver = PrecedenceResolver::default();
        let a = plain("A", Weight::Persuasive);
        let b = plain("B", Weight::Persuasive);
        match resolver.resolve_or_flag(&a, &b) {
            Resolution::NeedsReview(flag) => {
                assert_eq!(flag.first, "A");
                assert_eq!(flag.second, "B");
                assert_eq!(flag.weight, Weight::Persuasive);
                assert!(flag.reason.contains("ambiguous"));
            }
            other => panic!("expected review flag, got {other:?}"),
        }
        let c = plain("C", Weight::Binding);
        assert_eq!(resolver.resolve_or_flag(&a, &c), Resolution::Controls(&c));
    }

    #[test]
    fn sort_orders_by_weight_then_level_then_citation() {
        let entries = vec![
            plain("Z untiered binding", Weight::Binding),
            tiered("IRS Pub. 3402", AuthorityTier::Publication),
            tiered("26 C.F.R. § 301.7701-3", AuthorityTier::FederalRegulation),
            tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute),
            tiered("Rev. Proc. 2013-30", AuthorityTier::AgencyGuidance),
        ];
        let resolver = PrecedenceResolver::default();
        let order: Vec<&str> = resolver
            .sort_by_authority(&entries)
            .into_iter()
            .map(SourceEntry::citation)
            .collect();
        assert_eq!(
            order,
            vec![
                "26 U.S.C. § 7701",
                "26 C.F.R. § 301.7701-3",
                "Z untiered binding",
                "Rev. Proc. 2013-30",
                "IRS Pub. 3402",
            ]
        );
    }

    #[test]
    fn equal_citations_sort_by_canonical_id() {
        let entries = vec![
            tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute).identified("US-26USC-7701-B", "US"),
            tiered("26 U.S.C. § 7701", AuthorityTier::FederalStatute).identified("US-26USC-7701-A", "US"),
        ];
        let resolver = PrecedenceResolver::default();
        let ids: Vec<&str> = resolver
            .sort_by_authority(&entries)
            .into_iter()
            .map(SourceEntry::canonical_id)
            .collect();
        assert_eq!(ids, vec!["US-26USC-7701-A", "US-26USC-7701-B"]);
        let reversed: Vec<SourceEntry> = entries.into_iter().rev().collect();
        let ids: Vec<&str> = resolver
            .sort_by_authority(&reversed)
            .into_iter()
            .map(SourceEntry::canonical_id)
            .collect();
        assert_eq!(ids, vec!["US-26USC-7701-A", "US-26USC-7701-B"]);
    }

    #[test]
    fn flags_only_inseparable_pairs() {
        let entries = vec![
            tiered("26 U.S.C. § 894", AuthorityTier::FederalStatute),
            tiered("Treaty art. 7", AuthorityTier::Treaty),
            tiered("26 C.F.R. § 1.894-1", AuthorityTier::FederalRegulation),
        ];
        let flags = PrecedenceResolver::default().flag_ambiguities(&entries);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].first, "26 U.S.C. § 894");
        assert_eq!(flags[0].second, "Treaty art. 7");
    }

    fn arb_entry() -> impl Strategy<Value = SourceEntry> {
        let tier = prop::option::of(prop::sample::select(AuthorityTier::all().to_vec()));
        let weight = prop::bool::ANY.prop_map(|b| if b { Weight::Binding } else { Weight::Persuasive });
        ("[A-Z][a-z]{1,6}", tier, weight).prop_map(|(citation, tier, weight)| match tier {
            Some(t) => tiered(&citation, t).weighted(weight),
            None => plain(&citation, weight),
        })
    }

    proptest! {
        #[test]
        fn resolution_is_order_independent(a in arb_entry(), b in arb_entry()) {
            let forward = resolve_conflict(&a, &b).map(SourceEntry::citation);
            let backward = resolve_conflict(&b, &a).map(SourceEntry::citation);
            prop_assert_eq!(forward.is_ok(), backward.is_ok());
            if let (Ok(f), Ok(r)) = (forward, backward) {
                prop_assert_eq!(f, r);
            }
        }

        #[test]
        fn flags_match_pairwise_resolution(entries in prop::collection::vec(arb_entry(), 0..6)) {
            let resolver = PrecedenceResolver::default();
            let mut ambiguous = 0;
            for i in 0..entries.len() {
                for j in i + 1..entries.len() {
                    if resolver.resolve(&entries[i], &entries[j]).is_err() {
                        ambiguous += 1;
                    }
                }
            }
            prop_assert_eq!(resolver.flag_ambiguities(&entries).len(), ambiguous);
        }

        #[test]
        fn binding_always_wins_against_persuasive(a in arb_entry(), b in arb_entry()) {
            if a.weight() != b.weight() {
                let winner = resolve_conflict(&a, &b).unwrap();
                prop_assert_eq!(winner.weight(), Weight::Binding);
            }
        }
    }
}

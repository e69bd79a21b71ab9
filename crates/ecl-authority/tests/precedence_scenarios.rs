//! # Precedence Scenarios
//!
//! End-to-end checks of the authority model on the source set of a typical
//! entity-formation guide: statute, regulation, agency guidance, form
//! instructions and an informal publication.

use ecl_authority::{
    classify_scope, resolve_conflict, AuthorityError, AuthoritySection, AuthorityTier,
    PrecedenceResolver, Resolution, SourceEntry, Weight,
};
use ecl_core::{Locale, LocaleSet, LocalizedText};

fn locales() -> LocaleSet {
    LocaleSet::parse_list("en,tr").expect("valid locale list")
}

fn text(en: &str, tr: &str) -> LocalizedText {
    LocalizedText::new(
        &locales(),
        [
            (Locale::new("en").expect("en"), en),
            (Locale::new("tr").expect("tr"), tr),
        ],
    )
    .expect("complete localized text")
}

fn llc_sources() -> Vec<SourceEntry> {
    vec![
        SourceEntry::with_tier(
            "IRS Pub. 3402",
            AuthorityTier::Publication,
            text("Plain-language overview.", "Sade dilde genel bakış."),
        )
        .expect("entry"),
        SourceEntry::with_tier(
            "Rev. Proc. 2013-30",
            AuthorityTier::AgencyGuidance,
            text("Late election relief.", "Geç seçim için kolaylık."),
        )
        .expect("entry"),
        SourceEntry::with_tier(
            "26 C.F.R. § 301.7701-3",
            AuthorityTier::FederalRegulation,
            text("Check-the-box rules.", "Kutu işaretleme kuralları."),
        )
        .expect("entry"),
        SourceEntry::with_tier(
            "26 U.S.C. § 7701",
            AuthorityTier::FederalStatute,
            text("Statutory definitions.", "Kanuni tanımlar."),
        )
        .expect("entry"),
        SourceEntry::with_tier(
            "Form 8832 Instructions",
            AuthorityTier::FormInstruction,
            text("How to elect.", "Seçim nasıl yapılır."),
        )
        .expect("entry"),
    ]
}

#[test]
fn binding_statute_controls_persuasive_guidance() {
    let statute = SourceEntry::new(
        "26 U.S.C. § 7701",
        Weight::Binding,
        text("Statutory definitions.", "Kanuni tanımlar."),
    )
    .expect("statute");
    let guidance = SourceEntry::new(
        "Rev. Proc. 2013-30",
        Weight::Persuasive,
        text("Late election relief.", "Geç seçim için kolaylık."),
    )
    .expect("guidance");

    assert_eq!(resolve_conflict(&statute, &guidance), Ok(&statute));
    assert_eq!(resolve_conflict(&guidance, &statute), Ok(&statute));
}

#[test]
fn full_ladder_orders_llc_sources() {
    let sources = llc_sources();
    let resolver = PrecedenceResolver::default();
    let ordered: Vec<&str> = resolver
        .sort_by_authority(&sources)
        .into_iter()
        .map(SourceEntry::citation)
        .collect();
    assert_eq!(
        ordered,
        vec![
            "26 U.S.C. § 7701",
            "26 C.F.R. § 301.7701-3",
            "Rev. Proc. 2013-30",
            "Form 8832 Instructions",
            "IRS Pub. 3402",
        ]
    );
    assert!(resolver.flag_ambiguities(&sources).is_empty());
}

#[test]
fn every_adjacent_pair_resolves_to_the_stronger() {
    let sources = llc_sources();
    let resolver = PrecedenceResolver::default();
    let ordered = resolver.sort_by_authority(&sources);
    for pair in ordered.windows(2) {
        match resolver.resolve_or_flag(pair[0], pair[1]) {
            Resolution::Controls(winner) => assert_eq!(winner, pair[0]),
            Resolution::NeedsReview(flag) => panic!("unexpected review flag: {flag:?}"),
        }
    }
}

#[test]
fn two_untiered_binding_sources_need_review() {
    let a = SourceEntry::new("Del. Code Ann. tit. 6, § 18-201", Weight::Binding, text("a", "a"))
        .expect("entry");
    let b = SourceEntry::new("Wyo. Stat. § 17-29-201", Weight::Binding, text("b", "b"))
        .expect("entry");
    let err = resolve_conflict(&a, &b).expect_err("same weight must not be guessed");
    assert!(matches!(err, AuthorityError::AmbiguousPrecedence { .. }));
    assert!(matches!(
        PrecedenceResolver::default().resolve_or_flag(&a, &b),
        Resolution::NeedsReview(_)
    ));
}

#[test]
fn untiered_source_is_flagged_against_every_tiered_peer() {
    let sources = vec![
        SourceEntry::with_tier(
            "26 U.S.C. § 7701",
            AuthorityTier::FederalStatute,
            text("Statutory definitions.", "Kanuni tanımlar."),
        )
        .expect("entry"),
        SourceEntry::with_tier(
            "26 C.F.R. § 301.7701-3",
            AuthorityTier::FederalRegulation,
            text("Check-the-box rules.", "Kutu işaretleme kuralları."),
        )
        .expect("entry"),
        SourceEntry::new(
            "Del. Code Ann. tit. 6, § 18-201",
            Weight::Binding,
            text("Formation.", "Kuruluş."),
        )
        .expect("entry"),
    ];
    let resolver = PrecedenceResolver::default();

    let pairs: Vec<(String, String)> = resolver
        .flag_ambiguities(&sources)
        .into_iter()
        .map(|flag| (flag.first, flag.second))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (
                "26 U.S.C. § 7701".to_string(),
                "Del. Code Ann. tit. 6, § 18-201".to_string()
            ),
            (
                "26 C.F.R. § 301.7701-3".to_string(),
                "Del. Code Ann. tit. 6, § 18-201".to_string()
            ),
        ]
    );
}

#[test]
fn authority_section_assembles_and_validates() {
    let scope = classify_scope(
        "Default classification",
        vec![text("Single-member LLCs are disregarded by default.", "Tek üyeli LLC'ler varsayılan olarak yok sayılır.")],
        vec![text("State-level tax treatment.", "Eyalet düzeyinde vergilendirme.")],
    )
    .expect("disjoint scope");
    let section = AuthoritySection {
        interpretive_notes: vec![text(
            "Regulations yield to the statute they implement.",
            "Yönetmelikler uyguladıkları kanuna tabidir.",
        )],
        scopes: vec![scope],
        case_illustrations: vec![],
        unresolved: vec![text("Series LLC classification.", "Seri LLC sınıflandırması.")],
    };
    assert!(section.validate().is_ok());
    let json = serde_json::to_value(&section).expect("serializes");
    assert_eq!(json["scopes"][0]["topic"], "Default classification");
    assert_eq!(
        json["unresolved"][0]["tr"],
        "Seri LLC sınıflandırması."
    );
}

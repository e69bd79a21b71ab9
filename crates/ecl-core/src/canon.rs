//! # Citation Canon
//!
//! Text normalization for legal citation strings. Applied to citation fields
//! only; prose is never rewritten.
//!
//! Rules, applied in order:
//!
//! 1. Runs of spaces collapse to one.
//! 2. `USC` / `CFR` after a title number become `U.S.C.` / `C.F.R.`
//!    (`26 USC §7701` → `26 U.S.C. §7701`).
//! 3. `§§` and `§` are followed by exactly one space.
//! 4. A hyphen between parenthesized subsections becomes an en dash
//!    (`(a)-(c)` → `(a)–(c)`).
//! 5. Leading and trailing whitespace is trimmed.
//!
//! Normalization is idempotent: normalizing normalized text is a no-op.

use std::sync::LazyLock;

use regex::Regex;

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r" {2,}"));
static USC_SPACED: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+USC(\s)"));
static USC_SECTION: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+USC§"));
static USC_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+USC$"));
static CFR_SPACED: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+CFR(\s)"));
static CFR_SECTION: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+CFR§"));
static CFR_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(\d)\s+CFR$"));
// Matches start at the sign itself, so adjacent signs never share a match.
static SECTION_SIGN: LazyLock<Regex> = LazyLock::new(|| compile(r"(§{1,2})\s*([^§\s])"));
static SUBSECTION_RANGE: LazyLock<Regex> = LazyLock::new(|| compile(r"\((\w+)\)-\((\w+)\)"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex pattern for citation canon")
}

/// Normalize a legal citation string.
pub fn normalize_citation_text(input: &str) -> String {
    let s = MULTI_SPACE.replace_all(input, " ");
    let s = USC_SPACED.replace_all(&s, "$1 U.S.C.$2");
    let s = USC_SECTION.replace_all(&s, "$1 U.S.C. §");
    let s = USC_END.replace_all(&s, "$1 U.S.C.");
    let s = CFR_SPACED.replace_all(&s, "$1 C.F.R.$2");
    let s = CFR_SECTION.replace_all(&s, "$1 C.F.R. §");
    let s = CFR_END.replace_all(&s, "$1 C.F.R.");
    let s = SECTION_SIGN.replace_all(&s, "$1 $2");
    let s = SUBSECTION_RANGE.replace_all(&s, "($1)–($2)");
    s.trim().to_string()
}

/// Normalize a short label: collapse runs of spaces and trim.
pub fn normalize_label_text(input: &str) -> String {
    MULTI_SPACE.replace_all(input, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usc_expanded() {
        assert_eq!(
            normalize_citation_text("26 USC §7701"),
            "26 U.S.C. § 7701"
        );
        assert_eq!(normalize_citation_text("26 USC§7701"), "26 U.S.C. § 7701");
        assert_eq!(normalize_citation_text("15 USC"), "15 U.S.C.");
    }

    #[test]
    fn cfr_expanded() {
        assert_eq!(
            normalize_citation_text("26 CFR 301.7701-3"),
            "26 C.F.R. 301.7701-3"
        );
    }

    #[test]
    fn section_spacing() {
        assert_eq!(normalize_citation_text("§301.7701-3"), "§ 301.7701-3");
        assert_eq!(normalize_citation_text("§§1-5"), "§§ 1-5");
        assert_eq!(normalize_citation_text("§§ 1-5"), "§§ 1-5");
        assert_eq!(normalize_citation_text("§  12"), "§ 12");
    }

    #[test]
    fn back_to_back_section_signs_all_spaced() {
        assert_eq!(normalize_citation_text("a§b§c"), "a§ b§ c");
        assert_eq!(
            normalize_citation_text("26 U.S.C. §7701, §6038A"),
            "26 U.S.C. § 7701, § 6038A"
        );
        assert_eq!(normalize_citation_text("§§1-5§9"), "§§ 1-5§ 9");
    }

    #[test]
    fn subsection_range_uses_en_dash() {
        assert_eq!(
            normalize_citation_text("26 U.S.C. § 7701(a)-(c)"),
            "26 U.S.C. § 7701(a)–(c)"
        );
    }

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(
            normalize_citation_text("  Del. Code  Ann. tit. 6,  § 18-201 "),
            "Del. Code Ann. tit. 6, § 18-201"
        );
    }

    #[test]
    fn idempotent() {
        for input in [
            "26 USC §7701(a)-(b)",
            "§§1-5 and §9",
            "26 CFR§301.7701-3",
            "Rev. Proc. 2013-30",
        ] {
            let once = normalize_citation_text(input);
            assert_eq!(normalize_citation_text(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn labels_only_collapse_spaces() {
        assert_eq!(normalize_label_text("  LLC   Formation "), "LLC Formation");
        assert_eq!(normalize_label_text("§7701"), "§7701");
    }
}

//! Page-supplied inputs.
//!
//! The catalog core never embeds prose. Titles, descriptions, keywords,
//! breadcrumb labels and FAQ text arrive from the page layer through these
//! types, either for one locale ([`PageFields`]) or for every configured
//! locale at once ([`PageContent`]).

use serde::Serialize;

use ecl_core::{Locale, LocalizedText};

/// Page fields for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageFields {
    /// Page title; required.
    pub title: String,
    /// Meta description; omitted from output when blank.
    pub description: Option<String>,
    /// Keywords in display order.
    pub keywords: Vec<String>,
    /// Overrides the slug segment of the canonical URL, e.g.
    /// `library/llc-guide`. Must not be blank when present.
    pub canonical_path: Option<String>,
}

impl PageFields {
    /// Fields with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Set the canonical path override.
    pub fn with_canonical_path(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }
}

/// Page fields for every configured locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// Localized title.
    pub title: LocalizedText,
    /// Localized description.
    pub description: Option<LocalizedText>,
    /// Localized keywords, in display order.
    pub keywords: Vec<LocalizedText>,
    /// Canonical path override shared by all locales.
    pub canonical_path: Option<String>,
}

impl PageContent {
    /// Content with only a title.
    pub fn titled(title: LocalizedText) -> Self {
        Self {
            title,
            description: None,
            keywords: Vec::new(),
            canonical_path: None,
        }
    }

    /// Project to one locale. Absent translations become blank fields,
    /// which generation then reports as incomplete.
    pub fn fields_for(&self, locale: &Locale) -> PageFields {
        PageFields {
            title: self.title.get(locale).unwrap_or_default().to_string(),
            description: self
                .description
                .as_ref()
                .and_then(|d| d.get(locale))
                .map(str::to_string),
            keywords: self
                .keywords
                .iter()
                .filter_map(|k| k.get(locale))
                .map(str::to_string)
                .collect(),
            canonical_path: self.canonical_path.clone(),
        }
    }
}

/// One breadcrumb: a label and a link.
///
/// Absolute `http(s)` URLs are used as-is; anything else is treated as a
/// site-relative path and joined to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Display label.
    pub name: String,
    /// Absolute URL or site-relative path.
    pub url: String,
}

impl Crumb {
    /// Create a crumb.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// One FAQ question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

impl FaqEntry {
    /// Create an entry.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Fields a scholarly document adds to an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScholarlyFields {
    /// Abstract text.
    pub abstract_text: Option<String>,
    /// Alternative headline.
    pub alternative_headline: Option<String>,
    /// Topic tags, in display order.
    pub about_topics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecl_core::LocaleSet;

    fn loc(tag: &str) -> Locale {
        Locale::new(tag).unwrap()
    }

    #[test]
    fn content_projects_per_locale() {
        let set = LocaleSet::parse_list("en,tr").unwrap();
        let text = |en: &str, tr: &str| {
            LocalizedText::new(&set, [(loc("en"), en), (loc("tr"), tr)]).unwrap()
        };
        let content = PageContent {
            title: text("LLC Formation Guide", "LLC Kuruluş Rehberi"),
            description: Some(text("How to form an LLC.", "LLC nasıl kurulur.")),
            keywords: vec![text("LLC", "LLC"), text("formation", "kuruluş")],
            canonical_path: None,
        };
        let tr = content.fields_for(&loc("tr"));
        assert_eq!(tr.title, "LLC Kuruluş Rehberi");
        assert_eq!(tr.description.as_deref(), Some("LLC nasıl kurulur."));
        assert_eq!(tr.keywords, vec!["LLC", "kuruluş"]);
    }

    #[test]
    fn missing_locale_projects_blank_title() {
        let set = LocaleSet::parse_list("en").unwrap();
        let content = PageContent::titled(
            LocalizedText::new(&set, [(loc("en"), "Title")]).unwrap(),
        );
        assert_eq!(content.fields_for(&loc("tr")).title, "");
    }

    #[test]
    fn builders_compose() {
        let fields = PageFields::titled("T")
            .with_description("D")
            .with_keywords(["a", "b"])
            .with_canonical_path("library/t");
        assert_eq!(fields.keywords.len(), 2);
        assert_eq!(fields.canonical_path.as_deref(), Some("library/t"));
    }
}

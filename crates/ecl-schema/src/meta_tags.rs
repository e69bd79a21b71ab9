//! Citation `<meta>` tags for scholarly indexers.
//!
//! The tag list is derived from the article's [`CitationBlock`], so the
//! head tags and the JSON-LD always agree.

use std::fmt;

use serde::Serialize;

use crate::document::CitationBlock;

/// One `<meta name=".." content="..">` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// The `name` attribute, e.g. `citation_title`.
    pub name: &'static str,
    /// The `content` attribute.
    pub content: String,
}

impl MetaTag {
    fn new(name: &'static str, content: &str) -> Self {
        Self {
            name,
            content: content.to_string(),
        }
    }

    /// HTML rendering with attribute escaping.
    pub fn to_html(&self) -> String {
        format!(
            "<meta name=\"{}\" content=\"{}\">",
            self.name,
            escape_attribute(&self.content)
        )
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Tags for a citation block, in the block's field order.
pub fn citation_meta_tags(block: &CitationBlock) -> Vec<MetaTag> {
    let mut tags = vec![
        MetaTag::new("citation_title", &block.citation_title),
        MetaTag::new("citation_publisher", &block.citation_publisher),
        MetaTag::new("citation_publication_date", &block.citation_publication_date),
        MetaTag::new("citation_lastmod", &block.citation_lastmod),
        MetaTag::new("citation_version", &block.citation_version),
        MetaTag::new("citation_language", &block.citation_language),
        MetaTag::new("citation_fulltext_html_url", &block.citation_fulltext_html_url),
        MetaTag::new("citation_id", &block.citation_id),
    ];
    if let Some(keywords) = &block.citation_keywords {
        tags.push(MetaTag::new("citation_keywords", keywords));
    }
    tags
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> CitationBlock {
        CitationBlock {
            citation_title: "Contracts & \"Consideration\"".into(),
            citation_publisher: "Example Press".into(),
            citation_publication_date: "2025/06/01".into(),
            citation_lastmod: "2026/02/17".into(),
            citation_version: "1.0".into(),
            citation_language: "en".into(),
            citation_fulltext_html_url: "https://example.org/en/contracts".into(),
            citation_id: "ecl-enc-00003".into(),
            citation_keywords: None,
        }
    }

    #[test]
    fn tags_follow_block_order() {
        let names: Vec<&str> = citation_meta_tags(&block()).iter().map(|t| t.name).collect();
        assert_eq!(names.first(), Some(&"citation_title"));
        assert_eq!(names.last(), Some(&"citation_id"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn keywords_tag_is_optional() {
        let mut b = block();
        b.citation_keywords = Some("contracts, consideration".into());
        let tags = citation_meta_tags(&b);
        assert_eq!(tags.len(), 9);
        assert_eq!(tags[8].content, "contracts, consideration");
    }

    #[test]
    fn attributes_are_escaped() {
        let html = citation_meta_tags(&block())[0].to_html();
        assert_eq!(
            html,
            "<meta name=\"citation_title\" content=\"Contracts &amp; &quot;Consideration&quot;\">"
        );
    }
}

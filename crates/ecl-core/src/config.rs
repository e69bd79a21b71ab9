//! Site configuration.
//!
//! Build-time configuration is the site root, the supported locale list and
//! the publisher name used in citation metadata. It is loaded from YAML and
//! may be overridden by environment-style keys:
//!
//! - `ECL_SITE_ROOT` replaces `site_root`
//! - `ECL_LOCALES` replaces `locales` (comma-separated, e.g. `en,tr`)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{Locale, LocaleSet};

/// Validated site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    site_root: String,
    locales: LocaleSet,
    publisher_name: String,
}

/// Unvalidated on-disk shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSiteConfig {
    site_root: String,
    locales: LocaleSet,
    publisher_name: String,
}

impl SiteConfig {
    /// Build a validated configuration.
    ///
    /// Trailing slashes on the site root are stripped.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSiteRoot`] unless the root is an absolute
    ///   `http://` or `https://` URL with a host.
    /// - [`ConfigError::EmptyPublisher`] for a blank publisher name.
    pub fn new(
        site_root: &str,
        locales: LocaleSet,
        publisher_name: &str,
    ) -> Result<Self, ConfigError> {
        let site_root = normalize_site_root(site_root)?;
        let publisher_name = publisher_name.trim();
        if publisher_name.is_empty() {
            return Err(ConfigError::EmptyPublisher);
        }
        Ok(Self {
            site_root,
            locales,
            publisher_name: publisher_name.to_string(),
        })
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: RawSiteConfig = serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        Self::new(&raw.site_root, raw.locales, &raw.publisher_name)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&text, &path.display().to_string())
    }

    /// Apply `ECL_SITE_ROOT` / `ECL_LOCALES` from `lookup`, typically a
    /// snapshot of the process environment. Blank values are ignored.
    pub fn with_overrides(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let site_root = match present("ECL_SITE_ROOT") {
            Some(root) => normalize_site_root(&root)?,
            None => self.site_root,
        };
        let locales = match present("ECL_LOCALES") {
            Some(list) => LocaleSet::parse_list(&list)?,
            None => self.locales,
        };
        Ok(Self {
            site_root,
            locales,
            publisher_name: self.publisher_name,
        })
    }

    /// Site root without a trailing slash.
    pub fn site_root(&self) -> &str {
        &self.site_root
    }

    /// Supported locales in configured order.
    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    /// Publisher name for citation metadata.
    pub fn publisher_name(&self) -> &str {
        &self.publisher_name
    }

    /// JSON-LD node identifier: `{root}/#{fragment}`.
    pub fn site_id(&self, fragment: &str) -> String {
        format!("{}/#{}", self.site_root, fragment)
    }

    /// Canonical URL of a page: `{root}/{locale}/{path}`.
    ///
    /// Leading and trailing slashes on `path` are ignored.
    pub fn url_for(&self, locale: &Locale, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.site_root,
            locale,
            path.trim_matches('/')
        )
    }
}

fn normalize_site_root(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(h) if !h.is_empty() && !h.contains(char::is_whitespace) => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidSiteRoot(raw.to_string())),
    }
}

//! # ecl-cli — Catalog Command-Line Interface
//!
//! The `ecl` binary loads a catalog YAML file (see [`catalog_file`]) and
//! runs one operation against it.
//!
//! ## Subcommands
//!
//! - `ecl validate <catalog>`: register everything and generate every
//!   page's articles. Exit 1 on the first error.
//! - `ecl generate <catalog> --slug S --locale L --kind article|scholarly`:
//!   print a JSON-LD document, pretty or `--canonical`.
//! - `ecl cite <catalog> --slug S --locale L --style inline|full-reference`
//! - `ecl precedence <catalog> --slug S`: sources in authority order with
//!   every ambiguous pair flagged for review.
//!
//! `ECL_SITE_ROOT` and `ECL_LOCALES` override the
//! site configuration. The binary reads them once at startup into a
//! [`catalog_file::SiteSource`].
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; behavior lives in the domain crates.
//! - Handlers return `anyhow::Result<u8>`; the exit code is the `u8`.

pub mod catalog_file;
pub mod cite;
pub mod generate;
pub mod precedence;
pub mod validate;

use std::path::PathBuf;

use clap::Args;

use ecl_core::{Locale, Slug};

/// Catalog file plus the record and locale to operate on.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Path to the catalog YAML file.
    pub catalog: PathBuf,

    /// Record slug, e.g. `llc-guide`.
    #[arg(long)]
    pub slug: Slug,

    /// Locale tag, e.g. `en`.
    #[arg(long)]
    pub locale: Locale,
}

//! # Validate Subcommand
//!
//! Loads a catalog, then generates the article for every page in every
//! locale so that incomplete page fields surface before publication.
//! Ambiguous source pairs are reported as warnings, not failures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use ecl_authority::PrecedenceResolver;
use ecl_schema::MetadataGenerator;

use crate::catalog_file::{self, SiteSource};

/// Arguments for `ecl validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the catalog YAML file.
    pub catalog: PathBuf,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, site: &SiteSource) -> Result<u8> {
    let loaded = catalog_file::load(&args.catalog, site)?;
    let catalog = &loaded.catalog;
    let generator = MetadataGenerator::new(catalog)?;

    let mut documents = 0;
    for slug in loaded.paged_slugs() {
        if let Some(page) = loaded.page(slug) {
            documents += generator
                .generate_all(slug, &page.content)
                .with_context(|| format!("record \"{slug}\""))?
                .len();
        }
    }

    let resolver = PrecedenceResolver::default();
    let mut flags = 0;
    for slug in catalog.sources().slugs() {
        let entries = catalog.sources().entries(&slug)?;
        for flag in resolver.flag_ambiguities(&entries) {
            tracing::warn!(slug = %slug, first = %flag.first, second = %flag.second, "needs review");
            flags += 1;
        }
    }

    println!(
        "OK: {} records, {} source lists, {} documents, {} review flags",
        catalog.content().len(),
        catalog.sources().slugs().len(),
        documents,
        flags
    );
    Ok(0)
}

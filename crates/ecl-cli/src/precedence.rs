//! # Precedence Subcommand
//!
//! Lists a record's primary sources in authority order. Every pair the
//! resolver cannot separate is printed as a review flag; the exit code is
//! 2 when any flag is raised and `--strict` is set. A record with no
//! registered sources prints nothing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ecl_authority::{PrecedenceResolver, ReviewFlag, SourceEntry};
use ecl_core::Slug;

use crate::catalog_file::{self, SiteSource};

/// Arguments for `ecl precedence`.
#[derive(Args, Debug)]
pub struct PrecedenceArgs {
    /// Path to the catalog YAML file.
    pub catalog: PathBuf,

    /// Record slug.
    #[arg(long)]
    pub slug: Slug,

    /// Exit with status 2 when any pair needs review.
    #[arg(long)]
    pub strict: bool,
}

/// Sources in authority order plus the review flags.
#[derive(Debug)]
pub struct PrecedenceReport {
    /// Sorted entries.
    pub ordered: Vec<SourceEntry>,
    /// Pairs needing review.
    pub flags: Vec<ReviewFlag>,
}

impl PrecedenceReport {
    /// Printable lines, one per source then one per flag.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .ordered
            .iter()
            .enumerate()
            .map(|(i, entry)| match entry.tier() {
                Some(tier) => format!("{}. [{}] {} ({})", i + 1, entry.weight(), entry.citation(), tier),
                None => format!("{}. [{}] {}", i + 1, entry.weight(), entry.citation()),
            })
            .collect();
        lines.extend(
            self.flags
                .iter()
                .map(|f| format!("REVIEW: \"{}\" vs \"{}\": {}", f.first, f.second, f.reason)),
        );
        lines
    }
}

/// Build the report for `ecl precedence`.
pub fn report(args: &PrecedenceArgs, site: &SiteSource) -> Result<PrecedenceReport> {
    let loaded = catalog_file::load(&args.catalog, site)?;
    let entries = loaded.catalog.sources_of(&args.slug)?;
    let resolver = PrecedenceResolver::default();
    let ordered = resolver
        .sort_by_authority(&entries)
        .into_iter()
        .cloned()
        .collect();
    let flags = resolver.flag_ambiguities(&entries);
    Ok(PrecedenceReport { ordered, flags })
}

/// Execute the precedence subcommand.
pub fn run_precedence(args: &PrecedenceArgs, site: &SiteSource) -> Result<u8> {
    let report = report(args, site)?;
    for line in report.lines() {
        println!("{line}");
    }
    if args.strict && !report.flags.is_empty() {
        return Ok(2);
    }
    Ok(0)
}

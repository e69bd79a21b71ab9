//! # Cite Subcommand
//!
//! Prints a citation for a record. The page title is included when the
//! catalog supplies one for the requested locale.

use anyhow::Result;
use clap::Args;

use ecl_citation::{CitationRenderer, CitationStyle};

use crate::catalog_file::{self, SiteSource};
use crate::Target;

/// Arguments for `ecl cite`.
#[derive(Args, Debug)]
pub struct CiteArgs {
    #[command(flatten)]
    pub target: Target,

    /// Citation style: `inline` or `full-reference`.
    #[arg(long, default_value = "inline")]
    pub style: String,
}

/// Execute the cite subcommand.
pub fn run_cite(args: &CiteArgs, site: &SiteSource) -> Result<u8> {
    println!("{}", citation(args, site)?);
    Ok(0)
}

/// The citation `ecl cite` would print.
pub fn citation(args: &CiteArgs, site: &SiteSource) -> Result<String> {
    let style: CitationStyle = args.style.parse()?;
    let Target {
        catalog: path,
        slug,
        locale,
    } = &args.target;
    let loaded = catalog_file::load(path, site)?;
    let record = loaded.catalog.content().get(slug)?;
    let renderer = CitationRenderer::new(&loaded.catalog);

    let title = loaded
        .page(slug)
        .and_then(|page| page.content.title.get(locale));
    let text = match title {
        Some(title) => renderer.render_titled(&record, title, locale, style)?,
        None => renderer.render(&record, locale, style)?,
    };
    Ok(text)
}

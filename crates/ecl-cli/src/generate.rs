//! # Generate Subcommand
//!
//! Prints one structured document for a record and locale. `--canonical`
//! prints RFC 8785 bytes instead of pretty JSON; the content digest is
//! logged either way.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use ecl_schema::{MetadataGenerator, StructuredDocument};

use crate::catalog_file::{self, SiteSource};
use crate::Target;

/// Document kinds the CLI can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    /// schema.org `Article`.
    Article,
    /// schema.org `ScholarlyArticle`.
    Scholarly,
}

/// Arguments for `ecl generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub target: Target,

    /// Document kind.
    #[arg(long, value_enum, default_value = "article")]
    pub kind: DocumentKind,

    /// Print canonical JSON instead of pretty JSON.
    #[arg(long)]
    pub canonical: bool,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, site: &SiteSource) -> Result<u8> {
    let output = render_document(args, site)?;
    println!("{output}");
    Ok(0)
}

/// The document text `ecl generate` would print.
pub fn render_document(args: &GenerateArgs, site: &SiteSource) -> Result<String> {
    let Target {
        catalog: path,
        slug,
        locale,
    } = &args.target;
    let loaded = catalog_file::load(path, site)?;
    let record = loaded.catalog.content().get(slug)?;
    let page = loaded
        .page(slug)
        .with_context(|| format!("record \"{slug}\" has no title in the catalog"))?;
    let fields = page.content.fields_for(locale);

    let generator = MetadataGenerator::new(&loaded.catalog)?;
    let document: StructuredDocument = match args.kind {
        DocumentKind::Article => generator.article(&record, locale, &fields)?.into(),
        DocumentKind::Scholarly => generator
            .scholarly(&record, locale, &fields, &page.scholarly_fields(locale))?
            .into(),
    };
    tracing::info!(slug = %slug, locale = %locale, digest = %document.content_digest()?, "document generated");

    if args.canonical {
        Ok(document.to_canonical_json()?.as_str().to_string())
    } else {
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

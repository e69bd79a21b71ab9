//! # ecl CLI entry point
//!
//! Parses command-line arguments, initializes tracing from the verbosity
//! count, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ecl_cli::catalog_file::SiteSource;
use ecl_cli::cite::{run_cite, CiteArgs};
use ecl_cli::generate::{run_generate, GenerateArgs};
use ecl_cli::precedence::{run_precedence, PrecedenceArgs};
use ecl_cli::validate::{run_validate, ValidateArgs};

/// Legal reference catalog toolchain.
///
/// Validates catalogs, generates schema.org structured data, renders
/// citations and reviews source precedence.
#[derive(Parser, Debug)]
#[command(name = "ecl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site configuration file, replacing the catalog's `site` section.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a catalog and generate every page's documents.
    Validate(ValidateArgs),

    /// Print a structured document for one record and locale.
    Generate(GenerateArgs),

    /// Print a citation for one record and locale.
    Cite(CiteArgs),

    /// List a record's sources in authority order and flag ambiguities.
    Precedence(PrecedenceArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let site = SiteSource::from_env(cli.config.clone());
    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &site),
        Commands::Generate(args) => run_generate(args, &site),
        Commands::Cite(args) => run_cite(args, &site),
        Commands::Precedence(args) => run_precedence(args, &site),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate() {
        let cli = Cli::try_parse_from([
            "ecl", "-vv", "generate", "catalog.yaml", "--slug", "llc-guide", "--locale", "en",
            "--kind", "scholarly", "--canonical",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(args) => {
                assert!(args.canonical);
                assert_eq!(args.target.slug.as_str(), "llc-guide");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_slug() {
        let result = Cli::try_parse_from([
            "ecl", "cite", "catalog.yaml", "--slug", "LLC Guide", "--locale", "en",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from([
            "ecl", "precedence", "catalog.yaml", "--slug", "llc-guide", "--config", "site.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.yaml")));
    }

    #[test]
    fn no_subcommand_errors() {
        assert!(Cli::try_parse_from(["ecl"]).is_err());
    }
}

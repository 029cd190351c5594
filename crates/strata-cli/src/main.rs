use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use strata_core::AppConfig;
use strata_ingest::Ingestor;
use strata_ingest::xml::parse_document;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "strata",
    about = "Research-data curation platform — DataCite ingestion tools",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a DataCite XML export into a platform record.
    Ingest {
        /// Path to the DataCite XML file.
        file: PathBuf,

        /// Override the ROR affiliation vocabulary file.
        #[arg(long)]
        ror_file: Option<PathBuf>,

        /// Override the MSL laboratory vocabulary file.
        #[arg(long)]
        labs_file: Option<PathBuf>,

        /// Override the resource-type vocabulary file.
        #[arg(long)]
        resource_types_file: Option<PathBuf>,
    },

    /// Check that a file is well-formed XML without producing a record.
    Validate {
        /// Path to the DataCite XML file.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ingest {
            file,
            ror_file,
            labs_file,
            resource_types_file,
        } => {
            let config = AppConfig::load().context("failed to load configuration")?;
            let vocab = &config.vocab;

            let ingestor = Ingestor::new(
                Some(ror_file.unwrap_or_else(|| PathBuf::from(&vocab.ror_affiliations_file))),
                Some(labs_file.unwrap_or_else(|| PathBuf::from(&vocab.msl_laboratories_file))),
                Some(
                    resource_types_file
                        .unwrap_or_else(|| PathBuf::from(&vocab.resource_types_file)),
                ),
            );

            let bytes = fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let record = ingestor
                .ingest(&bytes)
                .with_context(|| format!("failed to ingest {}", file.display()))?;

            let json = if cli.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{json}");
        }

        Commands::Validate { file } => {
            let bytes = fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            parse_document(&bytes)
                .with_context(|| format!("{} is not well-formed XML", file.display()))?;
            println!("{}: OK", file.display());
        }
    }

    Ok(())
}

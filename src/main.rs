//! WordNet Relations - CLI
//!
//! Structural scans of WordNet data files and verb to noun derivational
//! relation listings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordnet_relations::{
    commands::{DeriveConfig, inspect_source, run_derive, sample_relations, write_report},
    config::Settings,
    core::PartOfSpeech,
    output::{loading_spinner, print_derive_result, print_inspect_report, print_sample},
    relations::{DERIVATIONALLY_RELATED, RelationQuery},
    wordnet::DataSource,
};

#[derive(Parser)]
#[command(
    name = "wordnet_relations",
    about = "Inspect WordNet data files and list derivational verb/noun relations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing data.noun, data.verb, data.adj and data.adv [env: WORDNET_DIR]
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Root holding extracted english-wordnet-2024_<date> datasets
    /// [env: WORDNET_RAW_ROOT, default: data/raw]
    #[arg(long, global = true)]
    raw_root: Option<PathBuf>,

    /// Show debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize synset, lemma and pointer counts per part of speech
    Inspect {
        /// Show top N pointer symbols
        #[arg(long, default_value = "10")]
        top: usize,

        /// Also write the summary to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List verbs with at least N derivationally related nouns
    Derive {
        /// Minimum related noun lemmas
        #[arg(short = 'n', long, default_value = "3")]
        min_nouns: usize,

        /// Limit the number of verbs displayed
        #[arg(long)]
        limit: Option<usize>,

        /// Pointer symbol to follow
        #[arg(long, default_value = DERIVATIONALLY_RELATED)]
        symbol: String,
    },

    /// Draw random verbs with their related nouns
    Sample {
        /// Number of verbs to draw
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Minimum related noun lemmas
        #[arg(short = 'n', long, default_value = "3")]
        min_nouns: usize,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::from_env();
    if let Some(dir) = cli.data_dir {
        settings.data_dir = Some(dir);
    }
    if let Some(root) = cli.raw_root {
        settings.raw_root = root;
    }
    let source = DataSource::from_dir(settings.resolve_data_dir()?);

    match cli.command {
        Commands::Inspect { top, out } => run_inspect_command(&source, top, out),
        Commands::Derive {
            min_nouns,
            limit,
            symbol,
        } => run_derive_command(&source, min_nouns, limit, symbol),
        Commands::Sample {
            count,
            seed,
            min_nouns,
        } => run_sample_command(&source, count, seed, min_nouns),
    }
}

fn run_inspect_command(source: &DataSource, top: usize, out: Option<PathBuf>) -> Result<()> {
    let spinner = loading_spinner("Scanning data files...");
    let report = inspect_source(source, top);
    spinner.finish_and_clear();
    let report = report?;

    print_inspect_report(&report);

    if let Some(path) = out {
        write_report(&report, &path)?;
        println!("\n[written] {}", path.display());
    }
    Ok(())
}

fn run_derive_command(
    source: &DataSource,
    min_nouns: usize,
    limit: Option<usize>,
    symbol: String,
) -> Result<()> {
    let config = DeriveConfig {
        query: RelationQuery::new(PartOfSpeech::Verb, symbol, PartOfSpeech::Noun),
        min_targets: min_nouns,
        limit,
    };

    let spinner = loading_spinner("Loading verb and noun synsets...");
    let result = run_derive(source, &config);
    spinner.finish_and_clear();

    print_derive_result(&result?);
    Ok(())
}

fn run_sample_command(
    source: &DataSource,
    count: usize,
    seed: Option<u64>,
    min_nouns: usize,
) -> Result<()> {
    let spinner = loading_spinner("Loading verb and noun synsets...");
    let result = run_derive(source, &DeriveConfig::new(min_nouns));
    spinner.finish_and_clear();

    let sample = sample_relations(&result?.filtered, count, seed);
    print_sample(&sample);
    Ok(())
}

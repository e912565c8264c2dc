//! Taxograph CLI
//!
//! # Usage
//!
//! ```bash
//! # Outcast of each query file (one whitespace-separated term list per file)
//! cargo run --bin taxograph -- outcast concepts.txt hypernyms.txt query1.txt query2.txt
//!
//! # Shortest common ancestor of two terms
//! cargo run --bin taxograph -- sca concepts.txt hypernyms.txt cow horse
//! ```
//!
//! `--json` switches both subcommands to structured output. Log verbosity
//! follows `RUST_LOG` (e.g. `RUST_LOG=taxograph_core=debug`).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use taxograph_core::{OutcastRanker, Taxonomy};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taxograph")]
#[command(about = "Semantic-distance queries over a rooted hypernym taxonomy", long_about = None)]
struct Cli {
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the outcast term of each query file
    Outcast {
        /// Concept file (id,term1 term2 ...,gloss)
        concepts: PathBuf,

        /// Hypernym file (id,parent1,parent2,...)
        hypernyms: PathBuf,

        /// Query files, each a whitespace-separated term list
        queries: Vec<PathBuf>,
    },

    /// Shortest common ancestor of two terms
    Sca {
        /// Concept file (id,term1 term2 ...,gloss)
        concepts: PathBuf,

        /// Hypernym file (id,parent1,parent2,...)
        hypernyms: PathBuf,

        /// First term
        term_a: String,

        /// Second term
        term_b: String,
    },
}

#[derive(Serialize)]
struct OutcastReport<'a> {
    file: String,
    terms: &'a [String],
    outcast: String,
}

#[derive(Serialize)]
struct ScaReport<'a> {
    ancestor: &'a [String],
    distance: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taxograph: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Outcast {
            concepts,
            hypernyms,
            queries,
        } => {
            let taxonomy = Taxonomy::from_files(&concepts, &hypernyms)?;
            let ranker = OutcastRanker::new(&taxonomy);
            for query in queries {
                let terms: Vec<String> = fs::read_to_string(&query)?
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                let outcast = ranker.outcast(&terms)?;
                if cli.json {
                    let report = OutcastReport {
                        file: query.display().to_string(),
                        terms: &terms,
                        outcast,
                    };
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{}: {}", query.display(), outcast);
                }
            }
        }

        Commands::Sca {
            concepts,
            hypernyms,
            term_a,
            term_b,
        } => {
            let taxonomy = Taxonomy::from_files(&concepts, &hypernyms)?;
            let hit = taxonomy.resolve(&term_a, &term_b)?;
            let ancestor = taxonomy.index().terms_of(hit.vertex)?;
            if cli.json {
                let report = ScaReport {
                    ancestor,
                    distance: hit.distance,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("ancestor = {}, distance = {}", ancestor.join(" "), hit.distance);
            }
        }
    }
    Ok(())
}

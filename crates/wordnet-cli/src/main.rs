//! WordNet SAP CLI
//!
//! Thin batch host over the library crates:
//! - `query`: noun-level distance + lowest common ancestor
//! - `sap`: id-level length + ancestor
//! - `check`: build the digraph and report structural counts
//!
//! All query logic lives in `wordnet-sap`; this binary only parses arguments,
//! loads the two input files, and formats results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordnet_digraph::{Diagnostic, Digraph};
use wordnet_sap::{Sap, WordNet};

#[derive(Parser)]
#[command(name = "wordnet")]
#[command(author, version, about = "Shortest ancestral path queries over a WordNet digraph")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Distance and lowest common ancestor for two nouns.
    Query {
        /// Synsets file: `<id>,<synonym>,<definition>` per line
        synsets: PathBuf,
        /// Hypernyms file: `<source_id>[,<hypernym_id>]*` per line
        hypernyms: PathBuf,
        noun_a: String,
        noun_b: String,
    },

    /// Length and ancestor for two synset ids.
    Sap {
        synsets: PathBuf,
        hypernyms: PathBuf,
        v: i64,
        w: i64,
    },

    /// Build the digraph and report vertex/edge/root counts plus any
    /// skipped records.
    Check {
        synsets: PathBuf,
        hypernyms: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Commands::Query {
            synsets,
            hypernyms,
            noun_a,
            noun_b,
        } => {
            let mut diags: Vec<Diagnostic> = Vec::new();
            let wordnet = WordNet::from_files(&synsets, &hypernyms, &mut diags)
                .context("building WordNet")?;
            report_skipped(&diags);

            let ancestor = wordnet.sap(&noun_a, &noun_b)?;
            let distance = wordnet.distance(&noun_a, &noun_b)?;
            println!("{} {}", "Ancestor:".bold(), ancestor);
            println!("{} {}", "Distance:".bold(), distance);
        }

        Commands::Sap {
            synsets,
            hypernyms,
            v,
            w,
        } => {
            let mut diags: Vec<Diagnostic> = Vec::new();
            let graph = Digraph::from_files(&synsets, &hypernyms, &mut diags)
                .context("building digraph")?;
            report_skipped(&diags);

            let sap = Sap::new(&graph);
            let length = sap.length(v, w)?;
            let ancestor = sap.ancestor(v, w)?;
            println!("sap = {length}, ancestor = {ancestor}");
        }

        Commands::Check { synsets, hypernyms } => {
            let mut diags: Vec<Diagnostic> = Vec::new();
            let graph = Digraph::from_files(&synsets, &hypernyms, &mut diags)
                .context("building digraph")?;

            println!("{} {}", "Vertices:".bold(), graph.len());
            println!("{} {}", "Edges:".bold(), graph.edge_count());
            println!("{} {}", "Roots:".bold(), graph.roots().count());
            if diags.is_empty() {
                println!("{}", "No malformed synset lines.".green());
            } else {
                println!(
                    "{} {}",
                    "Skipped synset lines:".yellow().bold(),
                    diags.len()
                );
                for d in &diags {
                    println!("  line {}: {} ({})", d.line, d.text, d.reason);
                }
            }
        }
    }

    Ok(())
}

fn report_skipped(diags: &[Diagnostic]) {
    if !diags.is_empty() {
        eprintln!(
            "{} skipped {} malformed synset line(s); run `check` for details",
            "warning:".yellow().bold(),
            diags.len()
        );
    }
}

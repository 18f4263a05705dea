use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "taxonet", version, about = "Semantic relatedness over hypernym taxonomies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Distance and shortest common ancestor for a pair of terms
    Relate {
        term_a: String,
        term_b: String,
        /// Synset relation file (overrides taxonet.toml)
        #[arg(long, value_name = "FILE")]
        synsets: Option<PathBuf>,
        /// Hypernym relation file (overrides taxonet.toml)
        #[arg(long, value_name = "FILE")]
        hypernyms: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
    /// Least-related term among a list of terms
    Outcast {
        #[arg(required = true)]
        terms: Vec<String>,
        /// Synset relation file (overrides taxonet.toml)
        #[arg(long, value_name = "FILE")]
        synsets: Option<PathBuf>,
        /// Hypernym relation file (overrides taxonet.toml)
        #[arg(long, value_name = "FILE")]
        hypernyms: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
    /// Length and ancestor for two vertices of a raw digraph file
    Query {
        #[arg(value_name = "FILE")]
        graph: PathBuf,
        v: usize,
        w: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,
    },
}

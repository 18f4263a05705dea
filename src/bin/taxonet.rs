// src/bin/taxonet.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taxonet_core::cli::{self, Cli, Commands, RelationPaths};
use taxonet_core::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Relate {
            term_a,
            term_b,
            synsets,
            hypernyms,
            format,
        } => {
            let paths = RelationPaths::resolve(synsets, hypernyms, &load_config())?;
            cli::handle_relate(&term_a, &term_b, &paths, format)
        }
        Commands::Outcast {
            terms,
            synsets,
            hypernyms,
            format,
        } => {
            let paths = RelationPaths::resolve(synsets, hypernyms, &load_config())?;
            cli::handle_outcast(&terms, &paths, format)
        }
        Commands::Query {
            graph,
            v,
            w,
            format,
        } => cli::handle_query(&graph, v, w, format),
    }
}

fn load_config() -> Config {
    let mut c = Config::new();
    c.load_local_config();
    c
}

// src/cli/handlers.rs
//! Subcommand handlers: resolve inputs, run the query, print the result.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::graph::AncestorEngine;
use crate::loader;
use crate::reporting::{self, OutcastReport, OutputFormat, QueryReport, RelateReport};
use crate::taxonomy::OutcastSelector;

/// Relation file paths for a taxonomy-backed command, after merging CLI
/// flags with `taxonet.toml`.
pub struct RelationPaths {
    pub synsets: PathBuf,
    pub hypernyms: PathBuf,
}

impl RelationPaths {
    /// Flags win over config; a path missing from both is an error.
    pub fn resolve(
        synsets: Option<PathBuf>,
        hypernyms: Option<PathBuf>,
        config: &Config,
    ) -> Result<Self> {
        let Some(synsets) = synsets.or_else(|| config.synsets.clone()) else {
            bail!("no synset file given (pass --synsets or set it in taxonet.toml)");
        };
        let Some(hypernyms) = hypernyms.or_else(|| config.hypernyms.clone()) else {
            bail!("no hypernym file given (pass --hypernyms or set it in taxonet.toml)");
        };
        Ok(Self { synsets, hypernyms })
    }
}

/// Runs the `relate` command.
///
/// # Errors
/// Fails on unresolved paths, loader errors, or unknown terms.
pub fn handle_relate(
    term_a: &str,
    term_b: &str,
    paths: &RelationPaths,
    format: OutputFormat,
) -> Result<()> {
    let taxonomy = loader::load_taxonomy(&paths.synsets, &paths.hypernyms)
        .context("failed to load taxonomy")?;
    let relatedness = taxonomy.relate(term_a, term_b)?;

    let report = RelateReport {
        term_a: term_a.to_string(),
        term_b: term_b.to_string(),
        distance: relatedness.distance,
        ancestor: relatedness.ancestor,
    };
    reporting::print_relate(&report, format)
}

/// Runs the `outcast` command.
///
/// # Errors
/// Fails on unresolved paths, loader errors, or unknown terms.
pub fn handle_outcast(terms: &[String], paths: &RelationPaths, format: OutputFormat) -> Result<()> {
    let taxonomy = loader::load_taxonomy(&paths.synsets, &paths.hypernyms)
        .context("failed to load taxonomy")?;
    let term_refs: Vec<&str> = terms.iter().map(String::as_str).collect();
    let outcast = OutcastSelector::new(&taxonomy).outcast(&term_refs)?;

    let report = OutcastReport {
        terms: terms.to_vec(),
        outcast: outcast.to_string(),
    };
    reporting::print_outcast(&report, format)
}

/// Runs the `query` command against a raw digraph file.
///
/// # Errors
/// Fails on loader errors, a cyclic graph, or vertex ids out of range.
pub fn handle_query(graph: &Path, v: usize, w: usize, format: OutputFormat) -> Result<()> {
    let digraph = loader::load_digraph(graph).context("failed to load digraph")?;
    let engine = AncestorEngine::new(digraph)?;
    let ancestry = engine.ancestry(&[v], &[w])?;

    let report = QueryReport {
        v,
        w,
        length: ancestry.length,
        ancestor: ancestry.ancestor,
    };
    reporting::print_query(&report, format)
}

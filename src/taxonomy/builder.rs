// src/taxonomy/builder.rs
//! Derives the hypernym DAG and the term index from the two input
//! relations.

use std::collections::HashMap;

use super::index::TermIndex;
use super::records::{HypernymRecord, SynsetRecord};
use crate::error::{Result, TaxonetError};
use crate::graph::Digraph;

/// The derived graph and index, ready for the ancestor engine.
pub struct TaxonomyData {
    pub graph: Digraph,
    pub index: TermIndex,
}

/// Builds the DAG and term index from the synset and hypernym relations.
///
/// The vertex count is the number of synset records; synset ids must be
/// unique and within `[0, V)`, and every hypernym endpoint must name an
/// existing vertex.
///
/// # Errors
/// `VertexOutOfRange` for an id outside `[0, V)`, `DuplicateSynset` for
/// a repeated synset id.
pub fn build(synsets: &[SynsetRecord], hypernyms: &[HypernymRecord]) -> Result<TaxonomyData> {
    let index = build_index(synsets)?;
    let graph = build_graph(synsets.len(), hypernyms)?;
    Ok(TaxonomyData { graph, index })
}

fn build_index(synsets: &[SynsetRecord]) -> Result<TermIndex> {
    let vertex_count = synsets.len();
    let mut displays = vec![None; vertex_count];
    let mut vertices_by_term: HashMap<String, Vec<usize>> = HashMap::new();

    for record in synsets {
        check_id(record.id, vertex_count)?;
        if displays[record.id].is_some() {
            return Err(TaxonetError::DuplicateSynset(record.id));
        }
        displays[record.id] = Some(record.display());

        // One term may appear in several synsets.
        for term in &record.terms {
            vertices_by_term
                .entry(term.clone())
                .or_default()
                .push(record.id);
        }
    }

    let synsets = displays.into_iter().map(Option::unwrap_or_default).collect();
    Ok(TermIndex::new(synsets, vertices_by_term))
}

fn build_graph(vertex_count: usize, hypernyms: &[HypernymRecord]) -> Result<Digraph> {
    let mut graph = Digraph::new(vertex_count);
    for record in hypernyms {
        for &parent in &record.parents {
            graph.add_edge(record.id, parent)?;
        }
    }
    Ok(graph)
}

fn check_id(id: usize, vertex_count: usize) -> Result<()> {
    if id >= vertex_count {
        return Err(TaxonetError::VertexOutOfRange {
            vertex: id,
            count: vertex_count,
        });
    }
    Ok(())
}

// src/graph/digraph.rs
//! The directed graph container: fixed vertex set, adjacency lists.

use crate::error::{Result, TaxonetError};

/// A directed graph over integer vertex ids in `[0, V)`.
///
/// The vertex count is fixed at construction; edges may only be added
/// before the graph is handed to a consumer that requires acyclicity.
#[derive(Debug, Clone)]
pub struct Digraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Digraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// # Errors
    /// Returns `VertexOutOfRange` if any endpoint is outside `[0, V)`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    /// Returns `VertexOutOfRange` if either endpoint is outside `[0, V)`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Vertices directly reachable from `v` by one edge.
    ///
    /// Callers are expected to have validated `v`; an out-of-range id
    /// yields an empty slice rather than a panic.
    #[must_use]
    pub fn adjacent(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Validates that `v` names a vertex of this graph.
    ///
    /// # Errors
    /// Returns `VertexOutOfRange` otherwise.
    pub fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.adjacency.len() {
            return Err(TaxonetError::VertexOutOfRange {
                vertex: v,
                count: self.adjacency.len(),
            });
        }
        Ok(())
    }
}

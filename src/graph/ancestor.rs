// src/graph/ancestor.rs
//! Shortest common ancestor queries over a DAG.
//!
//! A common ancestor of two vertex sets is any vertex reachable from
//! both; the engine reports the one minimizing the combined path length.
//! Both directions run as multi-source BFS, and the second traversal
//! folds the "reachable from both" check into its discovery step.

use std::collections::{HashMap, VecDeque};

use super::cycles;
use super::digraph::Digraph;
use crate::error::{Result, TaxonetError};

const UNVISITED: usize = usize::MAX;

/// Outcome of one ancestral query: the winning vertex and the combined
/// path length from both source sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestry {
    pub ancestor: usize,
    pub length: usize,
}

/// Answers shortest-common-ancestor queries against a fixed DAG.
///
/// Queries allocate their own scratch state, so a single engine can be
/// shared read-only across callers.
#[derive(Debug)]
pub struct AncestorEngine {
    graph: Digraph,
}

impl AncestorEngine {
    /// Takes ownership of the graph and verifies it is acyclic.
    ///
    /// # Errors
    /// Returns `CycleDetected` with a witness path if the graph has a
    /// cycle.
    pub fn new(graph: Digraph) -> Result<Self> {
        if let Some(cycle) = cycles::find_cycle(&graph) {
            return Err(TaxonetError::CycleDetected(cycle));
        }
        Ok(Self { graph })
    }

    #[must_use]
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of the shortest ancestral path between vertices `v` and `w`.
    ///
    /// # Errors
    /// `VertexOutOfRange` for bad ids, `NoCommonAncestor` if the two
    /// vertices share no reachable vertex.
    pub fn length(&self, v: usize, w: usize) -> Result<usize> {
        Ok(self.ancestry(&[v], &[w])?.length)
    }

    /// A shortest common ancestor of vertices `v` and `w`.
    ///
    /// # Errors
    /// Same failure modes as [`Self::length`].
    pub fn ancestor(&self, v: usize, w: usize) -> Result<usize> {
        Ok(self.ancestry(&[v], &[w])?.ancestor)
    }

    /// Length of the shortest ancestral path between two vertex sets.
    ///
    /// # Errors
    /// `EmptySourceSet` if either set is empty, plus the failure modes
    /// of [`Self::length`].
    pub fn subset_length(&self, sources_a: &[usize], sources_b: &[usize]) -> Result<usize> {
        Ok(self.ancestry(sources_a, sources_b)?.length)
    }

    /// A shortest common ancestor of two vertex sets.
    ///
    /// # Errors
    /// Same failure modes as [`Self::subset_length`].
    pub fn subset_ancestor(&self, sources_a: &[usize], sources_b: &[usize]) -> Result<usize> {
        Ok(self.ancestry(sources_a, sources_b)?.ancestor)
    }

    /// Full query result (ancestor and length) in a single traversal.
    ///
    /// When several vertices tie for the minimal combined length, the
    /// smallest vertex id wins.
    ///
    /// # Errors
    /// `EmptySourceSet`, `VertexOutOfRange`, or `NoCommonAncestor`.
    pub fn ancestry(&self, sources_a: &[usize], sources_b: &[usize]) -> Result<Ancestry> {
        self.check_sources(sources_a)?;
        self.check_sources(sources_b)?;

        // Two equal single-vertex sets need no traversal.
        if let ([a], [b]) = (sources_a, sources_b) {
            if a == b {
                return Ok(Ancestry {
                    ancestor: *a,
                    length: 0,
                });
            }
        }

        let mut traversal = Traversal::new(self.graph.vertex_count());
        traversal.explore_first(&self.graph, sources_a);
        traversal.explore_second(&self.graph, sources_b);
        traversal.best().ok_or(TaxonetError::NoCommonAncestor)
    }

    fn check_sources(&self, sources: &[usize]) -> Result<()> {
        if sources.is_empty() {
            return Err(TaxonetError::EmptySourceSet);
        }
        for &v in sources {
            self.graph.check_vertex(v)?;
        }
        Ok(())
    }
}

/// Per-query scratch state: one distance array per direction, a shared
/// BFS queue, and the combined lengths of vertices reached from both
/// sides. Dropped when the query returns, so nothing leaks between
/// queries.
struct Traversal {
    dist_first: Vec<usize>,
    dist_second: Vec<usize>,
    queue: VecDeque<usize>,
    reachable_from_both: HashMap<usize, usize>,
}

impl Traversal {
    fn new(vertex_count: usize) -> Self {
        Self {
            dist_first: vec![UNVISITED; vertex_count],
            dist_second: vec![UNVISITED; vertex_count],
            queue: VecDeque::new(),
            reachable_from_both: HashMap::new(),
        }
    }

    /// Multi-source BFS from the first set; seeds start at distance 0
    /// and the distance array doubles as the visited marker.
    fn explore_first(&mut self, graph: &Digraph, sources: &[usize]) {
        for &s in sources {
            if self.dist_first[s] == UNVISITED {
                self.dist_first[s] = 0;
                self.queue.push_back(s);
            }
        }
        while let Some(next) = self.queue.pop_front() {
            for &adjacent in graph.adjacent(next) {
                if self.dist_first[adjacent] == UNVISITED {
                    self.dist_first[adjacent] = self.dist_first[next] + 1;
                    self.queue.push_back(adjacent);
                }
            }
        }
    }

    /// Multi-source BFS from the second set. Every vertex discovered
    /// here that the first traversal already reached is recorded with
    /// its combined length, in place of a separate intersection pass.
    fn explore_second(&mut self, graph: &Digraph, sources: &[usize]) {
        for &s in sources {
            if self.dist_second[s] == UNVISITED {
                self.dist_second[s] = 0;
                self.queue.push_back(s);
                self.record_if_shared(s);
            }
        }
        while let Some(next) = self.queue.pop_front() {
            for &adjacent in graph.adjacent(next) {
                if self.dist_second[adjacent] == UNVISITED {
                    self.dist_second[adjacent] = self.dist_second[next] + 1;
                    self.queue.push_back(adjacent);
                    self.record_if_shared(adjacent);
                }
            }
        }
    }

    fn record_if_shared(&mut self, v: usize) {
        if self.dist_first[v] != UNVISITED {
            self.reachable_from_both
                .insert(v, self.dist_first[v] + self.dist_second[v]);
        }
    }

    /// Minimal combined length; ties broken toward the smallest vertex id.
    fn best(&self) -> Option<Ancestry> {
        let mut best: Option<Ancestry> = None;
        for (&vertex, &length) in &self.reachable_from_both {
            let better = match best {
                None => true,
                Some(b) => length < b.length || (length == b.length && vertex < b.ancestor),
            };
            if better {
                best = Some(Ancestry {
                    ancestor: vertex,
                    length,
                });
            }
        }
        best
    }
}

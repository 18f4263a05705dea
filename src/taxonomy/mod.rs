// src/taxonomy/mod.rs
//! Term-level relatedness over the hypernym DAG.

pub mod builder;
pub mod index;
pub mod outcast;
pub mod records;

pub use index::TermIndex;
pub use outcast::OutcastSelector;
pub use records::{HypernymRecord, SynsetRecord};

use crate::error::Result;
use crate::graph::{AncestorEngine, Ancestry};

/// Answer to a term-pair query: the distance and the ancestor synset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relatedness {
    pub distance: usize,
    pub ancestor: String,
}

/// The assembled taxonomy: term index plus ancestor engine over the
/// derived DAG.
#[derive(Debug)]
pub struct Taxonomy {
    index: TermIndex,
    engine: AncestorEngine,
}

impl Taxonomy {
    /// Builds the taxonomy from the two input relations and validates
    /// the derived graph.
    ///
    /// # Errors
    /// Propagates build validation failures and `CycleDetected` if the
    /// hypernym relation is not acyclic.
    pub fn new(synsets: &[SynsetRecord], hypernyms: &[HypernymRecord]) -> Result<Self> {
        let data = builder::build(synsets, hypernyms)?;
        let engine = AncestorEngine::new(data.graph)?;
        Ok(Self {
            index: data.index,
            engine,
        })
    }

    /// Distance (shortest ancestral path length) between two terms.
    ///
    /// # Errors
    /// `UnknownTerm` if either term is absent, `NoCommonAncestor` if
    /// their synsets share no reachable vertex.
    pub fn distance(&self, term_a: &str, term_b: &str) -> Result<usize> {
        Ok(self.ancestry(term_a, term_b)?.length)
    }

    /// The synset string of a shortest common ancestor of two terms.
    ///
    /// # Errors
    /// Same failure modes as [`Self::distance`].
    pub fn sca(&self, term_a: &str, term_b: &str) -> Result<&str> {
        let ancestry = self.ancestry(term_a, term_b)?;
        // The ancestor came out of the engine, so the vertex exists.
        Ok(self.index.synset(ancestry.ancestor).unwrap_or_default())
    }

    /// Distance and ancestor synset in a single traversal.
    ///
    /// # Errors
    /// Same failure modes as [`Self::distance`].
    pub fn relate(&self, term_a: &str, term_b: &str) -> Result<Relatedness> {
        let ancestry = self.ancestry(term_a, term_b)?;
        let ancestor = self
            .index
            .synset(ancestry.ancestor)
            .unwrap_or_default()
            .to_string();
        Ok(Relatedness {
            distance: ancestry.length,
            ancestor,
        })
    }

    fn ancestry(&self, term_a: &str, term_b: &str) -> Result<Ancestry> {
        let set_a = self.index.vertex_set(term_a)?;
        let set_b = self.index.vertex_set(term_b)?;
        self.engine.ancestry(set_a, set_b)
    }

    #[must_use]
    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    #[must_use]
    pub fn engine(&self) -> &AncestorEngine {
        &self.engine
    }
}

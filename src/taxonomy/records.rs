// src/taxonomy/records.rs
//! Input relations the taxonomy is built from.

use serde::{Deserialize, Serialize};

/// One synonym set: a vertex id and the terms it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: usize,
    pub terms: Vec<String>,
}

impl SynsetRecord {
    #[must_use]
    pub fn new(id: usize, terms: Vec<String>) -> Self {
        Self { id, terms }
    }

    /// The display string for this set, terms joined by spaces.
    #[must_use]
    pub fn display(&self) -> String {
        self.terms.join(" ")
    }
}

/// One hypernym relation: a vertex id and its parent vertex ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypernymRecord {
    pub id: usize,
    pub parents: Vec<usize>,
}

impl HypernymRecord {
    #[must_use]
    pub fn new(id: usize, parents: Vec<usize>) -> Self {
        Self { id, parents }
    }
}

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonetError {
    #[error("graph contains a cycle: {}", format_cycle(.0))]
    CycleDetected(Vec<usize>),

    #[error("vertex {vertex} out of range (graph has {count} vertices)")]
    VertexOutOfRange { vertex: usize, count: usize },

    #[error("source vertex set is empty")]
    EmptySourceSet,

    #[error("no vertex is reachable from both source sets")]
    NoCommonAncestor,

    #[error("unknown term: {0}")]
    UnknownTerm(String),

    #[error("term list is empty")]
    EmptyTermList,

    #[error("duplicate synset id {0}")]
    DuplicateSynset(usize),

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, TaxonetError>;

fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// Allow `?` on std::io::Error by converting to TaxonetError::Io with unknown path.
impl From<std::io::Error> for TaxonetError {
    fn from(source: std::io::Error) -> Self {
        TaxonetError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

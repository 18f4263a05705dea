pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod reporting;
pub mod taxonomy;

pub use error::{Result, TaxonetError};
pub use graph::{AncestorEngine, Ancestry, Digraph};
pub use taxonomy::{Taxonomy, TermIndex};

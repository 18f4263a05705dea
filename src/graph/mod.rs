// src/graph/mod.rs
pub mod ancestor;
pub mod cycles;
pub mod digraph;

pub use ancestor::{AncestorEngine, Ancestry};
pub use digraph::Digraph;

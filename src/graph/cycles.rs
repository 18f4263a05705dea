// src/graph/cycles.rs
//! Cycle detection via depth-first search.
//!
//! A taxonomy is only usable if its hypernym relation is acyclic; this
//! module finds every cycle so construction can fail with a concrete
//! witness.

use super::digraph::Digraph;

/// Detects cycles in a directed graph.
/// Returns a list of cycles, where each cycle is the vertex path that
/// closes the loop (first vertex repeated at the end).
#[must_use]
pub fn detect_cycles(graph: &Digraph) -> Vec<Vec<usize>> {
    let vertex_count = graph.vertex_count();
    let mut state = DfsState {
        visited: vec![false; vertex_count],
        recursion_stack: vec![false; vertex_count],
        path_stack: Vec::new(),
        cycles: Vec::new(),
    };

    // Scanning vertices in id order keeps the output deterministic.
    for v in 0..vertex_count {
        if !state.visited[v] {
            dfs(v, graph, &mut state);
        }
    }

    state.cycles
}

/// Returns the first cycle found, if any.
#[must_use]
pub fn find_cycle(graph: &Digraph) -> Option<Vec<usize>> {
    detect_cycles(graph).into_iter().next()
}

struct DfsState {
    visited: Vec<bool>,
    recursion_stack: Vec<bool>,
    path_stack: Vec<usize>,
    cycles: Vec<Vec<usize>>,
}

fn dfs(v: usize, graph: &Digraph, state: &mut DfsState) {
    state.visited[v] = true;
    state.recursion_stack[v] = true;
    state.path_stack.push(v);

    for &adjacent in graph.adjacent(v) {
        visit_neighbor(adjacent, graph, state);
    }

    state.recursion_stack[v] = false;
    state.path_stack.pop();
}

fn visit_neighbor(neighbor: usize, graph: &Digraph, state: &mut DfsState) {
    if !state.visited[neighbor] {
        dfs(neighbor, graph, state);
    } else if state.recursion_stack[neighbor] {
        record_cycle(neighbor, state);
    }
}

fn record_cycle(neighbor: usize, state: &mut DfsState) {
    if let Some(pos) = state.path_stack.iter().position(|&x| x == neighbor) {
        let mut cycle = state.path_stack[pos..].to_vec();
        cycle.push(neighbor); // Close the loop visually
        state.cycles.push(cycle);
    }
}

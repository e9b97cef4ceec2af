//! Edit distance between a linear query and a character-labeled sequence
//! graph under a linear per-operation gap model.
//!
//! The public surface is deliberately small: [`build_graph`] turns a label
//! array and an adjacency list into an immutable [`CharGraph`], and
//! [`Aligner`] runs the layered DP described in the module docs of
//! `init`/`propagate`/`navarro`/`driver` against it. Traceback, affine
//! gaps, and everything CLI/file-I/O-shaped live outside this crate.

mod buffers;
mod driver;
mod graph;
mod init;
mod navarro;
mod propagate;
mod scoring;

pub use driver::Aligner;
pub use graph::CharGraph;
pub use navarro::compute_layer as navarro_compute_layer;
pub use scoring::ScoringConfig;

pub use seqgraph_types::{GraphError, Score, TransitionKind, VertexId, SENTINEL_BASE};

use std::sync::Arc;

/// Builds the CSR graph from a label per vertex and an adjacency list per
/// vertex. Vertex `0` is the source (spec §3).
pub fn build_graph(labels: &[u8], adjacency: &[Vec<VertexId>]) -> Result<CharGraph, GraphError> {
    CharGraph::load(labels, adjacency)
}

/// Builds a new `Aligner` over a (possibly shared) graph with the given
/// scoring parameters.
pub fn new_aligner(graph: Arc<CharGraph>, scoring: ScoringConfig) -> Aligner {
    Aligner::new(graph, scoring)
}

/// Runs the Navarro reference engine end to end over both orientations of
/// a whole query, mirroring `Aligner::align` but through the recursive
/// relaxation oracle instead of the ordered-merge propagator. Exposed for
/// cross-checking the fast engine in tests; the driver's own `align` never
/// calls this on the hot path, since it may revisit vertices.
pub fn navarro_align(graph: &CharGraph, scoring: &ScoringConfig, query: &[u8]) -> Score {
    let forward = navarro_align_one_strand(graph, scoring, query);
    let reverse_complement: Vec<u8> = query.iter().rev().map(|&b| CharGraph::complement(b)).collect();
    let reverse = navarro_align_one_strand(graph, scoring, &reverse_complement);
    forward.min(reverse)
}

fn navarro_align_one_strand(graph: &CharGraph, scoring: &ScoringConfig, query: &[u8]) -> Score {
    let mut layer = vec![0 as Score; graph.n()];
    for &base in query {
        layer = navarro_compute_layer(graph, scoring, &layer, base);
    }
    layer.into_iter().min().unwrap_or(0)
}

//! C7: the aligner driver. Orchestrates per-base layer updates, runs both
//! the forward query and its reverse complement, and returns the minimum
//! of the two (spec §4.3) — the graph's strand is not known a priori, so
//! the engine has to be strand-agnostic at query time.

use std::sync::Arc;

use seqgraph_types::{GraphError, Score, VertexId};

use crate::buffers::LayerBuffers;
use crate::graph::CharGraph;
use crate::init::initialize;
use crate::propagate::propagate;
use crate::scoring::ScoringConfig;

/// One aligner instance: an immutable, possibly-shared graph, its scoring
/// parameters, and the scratch buffers private to this instance. Per spec
/// §5, a `CharGraph` may be shared (via this `Arc`) across many `Aligner`s
/// running on separate threads; each `Aligner` owns its own `LayerBuffers`
/// so no locking is needed inside `align`.
pub struct Aligner {
    graph: Arc<CharGraph>,
    scoring: ScoringConfig,
    buffers: LayerBuffers,
}

impl Aligner {
    pub fn new(graph: Arc<CharGraph>, scoring: ScoringConfig) -> Self {
        let n = graph.n();
        Aligner {
            graph,
            scoring,
            buffers: LayerBuffers::new(n),
        }
    }

    pub fn graph(&self) -> &CharGraph {
        &self.graph
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Aligns `query` against the graph, returning the minimum edit cost
    /// over both orientations. `query` must consist only of bytes
    /// [`CharGraph::is_valid_base`] accepts; anything else is a
    /// [`GraphError::InvalidQueryByte`], not a silent remap.
    pub fn align(&mut self, query: &[u8]) -> Result<Score, GraphError> {
        for (position, &byte) in query.iter().enumerate() {
            if !CharGraph::is_valid_base(byte) {
                return Err(GraphError::InvalidQueryByte { byte, position });
            }
        }
        // Checked once per call (not once at graph load) because it
        // depends on this query's length, not just the graph or costs.
        self.scoring.sentinel(query.len())?;

        let forward = self.align_one_strand(query);

        let reverse_complement: Vec<u8> = query
            .iter()
            .rev()
            .map(|&b| CharGraph::complement(b))
            .collect();
        let reverse = self.align_one_strand(&reverse_complement);

        let cost = forward.min(reverse);
        log::debug!(
            "align: query_len={}, forward={forward}, reverse_complement={reverse}, cost={cost}",
            query.len()
        );
        Ok(cost)
    }

    /// Runs the column-by-column DP for one orientation of the query and
    /// returns the final minimum cost.
    fn align_one_strand(&mut self, query: &[u8]) -> Score {
        self.final_layer_forward_only(query);
        self.buffers.curr_layer[self.buffers.curr_order[0]]
    }

    /// Runs the forward-only column-by-column DP and returns the final
    /// layer and its sorted order, without reverse-complementing or
    /// reducing to a single cost. Exposed for the oracle-agreement tests
    /// in spec §8 (invariant 3), which compare this against
    /// [`crate::navarro_compute_layer`] run the same number of times.
    pub fn final_layer_forward_only(&mut self, query: &[u8]) -> (&[Score], &[VertexId]) {
        self.buffers.reseed();

        for &base in query {
            std::mem::swap(&mut self.buffers.prev_layer, &mut self.buffers.curr_layer);
            std::mem::swap(&mut self.buffers.prev_order, &mut self.buffers.curr_order);

            initialize(&self.graph, &self.scoring, base, &mut self.buffers);
            propagate(&self.graph, &self.scoring, &mut self.buffers);
        }

        (&self.buffers.curr_layer, &self.buffers.curr_order)
    }
}

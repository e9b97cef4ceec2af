//! C3: pre-allocated per-column scratch, reused across every column of
//! every query aligned with one `Aligner`. Nothing in the inner loop
//! allocates once these are sized to the graph.

use std::collections::VecDeque;

use seqgraph_types::{Score, TransitionKind, VertexId};

/// Two double-buffered (layer, order) pairs plus the auxiliary arrays the
/// initializer and propagator need. Sized once, to `n` (and `3n`/`3n+1`
/// for the rank/counting-sort tables), at `Aligner` construction.
pub(crate) struct LayerBuffers {
    pub prev_layer: Vec<Score>,
    pub prev_order: Vec<VertexId>,
    pub curr_layer: Vec<Score>,
    pub curr_order: Vec<VertexId>,

    /// The order the initializer hands to the propagator. Distinct from
    /// `curr_order` (the propagator's *output* order) for the same reason
    /// the original keeps `initialized_order` and `current_order` as
    /// separate vectors: the propagator walks this one as a read-only
    /// cursor while building the other from scratch.
    pub init_order: Vec<VertexId>,

    pub parents: Vec<VertexId>,
    pub types: Vec<TransitionKind>,
    /// `rank[kind.as_index() * n + predecessor]` — see `init.rs`.
    pub rank: Vec<u32>,
    pub offsets_aux: Vec<u32>,
    pub counts_aux: Vec<u32>,

    pub visited: Vec<bool>,
    pub fifo: VecDeque<VertexId>,
}

impl LayerBuffers {
    pub fn new(n: usize) -> Self {
        LayerBuffers {
            prev_layer: vec![0; n],
            prev_order: (0..n).collect(),
            curr_layer: vec![0; n],
            curr_order: (0..n).collect(),
            init_order: vec![0; n],
            parents: vec![0; n],
            types: vec![TransitionKind::Match; n],
            rank: vec![0; 3 * n],
            offsets_aux: vec![0; 3 * n + 1],
            counts_aux: vec![0; 3 * n],
            visited: vec![false; n],
            fifo: VecDeque::new(),
        }
    }

    /// Resets `curr_layer`/`curr_order` to the all-zero, identity-order
    /// start state every strand of `align` begins from (spec §4.3 step 2:
    /// every vertex is a free zero-cost start).
    pub fn reseed(&mut self) {
        self.curr_layer.iter_mut().for_each(|d| *d = 0);
        for (i, slot) in self.curr_order.iter_mut().enumerate() {
            *slot = i;
        }
    }

    pub fn n(&self) -> usize {
        self.curr_layer.len()
    }
}

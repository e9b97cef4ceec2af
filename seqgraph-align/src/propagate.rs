//! C5: the insertion propagator — ordered merge with a FIFO of
//! improvements (spec §4.5). Turns the initialized layer into the final
//! layer for this column, and its order into the final (sorted) order, in
//! O(n + |E|) without a priority queue.

use seqgraph_types::Score;

use crate::buffers::LayerBuffers;
use crate::graph::CharGraph;
use crate::scoring::ScoringConfig;

/// Consumes `buffers.curr_layer` (currently holding `D_init`) and
/// `buffers.init_order` (its sorted order), and rewrites `curr_layer` in
/// place to the fixed point under insertion edges, writing the settled
/// order into `buffers.curr_order`.
pub(crate) fn propagate(graph: &CharGraph, scoring: &ScoringConfig, buffers: &mut LayerBuffers) {
    let n = graph.n();
    let ci = scoring.insertion as Score;

    buffers.visited.iter_mut().for_each(|v| *v = false);
    buffers.fifo.clear();

    let mut i = 0usize;
    let mut out = 0usize;

    while i < n || !buffers.fifo.is_empty() {
        let v_star = match buffers.fifo.front() {
            Some(&front) if i >= n || buffers.curr_layer[front] < buffers.curr_layer[buffers.init_order[i]] => {
                buffers.fifo.pop_front().unwrap()
            }
            _ if i < n => {
                let v = buffers.init_order[i];
                i += 1;
                v
            }
            _ => buffers.fifo.pop_front().unwrap(),
        };

        if buffers.visited[v_star] {
            continue;
        }
        buffers.visited[v_star] = true;
        buffers.curr_order[out] = v_star;
        out += 1;

        for j in 0..graph.succ(v_star).len() {
            let u = graph.succ(v_star)[j];
            if !buffers.visited[u] {
                let candidate = buffers.curr_layer[v_star] + ci;
                if buffers.curr_layer[u] > candidate {
                    buffers.curr_layer[u] = candidate;
                    buffers.fifo.push_back(u);
                }
            }
        }
    }
}

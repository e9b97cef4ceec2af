//! C6: the Navarro engine — a simpler, recursive relaxation kept as a
//! correctness oracle (spec §4.6). Used in tests to cross-check the fast
//! engine's output; not used on the hot path because it may revisit
//! vertices and degrade to worse than linear time on adversarial graphs.

use seqgraph_types::Score;

use crate::graph::CharGraph;
use crate::scoring::ScoringConfig;

/// Computes one column from scratch, given the previous layer. Mirrors
/// `initialize` for the match/substitution/deletion scan, then relaxes
/// insertion edges by plain recursion instead of the ordered-merge trick.
pub fn compute_layer(graph: &CharGraph, scoring: &ScoringConfig, prev_layer: &[Score], b: u8) -> Vec<Score> {
    let n = graph.n();
    let cs = scoring.substitution as Score;
    let cd = scoring.deletion as Score;
    let ci = scoring.insertion as Score;

    let mut layer = vec![0 as Score; n];
    layer[0] = prev_layer[0] + cd;
    for v in 1..n {
        let cost = if b == graph.label(v) { 0 } else { cs };
        layer[v] = prev_layer[0] + cost;
    }
    for v in 1..n {
        let del_candidate = prev_layer[v] + cd;
        if del_candidate < layer[v] {
            layer[v] = del_candidate;
        }
        for &u in graph.succ(v) {
            let cost = if b == graph.label(u) { 0 } else { cs };
            let candidate = prev_layer[v] + cost;
            if candidate < layer[u] {
                layer[u] = candidate;
            }
        }
    }

    for v in 1..n {
        for i in 0..graph.succ(v).len() {
            let u = graph.succ(v)[i];
            relax(graph, ci, v, u, &mut layer);
        }
    }
    layer
}

fn relax(graph: &CharGraph, ci: Score, from: usize, to: usize, layer: &mut [Score]) {
    if layer[to] > layer[from] + ci {
        layer[to] = layer[from] + ci;
        for i in 0..graph.succ(to).len() {
            let next = graph.succ(to)[i];
            relax(graph, ci, to, next, layer);
        }
    }
}

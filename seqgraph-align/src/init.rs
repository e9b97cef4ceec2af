//! C4: the initializer — the key algorithm (spec §4.4). Produces the
//! initialized layer and its distance-sorted order without ever calling a
//! general-purpose sort.

use seqgraph_types::{Score, TransitionKind, VertexId};

use crate::buffers::LayerBuffers;
use crate::graph::CharGraph;
use crate::scoring::ScoringConfig;

/// Fills `buffers.curr_layer` with `D_init` and `buffers.init_order` with a
/// permutation that sorts it, from `buffers.prev_layer`/`prev_order` and
/// the column's query base `b`. `buffers.parents`/`types` record which
/// predecessor and transition achieved each vertex's value, for the rank
/// merge below.
pub(crate) fn initialize(graph: &CharGraph, scoring: &ScoringConfig, b: u8, buffers: &mut LayerBuffers) {
    let n = graph.n();
    let cs = scoring.substitution as Score;
    let cd = scoring.deletion as Score;

    // --- D_init scan (spec §4.4 "Initialization of D_init") ---
    buffers.curr_layer[0] = buffers.prev_layer[0] + cd;
    buffers.parents[0] = 0;
    buffers.types[0] = TransitionKind::Del;

    for v in 1..n {
        let (cost, kind) = match_cost(graph, b, v, cs);
        buffers.curr_layer[v] = buffers.prev_layer[0] + cost;
        buffers.parents[v] = 0;
        buffers.types[v] = kind;
    }

    for v in 1..n {
        let del_candidate = buffers.prev_layer[v] + cd;
        if del_candidate < buffers.curr_layer[v] {
            buffers.curr_layer[v] = del_candidate;
            buffers.parents[v] = v;
            buffers.types[v] = TransitionKind::Del;
        }
        for i in 0..graph.succ(v).len() {
            let u = graph.succ(v)[i];
            let (cost, kind) = match_cost(graph, b, u, cs);
            let candidate = buffers.prev_layer[v] + cost;
            if candidate < buffers.curr_layer[u] {
                buffers.curr_layer[u] = candidate;
                buffers.parents[u] = v;
                buffers.types[u] = kind;
            }
        }
    }

    // --- rank table: three-way merge over prev_order (spec §4.4) ---
    build_rank_table(scoring, buffers);

    // --- counting sort over rank[types[v] * n + parents[v]] ---
    counting_sort_order(n, buffers);
}

#[inline]
fn match_cost(graph: &CharGraph, b: u8, v: VertexId, cs: Score) -> (Score, TransitionKind) {
    if b == graph.label(v) {
        (0, TransitionKind::Match)
    } else {
        (cs, TransitionKind::Subst)
    }
}

/// Merges the three monotone streams `P[pi] + 0`, `P[pi] + cs`, `P[pi] +
/// cd` (each indexed by `prev_order`) into a single rank `k in [0, 3n)` per
/// `(predecessor, kind)` pair, tie-breaking Match before Subst before Del.
fn build_rank_table(scoring: &ScoringConfig, buffers: &mut LayerBuffers) {
    let n = buffers.n();
    let cs = scoring.substitution as Score;
    let cd = scoring.deletion as Score;

    let mut match_i = 0usize;
    let mut subst_i = 0usize;
    let mut del_i = 0usize;

    for k in 0..3 * n {
        let match_key = (match_i < n).then(|| buffers.prev_layer[buffers.prev_order[match_i]]);
        let subst_key =
            (subst_i < n).then(|| buffers.prev_layer[buffers.prev_order[subst_i]] + cs);
        let del_key = (del_i < n).then(|| buffers.prev_layer[buffers.prev_order[del_i]] + cd);

        // Match < Subst < Del on ties; `<` (not `<=`) against the running
        // minimum preserves that order since Match is evaluated first.
        let mut best = match_key;
        let mut kind = TransitionKind::Match;
        if let Some(v) = subst_key {
            if best.map_or(true, |m| v < m) {
                best = Some(v);
                kind = TransitionKind::Subst;
            }
        }
        if let Some(v) = del_key {
            if best.map_or(true, |m| v < m) {
                kind = TransitionKind::Del;
            }
        }

        match kind {
            TransitionKind::Match => {
                let pred = buffers.prev_order[match_i];
                buffers.rank[TransitionKind::Match.as_index() * n + pred] = k as u32;
                match_i += 1;
            }
            TransitionKind::Subst => {
                let pred = buffers.prev_order[subst_i];
                buffers.rank[TransitionKind::Subst.as_index() * n + pred] = k as u32;
                subst_i += 1;
            }
            TransitionKind::Del => {
                let pred = buffers.prev_order[del_i];
                buffers.rank[TransitionKind::Del.as_index() * n + pred] = k as u32;
                del_i += 1;
            }
        }
    }
}

fn counting_sort_order(n: usize, buffers: &mut LayerBuffers) {
    buffers.offsets_aux.iter_mut().for_each(|o| *o = 0);
    buffers.counts_aux.iter_mut().for_each(|c| *c = 0);

    for v in 0..n {
        let key = buffers.rank[buffers.types[v].as_index() * n + buffers.parents[v]];
        buffers.offsets_aux[key as usize + 1] += 1;
    }
    for i in 1..buffers.offsets_aux.len() {
        buffers.offsets_aux[i] += buffers.offsets_aux[i - 1];
    }
    for v in 0..n {
        let key = buffers.rank[buffers.types[v].as_index() * n + buffers.parents[v]] as usize;
        let slot = buffers.offsets_aux[key] + buffers.counts_aux[key];
        buffers.init_order[slot as usize] = v;
        buffers.counts_aux[key] += 1;
    }
}

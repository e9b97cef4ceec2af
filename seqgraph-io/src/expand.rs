//! Expands a [`CompactedGraph`] (one chain string per vertex) into the
//! one-character-per-vertex label/adjacency pair `seqgraph_align::build_graph`
//! expects. Ported from `GenerateCharLabeledGraph` in the original C++: each
//! compacted vertex keeps its id as the "head" of its chain (so successor ids
//! recorded against compacted vertices stay valid indices after expansion),
//! and any characters past the first get fresh vertices appended in a simple
//! path off the head, with the chain's original out-edges moved onto the
//! last character.

use crate::text::CompactedGraph;

/// A freshly expanded char graph, ready for `seqgraph_align::build_graph`.
pub struct ExpandedGraph {
    pub labels: Vec<u8>,
    pub adjacency: Vec<Vec<usize>>,
}

pub fn expand(compacted: &CompactedGraph) -> ExpandedGraph {
    let n_compacted = compacted.labels.len();
    let mut labels: Vec<u8> = compacted
        .labels
        .iter()
        .map(|chain| chain.as_bytes()[0])
        .collect();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n_compacted];

    let mut vertex_id = n_compacted;
    for chain_id in 0..n_compacted {
        let chain_bytes = compacted.labels[chain_id].as_bytes();
        let len = chain_bytes.len();

        if len == 1 {
            adjacency[chain_id].extend_from_slice(&compacted.adjacency[chain_id]);
        }

        for (i, &byte) in chain_bytes.iter().enumerate().skip(1) {
            labels.push(byte);
            adjacency.push(Vec::new());

            if i == 1 {
                adjacency[chain_id].push(vertex_id);
            }
            if i + 1 < len {
                adjacency[vertex_id].push(vertex_id + 1);
            } else {
                adjacency[vertex_id].extend_from_slice(&compacted.adjacency[chain_id]);
            }
            vertex_id += 1;
        }
    }

    log::debug!(
        "expand: {n_compacted} compacted vertices -> {} char vertices",
        labels.len()
    );
    ExpandedGraph { labels, adjacency }
}

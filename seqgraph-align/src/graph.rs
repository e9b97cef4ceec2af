//! C1: character-labeled directed graph in compressed sparse row (CSR) form.

use seqgraph_types::{GraphError, VertexId, SENTINEL_BASE};

/// A directed graph whose vertices each carry a single-byte label.
///
/// Vertex `0` is the distinguished source: every column's "open" match,
/// substitution, and deletion transitions are anchored there (spec'd in
/// §4.4). Successors are stored CSR-style so `succ(v)` is a plain slice
/// with no per-edge allocation.
#[derive(Debug, Clone)]
pub struct CharGraph {
    offsets: Vec<u32>,
    neighbors: Vec<VertexId>,
    labels: Vec<u8>,
}

impl CharGraph {
    /// Builds the CSR representation from a label per vertex and an
    /// adjacency list per vertex. Vertex `0` is the source.
    ///
    /// Errors with [`GraphError::MalformedGraph`] if `labels.len()` doesn't
    /// match `adjacency.len()`, or any neighbor id is out of range. Offsets
    /// are built monotonically by construction, so no separate check is
    /// needed for that half of the invariant.
    pub fn load(labels: &[u8], adjacency: &[Vec<VertexId>]) -> Result<Self, GraphError> {
        if labels.len() != adjacency.len() {
            return Err(GraphError::MalformedGraph(format!(
                "labels has {} entries but adjacency has {}",
                labels.len(),
                adjacency.len()
            )));
        }
        let n = labels.len();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut neighbors = Vec::with_capacity(adjacency.iter().map(Vec::len).sum());
        offsets.push(0u32);
        for neighbor_list in adjacency {
            for &neighbor in neighbor_list {
                if neighbor >= n {
                    return Err(GraphError::MalformedGraph(format!(
                        "neighbor id {neighbor} out of range for {n} vertices"
                    )));
                }
                neighbors.push(neighbor);
            }
            let last = *offsets.last().unwrap();
            offsets.push(last + neighbor_list.len() as u32);
        }
        log::debug!(
            "CharGraph::load: {n} vertices, {} edges",
            neighbors.len()
        );
        Ok(CharGraph {
            offsets,
            neighbors,
            labels: labels.to_vec(),
        })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn label(&self, v: VertexId) -> u8 {
        self.labels[v]
    }

    #[inline]
    pub fn succ(&self, v: VertexId) -> &[VertexId] {
        &self.neighbors[self.offsets[v] as usize..self.offsets[v + 1] as usize]
    }

    /// The biological complement of a query byte: A<->T, C<->G, N<->N,
    /// case-insensitively; anything else maps to [`SENTINEL_BASE`], which
    /// can never equal a valid graph label.
    #[inline]
    pub fn complement(b: u8) -> u8 {
        match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            b'N' => b'N',
            b'a' => b't',
            b't' => b'a',
            b'c' => b'g',
            b'g' => b'c',
            b'n' => b'n',
            _ => SENTINEL_BASE,
        }
    }

    /// Whether `b` is one of the accepted query bases, case-insensitively.
    #[inline]
    pub fn is_valid_base(b: u8) -> bool {
        Self::complement(b) != SENTINEL_BASE
    }
}

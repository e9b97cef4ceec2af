//! Primitives shared between the alignment engine (`seqgraph-align`) and the
//! graph file collaborators (`seqgraph-io`): the score/vertex id types and
//! the single error enum both crates raise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex id in the character-labeled graph. `usize` keeps indexing into
/// the CSR arrays free of casts; graphs are not expected to approach
/// `u32::MAX` vertices, but nothing here assumes that.
pub type VertexId = usize;

/// The DP score type. Wide enough to hold the sentinel `L * max_cost + 1`
/// for any query length and cost the caller can construct; `load` rejects
/// inputs where that sentinel would not fit (`GraphError::ScoreOverflow`)
/// rather than silently wrapping, unlike the original C++'s reuse of a
/// query-length-sized type for the Navarro variant.
pub type Score = u64;

/// Which DP transition produced a vertex's initialized distance. Ordering
/// matters: `Match < Subst < Del` is the tie-break order used throughout
/// the initializer (spec'd as "first attaining predecessor wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransitionKind {
    Match = 0,
    Subst = 1,
    Del = 2,
}

impl TransitionKind {
    pub const COUNT: usize = 3;

    #[inline]
    pub fn as_index(self) -> usize {
        self as usize
    }
}

/// Non-matching sentinel label/complement code. Distinct from every valid
/// base code so equality tests against any real label fail without a
/// branch.
pub const SENTINEL_BASE: u8 = 4;

/// Everything that can go wrong building a graph, scoring config, or
/// running an alignment. Surfaced to the caller; nothing in this workspace
/// recovers from one of these internally.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    #[error("invalid cost: {0}")]
    InvalidCost(String),

    #[error(
        "score overflow: query length {query_len} * max_cost {max_cost} + 1 does not fit in Score"
    )]
    ScoreOverflow { query_len: usize, max_cost: u32 },

    #[error("invalid query byte {byte:#04x} at position {position}")]
    InvalidQueryByte { byte: u8, position: usize },
}

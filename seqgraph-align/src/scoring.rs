//! C2: the three linear gap-model costs.

use seqgraph_types::{GraphError, Score};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Substitution, deletion, and insertion costs. Stored as `u32` so
/// non-negativity is a type invariant; `ScoringConfig::new` still returns a
/// `Result` so a caller deserializing costs from an external format (which
/// may carry a signed representation) gets the same `GraphError` it would
/// for any other malformed input, rather than a panic at the cast site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringConfig {
    pub substitution: u32,
    pub deletion: u32,
    pub insertion: u32,
}

impl ScoringConfig {
    // u32 already rules out negative costs; this constructor stays
    // Result-returning so the API has exactly one place costs are
    // accepted, matching the other three `GraphError` variants for a
    // caller that pattern-matches across all of them.
    pub fn new(substitution: u32, deletion: u32, insertion: u32) -> Result<Self, GraphError> {
        Ok(ScoringConfig {
            substitution,
            deletion,
            insertion,
        })
    }

    #[inline]
    pub fn max_cost(&self) -> u32 {
        self.substitution.max(self.deletion).max(self.insertion)
    }

    /// The sentinel used to seed a layer before any column has been
    /// computed: strictly larger than any cost reachable by a path of
    /// length at most `query_len`. Fails with
    /// [`GraphError::ScoreOverflow`] if the arithmetic does not fit
    /// [`Score`].
    pub fn sentinel(&self, query_len: usize) -> Result<Score, GraphError> {
        let max_cost = self.max_cost();
        let sentinel = (query_len as Score)
            .checked_mul(max_cost as Score)
            .and_then(|v| v.checked_add(1));
        sentinel.ok_or(GraphError::ScoreOverflow {
            query_len,
            max_cost,
        })
    }
}

//! The textual compacted-graph format spec'd in spec.md §6, for the
//! preprocessing collaborator's round-trip tests. Line 1 is the vertex
//! count `N`; each of the next `N` lines is whitespace-separated
//! `s_1 s_2 ... s_k label`, where `label` (the final token, length >= 1)
//! is the vertex's chain string and the preceding tokens are successor
//! ids in `[0, N)`.

use std::io::{BufRead, Read};

use seqgraph_types::GraphError;

/// A graph where each vertex carries a possibly multi-character chain
/// label, as read straight off disk. [`crate::expand::expand`] turns this
/// into the one-character-per-vertex [`seqgraph_align::CharGraph`] the
/// engine actually runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactedGraph {
    pub labels: Vec<String>,
    pub adjacency: Vec<Vec<usize>>,
}

pub fn load_text<R: Read>(reader: R) -> Result<CompactedGraph, GraphError> {
    let mut lines = std::io::BufReader::new(reader).lines();

    let header = lines
        .next()
        .ok_or_else(|| GraphError::MalformedGraph("missing vertex-count header line".into()))?
        .map_err(|e| GraphError::MalformedGraph(format!("io error reading header: {e}")))?;
    let n: usize = header.trim().parse().map_err(|_| {
        GraphError::MalformedGraph(format!("invalid vertex count {header:?}"))
    })?;

    let mut labels = Vec::with_capacity(n);
    let mut adjacency = Vec::with_capacity(n);
    for row_index in 0..n {
        let line = lines
            .next()
            .ok_or_else(|| {
                GraphError::MalformedGraph(format!(
                    "expected {n} vertex lines, found only {row_index}"
                ))
            })?
            .map_err(|e| {
                GraphError::MalformedGraph(format!("io error reading vertex line {row_index}: {e}"))
            })?;

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let label = tokens
            .last()
            .ok_or_else(|| GraphError::MalformedGraph(format!("vertex line {row_index} has no label")))?
            .to_string();

        let mut successors = Vec::with_capacity(tokens.len().saturating_sub(1));
        for tok in &tokens[..tokens.len() - 1] {
            let id: usize = tok.parse().map_err(|_| {
                GraphError::MalformedGraph(format!("invalid successor id {tok:?} on line {row_index}"))
            })?;
            if id >= n {
                return Err(GraphError::MalformedGraph(format!(
                    "successor id {id} out of range for {n} vertices"
                )));
            }
            successors.push(id);
        }

        labels.push(label);
        adjacency.push(successors);
    }

    log::debug!(
        "load_text: {n} compacted vertices, {} edges",
        adjacency.iter().map(Vec::len).sum::<usize>()
    );
    Ok(CompactedGraph { labels, adjacency })
}

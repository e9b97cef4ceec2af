//! Textual compacted-graph loading, chain expansion, and GFA emission —
//! the supplemented I/O surface from the original preprocessing tool that
//! spec.md's core distillation left out (spec.md §6). This crate only
//! touches `seqgraph-align` through its public `build_graph` contract: it
//! turns a file into a [`seqgraph_align::CharGraph`], or a loaded graph back
//! into GFA text, and owns no DP state of its own.

mod expand;
mod gfa;
mod text;

pub use expand::{expand, ExpandedGraph};
pub use gfa::write_gfa;
pub use text::{load_text, CompactedGraph};

use std::io::Read;

use seqgraph_align::CharGraph;
use seqgraph_types::GraphError;

/// Loads a compacted graph from the textual format and expands it straight
/// into a queryable [`CharGraph`], the common case for callers who don't
/// need the intermediate chain-labeled representation.
pub fn load_char_graph<R: Read>(reader: R) -> Result<CharGraph, GraphError> {
    let compacted = load_text(reader)?;
    let expanded = expand(&compacted);
    seqgraph_align::build_graph(&expanded.labels, &expanded.adjacency)
}

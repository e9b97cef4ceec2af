//! Emits a [`CompactedGraph`] as GFA1, mirroring `OutputCompactedGraphInGFA`
//! in the original C++: one `S` segment line per compacted vertex (chain
//! string as the sequence) and one `L` link line per edge, both ends
//! arbitrarily oriented forward since the graph carries no strand
//! information of its own.

use std::io::{self, Write};

use crate::text::CompactedGraph;

pub fn write_gfa<W: Write>(graph: &CompactedGraph, mut writer: W) -> io::Result<()> {
    writeln!(writer, "H\tVN:Z:1.0")?;
    for (id, label) in graph.labels.iter().enumerate() {
        writeln!(writer, "S\t{id}\t{label}")?;
    }
    for (id, successors) in graph.adjacency.iter().enumerate() {
        for &succ in successors {
            writeln!(writer, "L\t{id}\t+\t{succ}\t+\t0M")?;
        }
    }
    Ok(())
}

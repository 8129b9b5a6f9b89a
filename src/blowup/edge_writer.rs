use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use tracing::debug;

use super::graph::*;

/// Writes one `u v` line per edge, in the given order.
pub fn write_edges<W: Write>(
    mut writer: W,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<NumEdges, std::io::Error> {
    let mut num_edges: NumEdges = 0;

    for Edge(u, v) in edges {
        writeln!(writer, "{u} {v}")?;
        num_edges += 1;
    }

    writer.flush()?;
    Ok(num_edges)
}

/// Creates or truncates `path` and writes `edges` into it.
pub fn write_edges_to_file(path: impl AsRef<Path>, edges: &[Edge]) -> anyhow::Result<NumEdges> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;

    let num_edges = write_edges(BufWriter::new(file), edges.iter().copied())
        .with_context(|| format!("Cannot write edges to {}", path.display()))?;

    debug!("Wrote {num_edges} edges to {}", path.display());
    Ok(num_edges)
}

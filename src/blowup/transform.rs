//! Vertex-doubling blow-up used to prepare graphs for biplanarity testing.
//!
//! Every vertex `v` is split into an even copy `2v` and an odd copy `2v + 1`;
//! every edge `(a, b)` becomes four edges between the copies. The order of
//! the four edges is consumed positionally downstream and must not change.

use std::io::ErrorKind;

use tracing::debug;

use super::graph::*;

pub type Result<T> = std::io::Result<T>;

/// Even and odd copy of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexCopies {
    pub even: Node,
    pub odd: Node,
}

impl VertexCopies {
    /// Returns `None` if `2v + 1` does not fit into a [`Node`].
    pub fn of(v: Node) -> Option<Self> {
        let even = v.checked_mul(2)?;
        let odd = even.checked_add(1)?;
        Some(Self { even, odd })
    }
}

/// The four edges replacing `(a, b)`: `ab`, `a'b'`, `a'b`, `ab'`.
pub fn blow_up_edge(Edge(a, b): Edge) -> Option<[Edge; 4]> {
    let a = VertexCopies::of(a)?;
    let b = VertexCopies::of(b)?;

    Some([
        Edge(a.even, b.even),
        Edge(a.odd, b.odd),
        Edge(a.odd, b.even),
        Edge(a.even, b.odd),
    ])
}

pub fn blow_up(edges: &[Edge]) -> Result<Vec<Edge>> {
    let mut blown = Vec::with_capacity(4 * edges.len());

    for (k, &edge) in edges.iter().enumerate() {
        let Some(group) = blow_up_edge(edge) else {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Edge #{k} {edge:?}: vertex copy overflows"),
            ));
        };
        blown.extend_from_slice(&group);
    }

    debug!("Blew up {} edges into {}", edges.len(), blown.len());
    Ok(blown)
}

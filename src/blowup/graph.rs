/// Vertex label. Signed, since labels are passed through without validation.
pub type Node = i128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    pub fn max_node(&self) -> Node {
        self.0.max(self.1)
    }

    pub fn min_node(&self) -> Node {
        self.0.min(self.1)
    }
}

pub type NumEdges = u64;

/// Smallest and largest vertex label mentioned by `edges`, if any.
pub fn node_range<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Option<(Node, Node)> {
    edges.into_iter().fold(None, |range, edge| match range {
        None => Some((edge.min_node(), edge.max_node())),
        Some((lo, hi)) => Some((lo.min(edge.min_node()), hi.max(edge.max_node()))),
    })
}

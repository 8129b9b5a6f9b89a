pub mod edge_reader;
pub mod edge_writer;
pub mod graph;
pub mod transform;

pub use edge_reader::{read_edges, read_edges_from_file, EdgeReader};
pub use edge_writer::{write_edges, write_edges_to_file};
pub use graph::{Edge, Node, NumEdges};
pub use transform::{blow_up, blow_up_edge, VertexCopies};

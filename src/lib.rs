pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    find_cycle, has_cycle, roots, topological_sort, DirectedGraph, EdgeId, GraphView, VertexId,
};

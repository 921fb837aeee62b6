use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// Error type for graph operations
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex identifier was used against a graph it does not belong to
    #[error("vertex {vertex} does not belong to this graph")]
    VertexNotFound { vertex: VertexId },

    /// An edge identifier references an endpoint outside this graph
    #[error("edge {edge} does not belong to this graph")]
    EdgeNotFound { edge: EdgeId },

    /// An ordinal vertex position past the end of the vertex list
    #[error("vertex index {index} is out of range for a graph with {count} vertices")]
    VertexIndexOutOfRange { index: usize, count: usize },

    /// Topological sort invoked on a graph that contains a cycle
    #[error("graph contains a cycle: {}", format_cycle(.path))]
    CycleDetected { path: Vec<VertexId> },
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn vertex_not_found(vertex: VertexId) -> Self {
        Error::VertexNotFound { vertex }
    }

    pub fn edge_not_found(edge: EdgeId) -> Self {
        Error::EdgeNotFound { edge }
    }

    pub fn cycle_detected(path: Vec<VertexId>) -> Self {
        Error::CycleDetected { path }
    }
}

/// Render a cycle walk as `a -> b -> a`.
fn format_cycle(path: &[VertexId]) -> String {
    path.iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn test_vertex_not_found_message() {
        let mut graph = DirectedGraph::new();
        let vertex = graph.add_vertex();

        let err = Error::vertex_not_found(vertex);
        assert_eq!(err.to_string(), "vertex 0 does not belong to this graph");
    }

    #[test]
    fn test_edge_not_found_message() {
        let mut graph = DirectedGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let (edge, _) = graph.add_edge(a, b).unwrap();

        let err = Error::edge_not_found(edge);
        assert_eq!(err.to_string(), "edge 0 -> 1 does not belong to this graph");
    }

    #[test]
    fn test_cycle_detected_message() {
        let mut graph = DirectedGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();

        let err = Error::cycle_detected(vec![a, b, a]);
        assert_eq!(err.to_string(), "graph contains a cycle: 0 -> 1 -> 0");
    }
}

//! Read-only traversal capability shared by the graph algorithms.

use crate::graph::digraph::{DirectedGraph, EdgeId, VertexId};

/// The read operations the graph algorithms traverse through.
///
/// [`has_cycle`](crate::has_cycle) and
/// [`topological_sort`](crate::topological_sort) are written against this
/// trait rather than against [`DirectedGraph`], so they work unchanged over
/// any representation that can enumerate vertices, edges, and out-neighbors.
pub trait GraphView {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// All vertices, in the representation's enumeration order.
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// All edges, in the representation's enumeration order.
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Out-neighbors of `vertex` in adjacency order.
    ///
    /// A vertex the graph never issued has no out-neighbors; the iterator is
    /// simply empty. The validated lookup is
    /// [`DirectedGraph::adjacent`].
    fn out_neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Source endpoint encoded in an edge identifier.
    fn edge_source(&self, edge: EdgeId) -> VertexId {
        edge.source
    }

    /// Target endpoint encoded in an edge identifier.
    fn edge_target(&self, edge: EdgeId) -> VertexId {
        edge.target
    }
}

impl GraphView for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new(self.edges())
    }

    fn out_neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.adjacent(vertex) {
            Ok(neighbors) => Box::new(neighbors),
            Err(_) => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Walks the view surface only, never the concrete container.
    fn reachable_from<G: GraphView + ?Sized>(graph: &G, start: VertexId) -> usize {
        let mut seen = vec![start];
        let mut frontier = vec![start];
        while let Some(vertex) = frontier.pop() {
            for next in graph.out_neighbors(vertex) {
                if !seen.contains(&next) {
                    seen.push(next);
                    frontier.push(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn test_algorithms_can_stay_generic_over_the_view() {
        // 0 -> 1 -> 2, 3 isolated
        let mut graph = DirectedGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let c = graph.add_vertex();
        graph.add_vertex();
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();

        let view: &dyn GraphView = &graph;
        assert_eq!(view.vertex_count(), 4);
        assert_eq!(view.edge_count(), 2);
        assert_eq!(reachable_from(view, a), 3);
        assert_eq!(reachable_from(view, c), 1);
    }

    #[test]
    fn test_edge_endpoints_come_from_the_identifier() {
        let mut graph = DirectedGraph::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        let (edge, _) = graph.add_edge(a, b).unwrap();

        assert_eq!(GraphView::edge_source(&graph, edge), a);
        assert_eq!(GraphView::edge_target(&graph, edge), b);
    }

    #[test]
    fn test_foreign_vertex_has_no_out_neighbors() {
        let graph = DirectedGraph::new();

        let mut other = DirectedGraph::new();
        let foreign = other.add_vertex();

        assert_eq!(GraphView::out_neighbors(&graph, foreign).count(), 0);
    }
}

//! Topological sorting by depth-first post-order accumulation.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::graph::cycle::find_cycle;
use crate::graph::digraph::VertexId;
use crate::graph::view::GraphView;

/// Vertices with no incoming edge, in ascending identifier order.
///
/// In an acyclic graph every vertex is reachable from some root: a vertex
/// with no root ancestor would have to be a root itself.
pub fn roots<G: GraphView + ?Sized>(graph: &G) -> Vec<VertexId> {
    let mut has_incoming: HashSet<VertexId> = HashSet::new();
    for edge in graph.edges() {
        has_incoming.insert(graph.edge_target(edge));
    }

    let mut roots: Vec<VertexId> = graph
        .vertices()
        .filter(|vertex| !has_incoming.contains(vertex))
        .collect();
    roots.sort_unstable();
    roots
}

/// Order the vertices so that every edge points forward in the result.
///
/// Two-phase DFS sort: seed the traversal with the [`roots`] in ascending
/// order, accumulate vertices in post-order (a vertex is recorded only after
/// everything reachable from it), then emit the accumulator back-to-front.
/// Neighbors are visited in adjacency order, so the output is fully
/// deterministic for a given insertion history.
///
/// A cyclic graph cannot be ordered; the sort validates this up front and
/// reports the offending cycle as [`Error::CycleDetected`].
///
/// Recursion depth is bounded by the longest simple path in the graph.
pub fn topological_sort<G: GraphView + ?Sized>(graph: &G) -> Result<Vec<VertexId>> {
    if let Some(path) = find_cycle(graph) {
        return Err(Error::cycle_detected(path));
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut postorder: Vec<VertexId> = Vec::with_capacity(graph.vertex_count());

    for root in roots(graph) {
        visit(graph, root, &mut visited, &mut postorder);
    }

    // Post-order puts every vertex after its descendants; popping from the
    // back converts that into a topological order.
    let mut order = Vec::with_capacity(postorder.len());
    while let Some(vertex) = postorder.pop() {
        order.push(vertex);
    }
    Ok(order)
}

fn visit<G: GraphView + ?Sized>(
    graph: &G,
    vertex: VertexId,
    visited: &mut HashSet<VertexId>,
    postorder: &mut Vec<VertexId>,
) {
    if !visited.insert(vertex) {
        return;
    }
    for next in graph.out_neighbors(vertex) {
        visit(graph, next, visited, postorder);
    }
    postorder.push(vertex);
}

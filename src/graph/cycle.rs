//! Cycle detection by three-color depth-first search.

use std::collections::HashSet;

use crate::graph::digraph::VertexId;
use crate::graph::view::GraphView;

/// Whether the graph contains at least one directed cycle.
///
/// Classic three-color DFS. Vertices on the current recursion path are grey
/// and fully explored vertices are black; everything else is implicitly
/// white. Reaching a grey vertex again means a back-edge, and the search
/// short-circuits. Black vertices are skipped across all starting points,
/// so the whole check is O(V + E).
///
/// Recursion depth is bounded by the longest simple path in the graph.
pub fn has_cycle<G: GraphView + ?Sized>(graph: &G) -> bool {
    let mut grey: HashSet<VertexId> = HashSet::new();
    let mut black: HashSet<VertexId> = HashSet::new();

    for vertex in graph.vertices() {
        if black.contains(&vertex) {
            continue;
        }
        if visit(graph, vertex, &mut grey, &mut black) {
            return true;
        }
    }
    false
}

/// Returns true as soon as the walk below `vertex` reaches a grey vertex.
fn visit<G: GraphView + ?Sized>(
    graph: &G,
    vertex: VertexId,
    grey: &mut HashSet<VertexId>,
    black: &mut HashSet<VertexId>,
) -> bool {
    if grey.contains(&vertex) {
        return true;
    }
    grey.insert(vertex);

    for next in graph.out_neighbors(vertex) {
        if black.contains(&next) {
            continue;
        }
        if visit(graph, next, grey, black) {
            return true;
        }
    }

    grey.remove(&vertex);
    black.insert(vertex);
    false
}

/// Find a directed cycle and return it as a closed walk `[v, .., v]`.
///
/// Same traversal as [`has_cycle`], additionally keeping the DFS path so the
/// first back-edge found can be reported as the full cycle it closes.
/// Returns `None` when the graph is acyclic.
pub fn find_cycle<G: GraphView + ?Sized>(graph: &G) -> Option<Vec<VertexId>> {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut on_path: HashSet<VertexId> = HashSet::new();
    let mut path: Vec<VertexId> = Vec::new();

    for vertex in graph.vertices() {
        if visited.contains(&vertex) {
            continue;
        }
        if let Some(cycle) = search(graph, vertex, &mut visited, &mut on_path, &mut path) {
            return Some(cycle);
        }
    }
    None
}

fn search<G: GraphView + ?Sized>(
    graph: &G,
    vertex: VertexId,
    visited: &mut HashSet<VertexId>,
    on_path: &mut HashSet<VertexId>,
    path: &mut Vec<VertexId>,
) -> Option<Vec<VertexId>> {
    visited.insert(vertex);
    on_path.insert(vertex);
    path.push(vertex);

    for next in graph.out_neighbors(vertex) {
        if on_path.contains(&next) {
            // Back-edge: the cycle is the path suffix starting at `next`,
            // closed by repeating it.
            if let Some(start) = path.iter().rposition(|&v| v == next) {
                let mut cycle = path[start..].to_vec();
                cycle.push(next);
                return Some(cycle);
            }
        }
        if !visited.contains(&next) {
            if let Some(cycle) = search(graph, next, visited, on_path, path) {
                return Some(cycle);
            }
        }
    }

    on_path.remove(&vertex);
    path.pop();
    None
}

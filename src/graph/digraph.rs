//! Append-only directed-graph storage.
//!
//! Vertices and edges are only ever added, never removed, so identifiers
//! stay valid for the lifetime of the graph that issued them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a vertex, assigned densely in insertion order.
///
/// The identifier doubles as the vertex's ordinal position, so it is stable
/// and monotonically increasing for the lifetime of the issuing graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Identifier of the vertex at `index` in insertion order.
    ///
    /// Mostly useful for alternative [`GraphView`](crate::GraphView)
    /// implementations; operations on [`DirectedGraph`] validate every
    /// identifier they are handed.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a directed edge: the ordered (source, target) pair.
///
/// Because the identifier encodes its endpoints, an edge is uniquely
/// determined by them and no parallel edges can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    pub source: VertexId,
    pub target: VertexId,
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// An in-memory directed graph.
///
/// Pure structural storage: an insertion-ordered vertex list, an
/// insertion-ordered edge list, and per-vertex out-neighbor lists. All
/// collections grow monotonically. Algorithms live in the sibling modules
/// and borrow the graph read-only through [`GraphView`](crate::GraphView).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedGraph {
    vertex_list: Vec<VertexId>,
    edge_list: Vec<EdgeId>,
    adjacency: Vec<Vec<VertexId>>,
}

impl DirectedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with no incident edges and return its identifier.
    pub fn add_vertex(&mut self) -> VertexId {
        let vertex = VertexId(self.adjacency.len());
        self.vertex_list.push(vertex);
        self.adjacency.push(Vec::new());
        vertex
    }

    /// Add a directed edge from `source` to `target`.
    ///
    /// Returns the edge identifier and `true` if the edge was just created.
    /// If an edge with these endpoints already exists, returns the existing
    /// identifier and `false` without mutating the graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<(EdgeId, bool)> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        if let Some(existing) = self.lookup_edge(source, target) {
            return Ok((existing, false));
        }

        let edge = EdgeId { source, target };
        self.adjacency[source.0].push(target);
        self.edge_list.push(edge);
        Ok((edge, true))
    }

    /// Look up the edge from `source` to `target`, if present.
    ///
    /// Read-only probe: never mutates, and endpoints that do not belong to
    /// this graph simply yield `None`.
    pub fn lookup_edge(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        let neighbors = self.adjacency.get(source.0)?;
        if neighbors.contains(&target) {
            Some(EdgeId { source, target })
        } else {
            None
        }
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_list.iter().copied()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_list.iter().copied()
    }

    /// Out-neighbors of `vertex` in edge-insertion order.
    pub fn adjacent(&self, vertex: VertexId) -> Result<impl Iterator<Item = VertexId> + '_> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.0].iter().copied())
    }

    /// Source endpoint of `edge`, validated against this graph.
    pub fn source(&self, edge: EdgeId) -> Result<VertexId> {
        self.check_edge(edge)?;
        Ok(edge.source)
    }

    /// Target endpoint of `edge`, validated against this graph.
    pub fn target(&self, edge: EdgeId) -> Result<VertexId> {
        self.check_edge(edge)?;
        Ok(edge.target)
    }

    /// The vertex at ordinal position `index` in insertion order.
    pub fn vertex_at(&self, index: usize) -> Result<VertexId> {
        self.vertex_list
            .get(index)
            .copied()
            .ok_or(Error::VertexIndexOutOfRange {
                index,
                count: self.vertex_list.len(),
            })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_list.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Whether `vertex` was issued by this graph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.0 < self.adjacency.len()
    }

    /// Number of outgoing edges of `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.0].len())
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::vertex_not_found(vertex))
        }
    }

    fn check_edge(&self, edge: EdgeId) -> Result<()> {
        if self.contains_vertex(edge.source) && self.contains_vertex(edge.target) {
            Ok(())
        } else {
            Err(Error::edge_not_found(edge))
        }
    }
}

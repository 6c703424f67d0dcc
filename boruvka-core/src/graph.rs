//! Validated input graphs and the weight-sorted edge view.
//!
//! [`Graph::new`] performs every input check up front so a solver never
//! starts a round on malformed input. Vertices receive dense indices in
//! registration order; edges keep their input orientation and position, and
//! the sorted view orders them by `(weight, input position)`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use tracing::debug;

use crate::{
    Weight,
    error::{BoruvkaError, Result, render},
};

/// An undirected weighted edge as supplied by the caller.
///
/// # Examples
/// ```
/// use boruvka_core::Edge;
///
/// let edge = Edge::new("A", "B", 4);
/// assert_eq!(edge.endpoints(), (&"A", &"B"));
/// assert_eq!(edge.weight(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<V, W> {
    source: V,
    target: V,
    weight: W,
}

impl<V, W: Copy> Edge<V, W> {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as given in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &V { &self.source }

    /// Returns the second endpoint as given in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &V { &self.target }

    /// Returns both endpoints in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (&V, &V) { (&self.source, &self.target) }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((source, target, weight): (V, V, W)) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<V: Eq, W: Eq> Eq for Edge<V, W> {}

/// The registered vertices of a graph and their dense indices.
#[derive(Clone, Debug)]
pub struct VertexSet<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
}

impl<V> VertexSet<V>
where
    V: Clone + Eq + Hash,
{
    /// Registers `vertices` in order, collapsing repeats onto their first
    /// occurrence.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::VertexSet;
    ///
    /// let set = VertexSet::new(["A", "B", "A"]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.index_of(&"B"), Some(1));
    /// ```
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for vertex in vertices {
            if let Entry::Vacant(slot) = index.entry(vertex) {
                ordered.push(slot.key().clone());
                slot.insert(ordered.len() - 1);
            }
        }
        Self {
            vertices: ordered,
            index,
        }
    }

    /// Returns the dense index assigned to `vertex`.
    #[must_use]
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }
}

impl<V> VertexSet<V> {
    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` when no vertices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex registered at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Returns the vertices in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }
}

/// An edge resolved to vertex indices, as held in the sorted view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IndexedEdge<W> {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: W,
    pub(crate) input: usize,
}

/// A validated, undirected weighted graph.
///
/// # Examples
/// ```
/// use boruvka_core::Graph;
///
/// let graph = Graph::new(["A", "B", "C"], [("A", "B", 2), ("B", "C", 1)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    vertices: VertexSet<V>,
    edges: Vec<Edge<V, W>>,
    sorted: Vec<IndexedEdge<W>>,
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + std::fmt::Debug,
    W: Weight,
{
    /// Validates the vertex set and edge list and builds the sorted edge view.
    ///
    /// Repeated vertices collapse onto their first occurrence. Duplicate
    /// edges and negative weights are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - the vertex set is empty ([`BoruvkaError::EmptyGraph`])
    /// - an edge names a vertex outside the set ([`BoruvkaError::UnknownVertex`])
    /// - an edge weight is NaN or infinite ([`BoruvkaError::NonFiniteWeight`])
    /// - an edge is a self-loop ([`BoruvkaError::SelfLoop`])
    ///
    /// Edges are checked in input order and the first failure is reported.
    pub fn new<E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        E: Into<Edge<V, W>>,
    {
        let vertices = VertexSet::new(vertices);
        if vertices.is_empty() {
            return Err(BoruvkaError::EmptyGraph);
        }

        let edges: Vec<Edge<V, W>> = edges.into_iter().map(Into::into).collect();
        let mut sorted = Vec::with_capacity(edges.len());
        for (input, edge) in edges.iter().enumerate() {
            sorted.push(validate_edge(&vertices, edge, input)?);
        }

        sorted.sort_unstable_by(|left, right| {
            left.weight
                .cmp_weight(&right.weight)
                .then_with(|| left.input.cmp(&right.input))
        });

        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "validated input graph"
        );

        Ok(Self {
            vertices,
            edges,
            sorted,
        })
    }
}

impl<V, W> Graph<V, W> {
    /// Returns the number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, including duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the registered vertex set.
    #[must_use]
    pub fn vertex_set(&self) -> &VertexSet<V> {
        &self.vertices
    }

    /// Returns the edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// Returns the edges in ascending weight order, ties in input order.
    pub fn sorted_edges(&self) -> impl Iterator<Item = &Edge<V, W>> + '_ {
        self.sorted.iter().filter_map(|edge| self.edges.get(edge.input))
    }

    pub(crate) fn sorted_view(&self) -> &[IndexedEdge<W>] {
        &self.sorted
    }
}

fn validate_edge<V, W>(
    vertices: &VertexSet<V>,
    edge: &Edge<V, W>,
    input: usize,
) -> Result<IndexedEdge<W>>
where
    V: Clone + Eq + Hash + std::fmt::Debug,
    W: Weight,
{
    let resolve = |vertex: &V| {
        vertices
            .index_of(vertex)
            .ok_or_else(|| BoruvkaError::UnknownVertex {
                vertex: render(vertex),
                edge: input,
            })
    };
    let source = resolve(edge.source())?;
    let target = resolve(edge.target())?;

    if !edge.weight.is_finite_weight() {
        return Err(BoruvkaError::NonFiniteWeight {
            weight: render(&edge.weight),
            edge: input,
        });
    }

    if source == target {
        return Err(BoruvkaError::SelfLoop {
            vertex: render(edge.source()),
            edge: input,
        });
    }

    Ok(IndexedEdge {
        source,
        target,
        weight: edge.weight,
        input,
    })
}

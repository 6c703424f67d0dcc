//! Forest accumulation and the finalised spanning forest.

use crate::{BoruvkaError, Edge, Result, Weight, error::render, graph::IndexedEdge};

/// Append-only collection of the edges chosen so far.
#[derive(Debug)]
pub(crate) struct ForestAccumulator<'g, V, W> {
    input: &'g [Edge<V, W>],
    edges: Vec<Edge<V, W>>,
    total_weight: W,
}

impl<'g, V: Clone, W: Weight> ForestAccumulator<'g, V, W> {
    pub(crate) fn new(input: &'g [Edge<V, W>], vertex_count: usize) -> Self {
        Self {
            input,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
            total_weight: W::ZERO,
        }
    }

    /// Appends `edge`, failing when the running total no longer fits `W`.
    pub(crate) fn push(&mut self, edge: &IndexedEdge<W>) -> Result<()> {
        let Some(original) = self.input.get(edge.input) else {
            return Ok(());
        };
        self.total_weight = self.total_weight.accumulate(edge.weight).ok_or_else(|| {
            BoruvkaError::WeightOverflow {
                total: render(&self.total_weight),
                edge: edge.input,
            }
        })?;
        self.edges.push(original.clone());
        Ok(())
    }

    pub(crate) fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn total_weight(&self) -> W {
        self.total_weight
    }

    pub(crate) fn finish(self, component_count: usize, rounds: usize) -> SpanningForest<V, W> {
        SpanningForest {
            edges: self.edges,
            total_weight: self.total_weight,
            component_count,
            rounds,
        }
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// Edges appear in the order they were applied: round by round, and within
/// a round in candidate discovery order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpanningForest<V, W> {
    edges: Vec<Edge<V, W>>,
    total_weight: W,
    component_count: usize,
    rounds: usize,
}

impl<V, W: Copy> SpanningForest<V, W> {
    /// Returns the forest edges in application order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V, W>] { &self.edges }

    /// Returns the number of forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the summed weight of the forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of rounds that merged at least one pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<V, W>> {
        self.edges
    }
}

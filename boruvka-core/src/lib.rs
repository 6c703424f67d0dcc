//! Borůvka minimum spanning forest engine.
//!
//! The crate computes a minimum spanning forest (a minimum spanning tree when
//! the input is connected) with Borůvka's round-based component merging:
//!
//! - [`Graph`] validates the vertex set and edge list and keeps a stable,
//!   weight-sorted view of the edges.
//! - [`Partition`] tracks component membership with a disjoint-set keyed by
//!   vertex, so [`ComponentId`]s stay meaningful while a round merges
//!   components.
//! - [`Boruvka`] drives rounds until one component remains or a round finds
//!   no crossing edge, returning a [`SpanningForest`].
//! - [`RoundObserver`] receives a read-only [`RoundSnapshot`] after every
//!   round; [`TraceRecorder`] keeps owned copies for presentation layers.
//!
//! # Determinism
//!
//! Edges are scanned in ascending weight order with ties broken by input
//! position. Candidates are applied in the order their component pair was
//! first discovered, so repeated runs, and sequential versus parallel scans,
//! produce identical forests.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the solver emits:
//!
//! - `boruvka_rounds_total` (counter)
//! - `boruvka_merges_total` (counter)
//! - `boruvka_discarded_candidates_total` (counter)
//!
//! # Examples
//! ```
//! use boruvka_core::minimum_spanning_forest;
//!
//! let forest = minimum_spanning_forest(
//!     ["A", "B", "C", "D"],
//!     [("A", "B", 4), ("A", "C", 2), ("B", "C", 1), ("B", "D", 3), ("C", "D", 5)],
//! )?;
//! assert_eq!(forest.total_weight(), 6);
//! assert!(forest.is_tree());
//! # Ok::<(), boruvka_core::BoruvkaError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod forest;
mod graph;
mod partition;
mod round;
mod solver;
mod trace;
mod weight;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{BoruvkaBuilder, DEFAULT_PARALLEL_THRESHOLD, ExecutionStrategy},
    error::{BoruvkaError, BoruvkaErrorCode, Result},
    forest::SpanningForest,
    graph::{Edge, Graph, VertexSet},
    partition::{ComponentId, Partition},
    round::{Merge, RoundReport},
    solver::{Boruvka, minimum_spanning_forest},
    trace::{NoopObserver, RoundObserver, RoundSnapshot, RoundTrace, TraceRecorder},
    weight::Weight,
};

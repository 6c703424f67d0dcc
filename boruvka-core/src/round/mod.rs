//! One Borůvka round: candidate scan followed by merge application.
//!
//! The scan never mutates the partition. Every lookup during the scan uses
//! the membership snapshot taken at round start, and merges are deferred to
//! the apply phase, which re-validates each candidate against the live
//! partition before joining its components.

mod scan;

use tracing::{Span, debug, field, instrument, trace};

use crate::{
    ComponentId, Partition, Result, Weight, forest::ForestAccumulator, graph::IndexedEdge,
};

pub(crate) use self::scan::Candidate;

/// A merge applied during a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Merge {
    edge: usize,
    left: ComponentId,
    right: ComponentId,
    survivor: ComponentId,
}

impl Merge {
    /// Returns the input position of the edge that joined the components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> usize { self.edge }

    /// Returns the component containing the edge's first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> ComponentId { self.left }

    /// Returns the component containing the edge's second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> ComponentId { self.right }

    /// Returns the identifier of the merged component.
    #[must_use]
    #[rustfmt::skip]
    pub const fn survivor(&self) -> ComponentId { self.survivor }
}

/// Summary of a round that applied at least one merge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundReport {
    round: usize,
    candidates: usize,
    merges: Vec<Merge>,
    discarded: usize,
    components_after: usize,
}

impl RoundReport {
    /// Returns the one-based round number.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round(&self) -> usize { self.round }

    /// Returns the number of component pairs that produced a candidate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidates(&self) -> usize { self.candidates }

    /// Returns the merges in application order.
    #[must_use]
    #[rustfmt::skip]
    pub fn merges(&self) -> &[Merge] { &self.merges }

    /// Returns the number of candidates dropped because an earlier merge in
    /// the same round had already joined their components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn discarded(&self) -> usize { self.discarded }

    /// Returns the number of components left after the round.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components_after(&self) -> usize { self.components_after }
}

/// Result of executing one round.
#[derive(Debug)]
pub(crate) enum RoundOutcome {
    /// At least one candidate was applied.
    Merged(RoundReport),
    /// No edge crosses two components; the partition is final.
    Exhausted,
}

/// How a round discovers its candidates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ScanMode {
    Sequential,
    #[cfg(feature = "parallel")]
    Parallel,
}

/// Drives rounds over the sorted edge view of a graph.
pub(crate) struct RoundExecutor<'g, W> {
    edges: &'g [IndexedEdge<W>],
    mode: ScanMode,
}

impl<'g, W: Weight> RoundExecutor<'g, W> {
    pub(crate) fn new(edges: &'g [IndexedEdge<W>], mode: ScanMode) -> Self {
        Self { edges, mode }
    }

    /// Collects the round's candidates against the current partition.
    pub(crate) fn collect_candidates<V>(&self, partition: &mut Partition<'_, V>) -> Vec<Candidate> {
        let membership = partition.snapshot();
        match self.mode {
            ScanMode::Sequential => scan::scan_sequential(self.edges, &membership),
            #[cfg(feature = "parallel")]
            ScanMode::Parallel => scan::scan_parallel(self.edges, &membership),
        }
    }

    /// Runs one full round: snapshot, scan, and apply.
    ///
    /// Fails with [`crate::BoruvkaError::WeightOverflow`] when an applied
    /// edge pushes the forest total past the range of `W`.
    #[instrument(
        name = "core.round",
        level = "debug",
        skip_all,
        fields(round = round, candidates = field::Empty, merges = field::Empty),
    )]
    pub(crate) fn execute<V: Clone>(
        &self,
        round: usize,
        partition: &mut Partition<'_, V>,
        forest: &mut ForestAccumulator<'_, V, W>,
    ) -> Result<RoundOutcome> {
        let candidates = self.collect_candidates(partition);
        let span = Span::current();
        span.record("candidates", candidates.len());
        if candidates.is_empty() {
            debug!(
                components = partition.component_count(),
                "no crossing edges remain"
            );
            return Ok(RoundOutcome::Exhausted);
        }

        let mut merges = Vec::with_capacity(candidates.len());
        let mut discarded = 0_usize;
        for candidate in &candidates {
            let edge = &self.edges[candidate.position];
            let left = partition.find_index(edge.source);
            let right = partition.find_index(edge.target);
            match partition.union(left, right) {
                Some(survivor) => {
                    forest.push(edge)?;
                    merges.push(Merge {
                        edge: edge.input,
                        left,
                        right,
                        survivor,
                    });
                }
                None => {
                    trace!(
                        left = %candidate.pair.0,
                        right = %candidate.pair.1,
                        "candidate components already merged this round"
                    );
                    discarded = discarded.saturating_add(1);
                }
            }
        }

        span.record("merges", merges.len());
        debug!(
            candidates = candidates.len(),
            merges = merges.len(),
            discarded,
            components = partition.component_count(),
            "round applied"
        );

        Ok(RoundOutcome::Merged(RoundReport {
            round,
            candidates: candidates.len(),
            merges,
            discarded,
            components_after: partition.component_count(),
        }))
    }
}

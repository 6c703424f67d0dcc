//! Per-round observation of the solver.
//!
//! The solver hands a borrowed [`RoundSnapshot`] to a [`RoundObserver`] once
//! before the first round (round `0`) and once after every round that merged
//! components. Observers only read; presentation layers that need to keep
//! the data can use [`TraceRecorder`], which stores owned [`RoundTrace`]s.

use crate::{Edge, RoundReport};

/// Read-only view of the solver state after a round.
#[derive(Debug)]
pub struct RoundSnapshot<'a, V, W> {
    pub(crate) round: usize,
    pub(crate) components: &'a [Vec<V>],
    pub(crate) forest: &'a [Edge<V, W>],
    pub(crate) total_weight: W,
    pub(crate) description: &'a str,
    pub(crate) report: Option<&'a RoundReport>,
}

impl<'a, V, W: Copy> RoundSnapshot<'a, V, W> {
    /// Returns the round number; `0` is the initial partition.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round(&self) -> usize { self.round }

    /// Returns the vertex sets of the current components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> &'a [Vec<V>] { self.components }

    /// Returns the forest edges accumulated so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &'a [Edge<V, W>] { self.forest }

    /// Returns the summed weight of the forest so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> W { self.total_weight }

    /// Returns a human-readable account of the round.
    #[must_use]
    #[rustfmt::skip]
    pub const fn description(&self) -> &'a str { self.description }

    /// Returns the round's merge report, absent for round `0`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn report(&self) -> Option<&'a RoundReport> { self.report }
}

impl<V: Clone, W: Copy> RoundSnapshot<'_, V, W> {
    /// Copies the snapshot into an owned [`RoundTrace`].
    #[must_use]
    pub fn to_trace(&self) -> RoundTrace<V, W> {
        RoundTrace {
            round: self.round,
            components: self.components.to_vec(),
            forest: self.forest.to_vec(),
            description: self.description.to_owned(),
        }
    }
}

/// Receives a snapshot after each round.
///
/// The solver calls [`RoundObserver::on_round`] once for the initial
/// partition (round `0`) and once after every round that merged at least one
/// pair of components. A final round that finds no crossing edge changes
/// nothing, so it produces no snapshot: on disconnected input the last
/// snapshot already holds the final components and forest.
///
/// Closures taking `&RoundSnapshot` implement the trait.
///
/// # Examples
/// ```
/// use boruvka_core::{Boruvka, Graph, RoundSnapshot};
///
/// let graph = Graph::new([1_u32, 2], [(1, 2, 7)])?;
/// let mut rounds = Vec::new();
/// let mut observer = |snapshot: &RoundSnapshot<'_, u32, i32>| {
///     rounds.push(snapshot.components().len());
/// };
/// Boruvka::default().run_with_observer(&graph, &mut observer)?;
/// assert_eq!(rounds, vec![2, 1]);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
pub trait RoundObserver<V, W> {
    /// Called with the state after a round.
    fn on_round(&mut self, snapshot: &RoundSnapshot<'_, V, W>);

    /// Returns `false` when the observer ignores snapshots, letting the
    /// solver skip building them.
    fn wants_snapshots(&self) -> bool {
        true
    }
}

impl<V, W, F> RoundObserver<V, W> for F
where
    F: FnMut(&RoundSnapshot<'_, V, W>),
{
    fn on_round(&mut self, snapshot: &RoundSnapshot<'_, V, W>) {
        self(snapshot);
    }
}

/// Observer that ignores every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<V, W> RoundObserver<V, W> for NoopObserver {
    fn on_round(&mut self, _snapshot: &RoundSnapshot<'_, V, W>) {}

    fn wants_snapshots(&self) -> bool {
        false
    }
}

/// Owned record of one round, suitable for handing to a visualiser.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundTrace<V, W> {
    round: usize,
    components: Vec<Vec<V>>,
    forest: Vec<Edge<V, W>>,
    description: String,
}

impl<V, W> RoundTrace<V, W> {
    /// Returns the round number; `0` is the initial partition.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round(&self) -> usize { self.round }

    /// Returns the component vertex sets after the round.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> &[Vec<V>] { &self.components }

    /// Returns the forest accumulated up to and including the round.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &[Edge<V, W>] { &self.forest }

    /// Returns the human-readable account of the round.
    #[must_use]
    #[rustfmt::skip]
    pub fn description(&self) -> &str { &self.description }
}

/// Observer that keeps an owned copy of every snapshot.
///
/// # Examples
/// ```
/// use boruvka_core::{Boruvka, Graph, TraceRecorder};
///
/// let graph = Graph::new(["A", "B", "C"], [("A", "B", 1), ("B", "C", 2)])?;
/// let mut recorder = TraceRecorder::new();
/// let forest = Boruvka::default().run_with_observer(&graph, &mut recorder)?;
/// let trace = recorder.into_rounds();
/// assert_eq!(trace.first().map(|round| round.round()), Some(0));
/// assert_eq!(trace.last().map(|round| round.forest().len()), Some(forest.edge_count()));
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TraceRecorder<V, W> {
    rounds: Vec<RoundTrace<V, W>>,
}

impl<V, W> Default for TraceRecorder<V, W> {
    fn default() -> Self {
        Self { rounds: Vec::new() }
    }
}

impl<V, W> TraceRecorder<V, W> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded rounds in order.
    #[must_use]
    pub fn rounds(&self) -> &[RoundTrace<V, W>] {
        &self.rounds
    }

    /// Consumes the recorder and returns the recorded rounds.
    #[must_use]
    pub fn into_rounds(self) -> Vec<RoundTrace<V, W>> {
        self.rounds
    }
}

impl<V: Clone, W: Copy> RoundObserver<V, W> for TraceRecorder<V, W> {
    fn on_round(&mut self, snapshot: &RoundSnapshot<'_, V, W>) {
        self.rounds.push(snapshot.to_trace());
    }
}

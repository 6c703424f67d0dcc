//! Solver entry point for computing minimum spanning forests.
//!
//! Provides [`Boruvka`], which drives rounds over a validated [`Graph`] until
//! a single component remains or no edge crosses two components, and the
//! [`minimum_spanning_forest`] convenience wrapper.

use std::{fmt::Debug, hash::Hash};

use tracing::{info, instrument, warn};

use crate::{
    Edge, Graph, Partition, Result, RoundReport, Weight,
    builder::{DEFAULT_PARALLEL_THRESHOLD, ExecutionStrategy},
    forest::{ForestAccumulator, SpanningForest},
    round::{RoundExecutor, RoundOutcome, ScanMode},
    trace::{NoopObserver, RoundObserver, RoundSnapshot},
};

/// Borůvka minimum spanning forest solver.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy, Graph};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [("A", "B", 4), ("A", "C", 2), ("B", "C", 1), ("B", "D", 3), ("C", "D", 5)],
/// )?;
/// let solver = BoruvkaBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()?;
/// let forest = solver.run(&graph)?;
/// assert_eq!(forest.total_weight(), 6);
/// assert_eq!(forest.edge_count(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Boruvka {
    execution_strategy: ExecutionStrategy,
    parallel_threshold: usize,
}

impl Default for Boruvka {
    fn default() -> Self {
        Self::new(ExecutionStrategy::Auto, DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl Boruvka {
    pub(crate) fn new(execution_strategy: ExecutionStrategy, parallel_threshold: usize) -> Self {
        Self {
            execution_strategy,
            parallel_threshold,
        }
    }

    /// Returns the execution strategy used when scanning for candidates.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the edge count at which `Auto` switches to the parallel scan.
    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// Input validation happens in [`Graph::new`]. A disconnected graph
    /// yields a forest with [`SpanningForest::component_count`] greater than
    /// one.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::WeightOverflow`] when the forest total
    /// does not fit the weight type.
    pub fn run<V, W>(&self, graph: &Graph<V, W>) -> Result<SpanningForest<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Weight,
    {
        self.run_with_observer(graph, &mut NoopObserver)
    }

    /// Computes the minimum spanning forest, handing a snapshot to
    /// `observer` for the initial partition and after every merging round.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::WeightOverflow`] when the forest total
    /// does not fit the weight type. Observers have seen every round that
    /// completed before the failing one.
    #[instrument(
        name = "core.solve",
        err,
        skip_all,
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run_with_observer<V, W, O>(
        &self,
        graph: &Graph<V, W>,
        observer: &mut O,
    ) -> Result<SpanningForest<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Weight,
        O: RoundObserver<V, W> + ?Sized,
    {
        let executor = RoundExecutor::new(graph.sorted_view(), self.scan_mode(graph.edge_count()));
        let mut partition = Partition::new(graph.vertex_set());
        let mut forest = ForestAccumulator::new(graph.edges(), graph.vertex_count());
        let snapshots = observer.wants_snapshots();

        if snapshots {
            let description = format!(
                "initial partition: {} singleton components",
                partition.component_count()
            );
            notify(observer, 0, &partition, &forest, &description, None);
        }

        let mut rounds = 0_usize;
        while partition.component_count() > 1 {
            match executor.execute(rounds.saturating_add(1), &mut partition, &mut forest)? {
                RoundOutcome::Exhausted => {
                    warn!(
                        components = partition.component_count(),
                        "input graph is disconnected"
                    );
                    break;
                }
                RoundOutcome::Merged(report) => {
                    rounds = report.round();
                    record_round(&report);
                    if snapshots {
                        let description = describe(&report, &partition, graph.edges());
                        notify(
                            observer,
                            rounds,
                            &partition,
                            &forest,
                            &description,
                            Some(&report),
                        );
                    }
                }
            }
        }

        info!(
            rounds,
            edges = forest.edge_count(),
            components = partition.component_count(),
            "minimum spanning forest complete"
        );
        Ok(forest.finish(partition.component_count(), rounds))
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn scan_mode(&self, edge_count: usize) -> ScanMode {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => ScanMode::Sequential,
            ExecutionStrategy::Parallel => ScanMode::Parallel,
            ExecutionStrategy::Auto if edge_count >= self.parallel_threshold => ScanMode::Parallel,
            ExecutionStrategy::Auto => ScanMode::Sequential,
        }
    }

    // `BoruvkaBuilder::build` rejects `Parallel` in this configuration.
    #[cfg(not(feature = "parallel"))]
    pub(crate) fn scan_mode(&self, _edge_count: usize) -> ScanMode {
        ScanMode::Sequential
    }
}

/// Computes the minimum spanning forest of the given vertices and edges with
/// the default solver configuration.
///
/// # Errors
/// Returns [`crate::BoruvkaError::EmptyGraph`] when no vertices are supplied,
/// and [`crate::BoruvkaError::UnknownVertex`],
/// [`crate::BoruvkaError::SelfLoop`], or
/// [`crate::BoruvkaError::NonFiniteWeight`] for the first malformed edge.
/// Returns [`crate::BoruvkaError::WeightOverflow`] when the forest total
/// does not fit `W`.
///
/// # Examples
/// ```
/// use boruvka_core::minimum_spanning_forest;
///
/// let forest = minimum_spanning_forest(["A", "B", "C", "D"], [("A", "B", 1), ("C", "D", 2)])?;
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), boruvka_core::BoruvkaError>(())
/// ```
pub fn minimum_spanning_forest<V, W, E>(
    vertices: impl IntoIterator<Item = V>,
    edges: impl IntoIterator<Item = E>,
) -> Result<SpanningForest<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    E: Into<Edge<V, W>>,
{
    let graph = Graph::new(vertices, edges)?;
    Boruvka::default().run(&graph)
}

fn notify<V, W, O>(
    observer: &mut O,
    round: usize,
    partition: &Partition<'_, V>,
    forest: &ForestAccumulator<'_, V, W>,
    description: &str,
    report: Option<&RoundReport>,
) where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    O: RoundObserver<V, W> + ?Sized,
{
    let components = partition.components();
    observer.on_round(&RoundSnapshot {
        round,
        components: &components,
        forest: forest.edges(),
        total_weight: forest.total_weight(),
        description,
        report,
    });
}

fn describe<V: Debug, W: Weight>(
    report: &RoundReport,
    partition: &Partition<'_, V>,
    edges: &[Edge<V, W>],
) -> String {
    let merges: Vec<String> = report
        .merges()
        .iter()
        .filter_map(|merge| {
            let edge = edges.get(merge.edge())?;
            let into = partition.representative(merge.survivor())?;
            Some(format!(
                "{:?}-{:?} ({:?}) into {into:?}",
                edge.source(),
                edge.target(),
                edge.weight()
            ))
        })
        .collect();
    format!(
        "merged {}; {} discarded, {} components remain",
        merges.join(", "),
        report.discarded(),
        report.components_after()
    )
}

#[cfg(feature = "metrics")]
fn record_round(report: &RoundReport) {
    metrics::counter!("boruvka_rounds_total").increment(1);
    metrics::counter!("boruvka_merges_total").increment(report.merges().len() as u64);
    metrics::counter!("boruvka_discarded_candidates_total").increment(report.discarded() as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_round(_report: &RoundReport) {}

#[cfg(test)]
mod property;

//! Builder utilities for configuring the Borůvka solver.
//!
//! Exposes the execution strategy selection surface and the validation run
//! before constructing [`Boruvka`] instances.

use crate::{Result, error::BoruvkaError, solver::Boruvka};

/// Edge count at which [`ExecutionStrategy::Auto`] switches to the parallel
/// candidate scan.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Indicates how [`Boruvka`] scans edges for candidates.
///
/// `Auto` uses the parallel scan when the `parallel` feature is enabled and
/// the graph has at least the configured threshold of edges, and the
/// sequential scan otherwise. Both scans produce identical forests.
///
/// # Examples
/// ```
/// use boruvka_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionStrategy {
    /// Let the solver choose per graph.
    #[default]
    Auto,
    /// Always scan on the calling thread.
    Sequential,
    /// Always scan across the Rayon thread pool.
    Parallel,
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
///
/// let solver = BoruvkaBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("sequential execution is always available");
/// assert_eq!(solver.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Clone, Debug)]
pub struct BoruvkaBuilder {
    execution_strategy: ExecutionStrategy,
    parallel_threshold: usize,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, DEFAULT_PARALLEL_THRESHOLD, ExecutionStrategy};
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.parallel_threshold(), DEFAULT_PARALLEL_THRESHOLD);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy used when scanning for candidates.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Overrides the edge count at which `Auto` switches to the parallel scan.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::BoruvkaBuilder;
    ///
    /// let builder = BoruvkaBuilder::new().with_parallel_threshold(128);
    /// assert_eq!(builder.parallel_threshold(), 128);
    /// ```
    #[must_use]
    pub fn with_parallel_threshold(mut self, edges: usize) -> Self {
        self.parallel_threshold = edges;
        self
    }

    /// Returns the configured parallel threshold.
    #[must_use]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested in a build without the
    /// `parallel` feature.
    pub fn build(self) -> Result<Boruvka> {
        if self.execution_strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(BoruvkaError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            });
        }
        Ok(Boruvka::new(self.execution_strategy, self.parallel_threshold))
    }
}

//! Property 3: Determinism.
//!
//! Runs the solver on the same input graph several times and with every
//! execution strategy compiled into the build, asserting that the forest
//! and the per-round trace are identical across all runs.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ExecutionStrategy, RoundTrace, SpanningForest, TraceRecorder};

use super::helpers::{fixture_graph, solve_failure, solver};
use super::types::{DeterminismConfig, ForestFixture};

type Run = (SpanningForest<usize, i64>, Vec<RoundTrace<usize, i64>>);

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &ForestFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let baseline = traced_run(fixture, ExecutionStrategy::Sequential)?;

    for run in 1..config.repetitions {
        let repeat = traced_run(fixture, ExecutionStrategy::Sequential)?;
        compare(fixture, &format!("sequential run {run}"), &baseline, &repeat)?;
    }

    for strategy in strategies() {
        let other = traced_run(fixture, strategy)?;
        compare(fixture, &format!("{strategy:?}"), &baseline, &other)?;
    }

    Ok(())
}

fn strategies() -> Vec<ExecutionStrategy> {
    let mut strategies = vec![ExecutionStrategy::Auto];
    if cfg!(feature = "parallel") {
        strategies.push(ExecutionStrategy::Parallel);
    }
    strategies
}

fn traced_run(fixture: &ForestFixture, strategy: ExecutionStrategy) -> Result<Run, TestCaseError> {
    let graph = fixture_graph(fixture)?;
    let mut recorder = TraceRecorder::new();
    let forest = solver(strategy)?
        .run_with_observer(&graph, &mut recorder)
        .map_err(|error| solve_failure(fixture, &error))?;
    Ok((forest, recorder.into_rounds()))
}

fn compare(fixture: &ForestFixture, label: &str, baseline: &Run, other: &Run) -> TestCaseResult {
    if other.0 != baseline.0 {
        return Err(TestCaseError::fail(format!(
            "{label}: forest diverged from baseline ({})",
            fixture.context(),
        )));
    }
    if other.1 != baseline.1 {
        return Err(TestCaseError::fail(format!(
            "{label}: round trace diverged from baseline ({})",
            fixture.context(),
        )));
    }
    Ok(())
}

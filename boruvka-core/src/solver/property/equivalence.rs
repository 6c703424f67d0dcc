//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated input graph, verifies that the solver produces a forest
//! with the same total weight, edge count, component count, and edge
//! sequence as a trusted sequential Kruskal oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::solve;
use super::oracle::sequential_kruskal;
use super::types::ForestFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &ForestFixture) -> TestCaseResult {
    let forest = solve(fixture)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: solver={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.context(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: solver={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.context(),
        )));
    }

    let expected: Vec<(usize, usize, i64)> = oracle
        .accepted
        .iter()
        .map(|&position| fixture.edges[position])
        .collect();
    let actual: Vec<(usize, usize, i64)> = forest
        .edges()
        .iter()
        .map(|edge| (*edge.source(), *edge.target(), edge.weight()))
        .collect();
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge sequence mismatch: solver={actual:?}, oracle={expected:?} ({})",
            fixture.context(),
        )));
    }

    Ok(())
}

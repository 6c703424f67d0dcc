//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the solver, verifies:
//!
//! - **Acyclicity**: replaying the edges never joins two vertices that are
//!   already connected.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Component count**: equals the component count of the input graph.
//! - **Provenance**: every forest edge is one of the input edges.
//! - **Round bound**: at most `V - 1` productive rounds.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Edge;

use super::helpers::{find_root, solve};
use super::types::ForestFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &ForestFixture) -> TestCaseResult {
    let forest = solve(fixture)?;
    let edges = forest.edges();

    validate_acyclicity(fixture.vertex_count, edges)?;
    validate_edge_count(fixture.vertex_count, edges.len(), forest.component_count())?;
    validate_component_count(fixture, forest.component_count())?;
    validate_provenance(fixture, edges)?;

    if forest.rounds() >= fixture.vertex_count.max(1) {
        return Err(TestCaseError::fail(format!(
            "{} rounds exceeds the V - 1 bound ({})",
            forest.rounds(),
            fixture.context(),
        )));
    }

    Ok(())
}

/// Detects cycles in the forest using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[Edge<usize, i64>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, *edge.source());
        let rb = find_root(&mut parent, *edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges for `c` components.
fn validate_edge_count(vertex_count: usize, actual: usize, component_count: usize) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected n - c = {expected} (n={vertex_count}, c={component_count})",
        )));
    }
    Ok(())
}

/// Verifies that the forest keeps the input's connectivity.
fn validate_component_count(fixture: &ForestFixture, actual: usize) -> TestCaseResult {
    let expected = count_input_components(fixture);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "forest has {actual} components but the input has {expected} ({})",
            fixture.context(),
        )));
    }
    Ok(())
}

/// Verifies that every forest edge appears in the input.
fn validate_provenance(fixture: &ForestFixture, edges: &[Edge<usize, i64>]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        let triple = (*edge.source(), *edge.target(), edge.weight());
        if !fixture.edges.contains(&triple) {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {triple:?} is not an input edge ({})",
                fixture.context(),
            )));
        }
    }
    Ok(())
}

/// Counts connected components of the input graph.
fn count_input_components(fixture: &ForestFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;
    for &(source, target, _) in &fixture.edges {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}

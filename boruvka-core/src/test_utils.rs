//! Shared test utilities for `boruvka-core`.

use boruvka_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `BORUVKA_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph over string vertices, panicking on malformed input.
pub(crate) fn str_graph(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, i32)],
) -> Graph<&'static str, i32> {
    Graph::new(vertices.iter().copied(), edges.iter().copied()).expect("test graph must be valid")
}

/// Flattens forest edges into `(source, target, weight)` triples.
pub(crate) fn triples<V: Copy, W: Copy>(edges: &[Edge<V, W>]) -> Vec<(V, V, W)> {
    edges
        .iter()
        .map(|edge| (*edge.source(), *edge.target(), edge.weight()))
        .collect()
}

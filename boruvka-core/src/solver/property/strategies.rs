//! Strategy builders for solver property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Every generator emits edges between
//! distinct vertices in `0..vertex_count`, so each fixture is valid input.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{ForestFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 32;

/// Generates fixtures covering every weight distribution.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> ForestFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::NegativeWithDuplicates => generate_negative_duplicates(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Parameters that vary between the probabilistic distributions.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Generates a graph by probabilistically adding edges between all unique
/// vertex pairs, using a caller-supplied weight generator. Endpoints are
/// randomly oriented since edges are undirected.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> ForestFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for (i, j) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            edges.push(oriented(i, j, weight, rng));
        }
    }

    if edges.is_empty() {
        edges.push((0, 1, weight_generator(rng)));
    }

    ForestFixture {
        vertex_count,
        edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

fn generate_unique_weights(rng: &mut SmallRng) -> ForestFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        |r| r.gen_range(0..1_000_000),
    )
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight, so
/// the forest depends entirely on the input-order tie-break.
fn generate_identical_weights(rng: &mut SmallRng) -> ForestFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning tree (guaranteeing connectivity) and then adds a
/// small number of extra edges.
fn generate_sparse(rng: &mut SmallRng) -> ForestFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(0..1_000);
        edges.push((pair[0], pair[1], weight));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            edges.push((i, j, rng.gen_range(0..1_000)));
        }
    }

    ForestFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> ForestFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        |r| r.gen_range(0..100),
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates 2-5 components with random internal structure and no
/// cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> ForestFixture {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(3..=12))
        .collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &sizes {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for (i, j) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(0..1_000);
                edges.push(oriented(i, j, weight, rng));
            }
        }
        if edges.len() == start_len {
            edges.push((offset, offset + 1, rng.gen_range(0..1_000)));
        }
        offset += size;
    }

    ForestFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

// ── Negative weights with duplicates ────────────────────────────────────

/// Generates a graph whose weights straddle zero and where some vertex
/// pairs carry several parallel edges.
fn generate_negative_duplicates(rng: &mut SmallRng) -> ForestFixture {
    let mut fixture = generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.5),
            distribution: WeightDistribution::NegativeWithDuplicates,
        },
        |r| r.gen_range(-50..=50),
    );
    let duplicates = rng.gen_range(1..=fixture.edges.len());
    for _ in 0..duplicates {
        let (source, target, _) = fixture.edges[rng.gen_range(0..fixture.edges.len())];
        let weight = rng.gen_range(-50..=50);
        fixture.edges.push(oriented(source, target, weight, rng));
    }
    fixture
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns all unique pairs `(offset + i, offset + j)` where `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Returns the edge with its endpoints in random order.
fn oriented(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> (usize, usize, i64) {
    if rng.gen_bool(0.5) {
        (a, b, weight)
    } else {
        (b, a, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Implemented by hand for biased weighting: tie-heavy inputs are the most
// important stress case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
            2 => Just(Self::NegativeWithDuplicates),
        ]
    }
}

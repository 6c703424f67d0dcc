//! Sequential Kruskal oracle for forest property verification.
//!
//! A simple, trusted implementation of Kruskal's algorithm over raw
//! `(source, target, weight)` triples. Edges are ordered by weight with input
//! position breaking ties, the same order the solver scans in, so the oracle
//! and the solver agree on the exact edge set and not only its weight.

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Input positions of the accepted edges in acceptance order.
    pub accepted: Vec<usize>,
    /// Total weight of the forest.
    pub total_weight: i64,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[(usize, usize, i64)]) -> OracleForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&position| (edges[position].2, position));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::new();
    let mut total_weight = 0_i64;
    let mut component_count = vertex_count;

    for position in order {
        let (source, target, weight) = edges[position];
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            parent[rb] = ra;
            accepted.push(position);
            total_weight += weight;
            component_count -= 1;
        }
    }

    OracleForest {
        accepted,
        total_weight,
        component_count,
    }
}

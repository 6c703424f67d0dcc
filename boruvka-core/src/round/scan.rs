//! Candidate discovery for a single round.
//!
//! Both scans read component membership from the round-start snapshot and
//! return candidates in discovery order. Because the edge view is sorted by
//! `(weight, input position)`, the sorted position of a pair's candidate is
//! also the position at which the pair was first discovered, so the parallel
//! scan reproduces the sequential result exactly.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{ComponentId, Weight, graph::IndexedEdge};

/// The cheapest known crossing edge for one component pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) pair: (ComponentId, ComponentId),
    /// Position of the edge in the sorted view.
    pub(crate) position: usize,
}

type PairKey = (ComponentId, ComponentId);

fn crossing_pair<W>(edge: &IndexedEdge<W>, membership: &[ComponentId]) -> Option<PairKey> {
    let source = membership[edge.source];
    let target = membership[edge.target];
    (source != target).then(|| source.pair(target))
}

/// Scans the sorted edges on the calling thread.
pub(crate) fn scan_sequential<W: Weight>(
    edges: &[IndexedEdge<W>],
    membership: &[ComponentId],
) -> Vec<Candidate> {
    let mut slots: HashMap<PairKey, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for (position, edge) in edges.iter().enumerate() {
        let Some(pair) = crossing_pair(edge, membership) else {
            continue;
        };

        match slots.get(&pair) {
            None => {
                slots.insert(pair, candidates.len());
                candidates.push(Candidate { pair, position });
            }
            Some(&slot) => {
                let current = &mut candidates[slot];
                if edge.weight.cmp_weight(&edges[current.position].weight).is_lt() {
                    current.position = position;
                }
            }
        }
    }

    candidates
}

/// Scans the sorted edges across the Rayon pool.
///
/// Each worker keeps the lowest sorted position per pair; the reduction keeps
/// the lowest position overall and the result is ordered by position.
#[cfg(feature = "parallel")]
pub(crate) fn scan_parallel<W: Weight>(
    edges: &[IndexedEdge<W>],
    membership: &[ComponentId],
) -> Vec<Candidate> {
    let merged = edges
        .par_iter()
        .enumerate()
        .fold(HashMap::new, |mut acc: HashMap<PairKey, usize>, (position, edge)| {
            if let Some(pair) = crossing_pair(edge, membership) {
                keep_lowest(&mut acc, pair, position);
            }
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (pair, position) in right {
                keep_lowest(&mut left, pair, position);
            }
            left
        });

    let mut candidates: Vec<Candidate> = merged
        .into_iter()
        .map(|(pair, position)| Candidate { pair, position })
        .collect();
    candidates.sort_unstable_by_key(|candidate| candidate.position);
    candidates
}

#[cfg(feature = "parallel")]
fn keep_lowest(acc: &mut HashMap<PairKey, usize>, pair: PairKey, position: usize) {
    acc.entry(pair)
        .and_modify(|current| {
            if position < *current {
                *current = position;
            }
        })
        .or_insert(position);
}

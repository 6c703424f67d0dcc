use boruvka_core::Edge;

pub type Triple = (&'static str, &'static str, i32);

pub const VERTICES: [&str; 4] = ["A", "B", "C", "D"];

#[must_use]
pub fn reference_edges() -> Vec<Triple> {
    vec![
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 3),
        ("C", "D", 5),
    ]
}

#[must_use]
pub fn triples(edges: &[Edge<&'static str, i32>]) -> Vec<Triple> {
    edges
        .iter()
        .map(|edge| (*edge.source(), *edge.target(), edge.weight()))
        .collect()
}

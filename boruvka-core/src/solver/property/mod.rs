//! Property-based tests for the Borůvka solver.
//!
//! Verifies the solver against a sequential Kruskal oracle, validates
//! structural invariants of the resulting forest (acyclicity, edge count,
//! component count), and checks that repeated runs and every execution
//! strategy produce identical forests across graph topologies with varied
//! weight distributions.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;

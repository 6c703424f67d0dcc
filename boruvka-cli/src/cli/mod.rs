//! Command-line interface for the Borůvka demo driver.
//!
//! The `demo` command runs the solver over a built-in four-vertex graph and
//! renders the resulting forest, optionally with its per-round trace, as
//! text or JSON. No graph files are loaded.

mod commands;

pub use commands::{
    Cli, CliError, Command, DemoCommand, DemoReport, OutputFormat, REFERENCE_EDGES,
    REFERENCE_VERTICES, StrategyArg, render_report, run_cli,
};

//! Command implementations and argument parsing for the boruvka CLI.

use std::io::{self, Write};

use boruvka_core::{
    BoruvkaBuilder, BoruvkaError, Edge, ExecutionStrategy, Graph, RoundTrace, SpanningForest,
    TraceRecorder,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

type Vertex = &'static str;

/// Vertices of the built-in demo graph.
pub const REFERENCE_VERTICES: [Vertex; 4] = ["A", "B", "C", "D"];

/// Edges of the built-in demo graph as `(source, target, weight)`.
pub const REFERENCE_EDGES: [(Vertex, Vertex, i32); 5] = [
    ("A", "B", 4),
    ("A", "C", 2),
    ("B", "C", 1),
    ("B", "D", 3),
    ("C", "D", 5),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boruvka",
    about = "Compute minimum spanning forests with Borůvka's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the solver over the built-in demo graph.
    Demo(DemoCommand),
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Include the per-round trace in the output.
    #[arg(long)]
    pub trace: bool,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Strategy used to scan edges for candidates.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// Output formats supported by the demo command.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Command-line spelling of [`ExecutionStrategy`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    /// Let the solver pick per graph.
    Auto,
    /// Scan on the calling thread.
    Sequential,
    /// Scan across the Rayon thread pool.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The solver rejected its configuration or input.
    #[error(transparent)]
    Core(#[from] BoruvkaError),
}

/// Outcome of the demo command, ready for rendering.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Strategy the solver was configured with.
    pub strategy: ExecutionStrategy,
    /// Input edges in their original order.
    pub input: Vec<Edge<Vertex, i32>>,
    /// The computed spanning forest.
    pub forest: SpanningForest<Vertex, i32>,
    /// Per-round trace, present when `--trace` was passed.
    pub trace: Option<Vec<RoundTrace<Vertex, i32>>>,
    /// Output format requested on the command line.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the solver rejects its configuration or the
/// forest total overflows the weight type.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::{Cli, Command, DemoCommand, OutputFormat, StrategyArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Demo(DemoCommand {
///         trace: false,
///         format: OutputFormat::Text,
///         strategy: StrategyArg::Sequential,
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.forest.total_weight(), 6);
/// # Ok::<(), boruvka_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<DemoReport, CliError> {
    match cli.command {
        Command::Demo(demo) => {
            Span::current().record("command", field::display("demo"));
            run_demo(&demo)
        }
    }
}

#[instrument(
    name = "cli.demo",
    err,
    skip(command),
    fields(strategy = ?command.strategy, trace = command.trace),
)]
pub(super) fn run_demo(command: &DemoCommand) -> Result<DemoReport, CliError> {
    let strategy = ExecutionStrategy::from(command.strategy);
    let solver = BoruvkaBuilder::new()
        .with_execution_strategy(strategy)
        .build()?;
    let graph = Graph::new(REFERENCE_VERTICES, REFERENCE_EDGES)?;

    let (forest, trace) = if command.trace {
        let mut recorder = TraceRecorder::new();
        let forest = solver.run_with_observer(&graph, &mut recorder)?;
        (forest, Some(recorder.into_rounds()))
    } else {
        (solver.run(&graph)?, None)
    };

    info!(
        edges = forest.edge_count(),
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "demo completed"
    );
    Ok(DemoReport {
        strategy,
        input: graph.edges().to_vec(),
        forest,
        trace,
        format: command.format,
    })
}

/// Renders `report` to `writer` in the format it was requested in.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use boruvka_cli::cli::{Cli, Command, DemoCommand, OutputFormat, StrategyArg, render_report, run_cli};
///
/// let report = run_cli(Cli {
///     command: Command::Demo(DemoCommand {
///         trace: false,
///         format: OutputFormat::Text,
///         strategy: StrategyArg::Auto,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("total weight: 6"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &DemoReport, writer: impl Write) -> io::Result<()> {
    match report.format {
        OutputFormat::Text => render_text(report, writer),
        OutputFormat::Json => render_json(report, writer),
    }
}

fn render_text(report: &DemoReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} vertices, {} edges",
        REFERENCE_VERTICES.len(),
        report.input.len()
    )?;
    writeln!(writer, "strategy: {:?}", report.strategy)?;
    for round in report.trace.iter().flatten() {
        writeln!(writer, "round {}: {}", round.round(), round.description())?;
        let components: Vec<String> = round
            .components()
            .iter()
            .map(|members| format!("{{{}}}", members.join(", ")))
            .collect();
        writeln!(writer, "  components: {}", components.join(" "))?;
    }
    writeln!(writer, "forest:")?;
    for edge in report.forest.edges() {
        writeln!(
            writer,
            "  {} - {} ({})",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", report.forest.total_weight())?;
    writeln!(writer, "components: {}", report.forest.component_count())?;
    writeln!(writer, "rounds: {}", report.forest.rounds())?;
    Ok(())
}

fn render_json(report: &DemoReport, mut writer: impl Write) -> io::Result<()> {
    let document = json!({
        "vertices": REFERENCE_VERTICES,
        "edges": report.input,
        "strategy": format!("{:?}", report.strategy),
        "forest": report.forest,
        "trace": report.trace,
    });
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)
}

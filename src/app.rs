use crate::cli::{Cli, OutputFormat};
use crate::errors::FindDependenciesError;
use crate::graph::Graph;
use crate::query::{ModuleQuery, Query, QueryMode, QueryReport};
use crate::utils::config::{self, Config};
use crate::utils::graph_location;
use crate::utils::tool_probe::{self, PathProbe};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// A completed invocation: the query result plus how to print it.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub report: QueryReport,
    pub format: OutputFormat,
}

impl Outcome {
    /// Render the result lines in the selected format, newline terminated.
    /// An empty text result renders as an empty string.
    ///
    /// # Errors
    /// Returns `Decode` if JSON encoding of the lines fails.
    pub fn render(&self) -> Result<String, FindDependenciesError> {
        let lines = self.report.lines();
        match self.format {
            OutputFormat::Text => Ok(lines.iter().map(|l| format!("{l}\n")).collect()),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&lines)?)),
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `debug`.
pub fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli, search_dir: &Path) -> Config {
    let loaded = match cli.config.as_deref() {
        Some(p) => {
            let cfg = config::load_config_at(Path::new(p));
            if cfg.is_none() {
                warn!("Could not load config {p}; using defaults");
            }
            cfg
        }
        None => config::load_config_near(search_dir),
    };
    loaded.unwrap_or_default()
}

fn output_format(cli: &Cli, cfg: &Config) -> OutputFormat {
    if let Some(f) = cli.format {
        return f;
    }
    match cfg.default_format() {
        Some("json") => OutputFormat::Json,
        Some("text") | None => OutputFormat::Text,
        Some(other) => {
            warn!("Unknown default_format {other:?} in config; using text");
            OutputFormat::Text
        }
    }
}

/// Execute the query described by `cli` without printing anything.
///
/// # Errors
/// `Usage` when no query flag is set (nothing is read in that case),
/// `ToolNotFound` when the graph tool is missing and the check is not skipped,
/// `DocumentNotFound`/`Io`/`Decode` when the graph document cannot be loaded.
pub fn run(cli: &Cli) -> Result<Outcome, FindDependenciesError> {
    let mode = QueryMode::from_flags(cli.show_dependencies, cli.show_dependents)?;
    debug!(
        "Checking for {} Dependencies: {} Dependents: {}",
        cli.module_name,
        if mode.dependencies() { "Yes" } else { "No" },
        if mode.dependents() { "Yes" } else { "No" }
    );

    match cli.path.as_deref() {
        Some(p) => debug!("Path parameter: {p}"),
        None => debug!("Path parameter: none, using the current directory"),
    }
    let search_dir = graph_location::search_dir(cli.path.as_deref());
    let cfg = load_config(cli, &search_dir);

    if cli.skip_tool_check || cfg.skip_tool_check() {
        debug!("Skipping {} presence check", cfg.tool_name());
    } else {
        let probe = PathProbe::new(cfg.tool_name(), &cfg.tool_path());
        let found = tool_probe::ensure_installed(&probe)?;
        debug!("{} is installed at {}", cfg.tool_name(), found.display());
    }

    let graph_path = graph_location::document_path(&search_dir, cfg.graph_file_name());
    debug!("Graph path: {}", graph_path.display());
    let graph = Graph::load_json(&graph_path)?;
    debug!(
        "Loaded {} projects, {} targets, {} edges",
        graph.projects.len(),
        graph.target_count(),
        graph.edge_count()
    );
    for (project, target, _) in graph.unrecognized_edges() {
        debug!("Unrecognized dependency edge in {project} target {}", target.name);
    }

    let report = ModuleQuery::new(&cli.module_name, mode).run(&graph);
    if mode.dependencies() && report.matched_targets > 0 && report.dependencies.is_empty() {
        debug!("No dependencies");
    }
    debug!(
        "Found {} dependencies and {} dependents",
        report.dependencies.len(),
        report.dependents.len()
    );

    Ok(Outcome { report, format: output_format(cli, &cfg) })
}

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success, 2 = usage error, 1 = any other failure).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    init_tracing(cli.debug);
    let outcome = match run(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            return e.exit_code();
        }
    };
    match outcome.render() {
        Ok(s) => {
            print!("{s}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

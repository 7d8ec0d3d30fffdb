use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "find-dependencies",
    version,
    about = "Show the direct dependencies and dependents of a module",
    long_about = "Read a previously generated project dependency graph (graph.json) and list what the named module depends on, what depends on it, or both. At least one of --show-dependencies and --show-dependents is required."
)]
pub struct Cli {
    /// The module you are interested in
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub module_name: String,

    /// Show the dependencies of the named module
    #[arg(long, default_value_t = false)]
    pub show_dependencies: bool,

    /// Show the dependents of the named module
    #[arg(long, default_value_t = false)]
    pub show_dependents: bool,

    /// Directory containing the graph document (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not check that the graph tool is installed
    #[arg(long, env = "FIND_DEPENDENCIES_SKIP_TOOL_CHECK", default_value_t = false)]
    pub skip_tool_check: bool,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

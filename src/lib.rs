//! find-dependencies — direct dependency queries over a project graph
//!
//! Read a previously generated project dependency graph document and answer two
//! one-hop questions about a named module: what it depends on, and what depends on it.
//!
//! # Features
//! - Structured decoding of dependency edges (tagged objects or `target(name: "...")` text)
//! - Single-pass dependency and dependent queries with deterministic output order
//! - Optional TOML configuration and text or JSON output
//!
//! # Quickstart (Library)
//! ```no_run
//! use find_dependencies::graph::Graph;
//! use find_dependencies::query::{find_dependencies, find_dependents};
//!
//! let graph = Graph::load_json(std::path::Path::new("graph.json")).expect("load graph");
//! for name in find_dependencies(&graph, "Feature") {
//!     println!("{name}");
//! }
//! println!("dependents: {:?}", find_dependents(&graph, "Core"));
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! find-dependencies Feature --show-dependencies --path ./App
//! find-dependencies Core --show-dependents --format json
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod query;
pub mod utils;

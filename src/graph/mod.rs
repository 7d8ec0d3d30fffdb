//! Graph model for the crate.
//!
//! This module defines the decoded form of a project dependency graph
//! document (`Graph`, `Project`, `Target`) and the functions that load it.
//! Each target's dependency edges are normalized by [`edge::DependencyEdge`]
//! while the document is decoded.
//!
//! Decoding is all-or-nothing at the document level: a missing or mistyped
//! `projects`, `targets`, `name`, or `dependencies` field, an entity written
//! as an array instead of an object, or a repeated project id fails the whole
//! decode. Individual edges never fail; see [`edge`].
//!
//! Once loaded, pass the graph to the queries in `crate::query`.
use crate::errors::FindDependenciesError;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

mod decode;
pub mod edge;

pub use edge::{DependencyEdge, EdgeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub dependencies: Vec<DependencyEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    // Keyed by project identifier (usually the project directory); ids are unique.
    pub projects: BTreeMap<String, Project>,
}

impl Graph {
    /// Decode a graph document from raw bytes.
    ///
    /// # Errors
    /// Returns `FindDependenciesError::Decode` if the bytes are not JSON or do not
    /// match the expected document shape. The error message names the offending
    /// field and position.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FindDependenciesError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Load a graph document from `path`.
    ///
    /// # Errors
    /// Returns `DocumentNotFound` when no file exists at `path`, `Io` when it
    /// cannot be read, and `Decode` when its contents do not match the schema.
    pub fn load_json(path: &Path) -> Result<Self, FindDependenciesError> {
        if !path.is_file() {
            return Err(FindDependenciesError::DocumentNotFound { path: path.to_path_buf() });
        }
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Iterate `(project_id, target)` pairs in deterministic order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &Target)> {
        self.projects
            .iter()
            .flat_map(|(id, project)| project.targets.iter().map(move |t| (id.as_str(), t)))
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.projects.values().map(|p| p.targets.len()).sum()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.targets().map(|(_, t)| t.dependencies.len()).sum()
    }

    /// Every edge that decoded as [`EdgeKind::Unrecognized`], with its owner.
    pub fn unrecognized_edges(&self) -> impl Iterator<Item = (&str, &Target, &DependencyEdge)> {
        self.targets().flat_map(|(project, target)| {
            target
                .dependencies
                .iter()
                .filter(|e| !e.is_recognized())
                .map(move |e| (project, target, e))
        })
    }
}

impl FromStr for Graph {
    type Err = FindDependenciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

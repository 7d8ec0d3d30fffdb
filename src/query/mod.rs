use crate::errors::FindDependenciesError;
use crate::graph::Graph;

/// Query trait implemented by all query types.
///
/// Given an immutable reference to a `Graph`, returns a result of type `R`.
pub trait Query<R> {
    fn run(&self, graph: &Graph) -> R;
}

/// Which direction(s) a module query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Dependencies,
    Dependents,
    Both,
}

impl QueryMode {
    /// Build a mode from the two command-line switches.
    ///
    /// # Errors
    /// Returns `FindDependenciesError::Usage` when neither switch is set.
    pub fn from_flags(
        show_dependencies: bool,
        show_dependents: bool,
    ) -> Result<Self, FindDependenciesError> {
        match (show_dependencies, show_dependents) {
            (true, true) => Ok(Self::Both),
            (true, false) => Ok(Self::Dependencies),
            (false, true) => Ok(Self::Dependents),
            (false, false) => Err(FindDependenciesError::Usage),
        }
    }

    #[must_use]
    pub fn dependencies(self) -> bool {
        matches!(self, Self::Dependencies | Self::Both)
    }

    #[must_use]
    pub fn dependents(self) -> bool {
        matches!(self, Self::Dependents | Self::Both)
    }
}

/// Result of a [`ModuleQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryReport {
    /// Referenced names of the module's edges, in edge order.
    pub dependencies: Vec<String>,
    /// Names of targets with an edge to the module, once per matching edge.
    pub dependents: Vec<String>,
    /// Targets named like the module that were expanded for dependencies.
    pub matched_targets: usize,
}

impl QueryReport {
    /// Output lines: dependencies first, then dependents.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.dependencies.iter().chain(&self.dependents).cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dependents.is_empty()
    }
}

/// Direct dependencies and/or direct dependents of one module, in a single pass.
///
/// A target named like the module is expanded for dependencies when that
/// mode is requested and is then not considered as a dependent. In
/// dependents-only mode it is scanned like any other target, so a
/// self-referencing edge reports the module as its own dependent.
pub struct ModuleQuery {
    pub module: String,
    pub mode: QueryMode,
}

impl ModuleQuery {
    #[must_use]
    pub fn new(module: &str, mode: QueryMode) -> Self {
        Self { module: module.to_string(), mode }
    }
}

impl Query<QueryReport> for ModuleQuery {
    fn run(&self, graph: &Graph) -> QueryReport {
        let mut report = QueryReport::default();
        for (_, target) in graph.targets() {
            if self.mode.dependencies() && target.name == self.module {
                report.matched_targets += 1;
                report.dependencies.extend(target.dependencies.iter().map(|e| e.name.clone()));
            } else if self.mode.dependents() {
                for edge in &target.dependencies {
                    if edge.name == self.module {
                        report.dependents.push(target.name.clone());
                    }
                }
            }
        }
        report
    }
}

/// Names referenced by the edges of every target called `module`.
pub struct DependenciesQuery {
    pub module: String,
}

impl DependenciesQuery {
    #[must_use]
    pub fn new(module: &str) -> Self {
        Self { module: module.to_string() }
    }
}

impl Query<Vec<String>> for DependenciesQuery {
    fn run(&self, graph: &Graph) -> Vec<String> {
        ModuleQuery::new(&self.module, QueryMode::Dependencies).run(graph).dependencies
    }
}

/// Targets with at least one edge referencing `module`.
pub struct DependentsQuery {
    pub module: String,
}

impl DependentsQuery {
    #[must_use]
    pub fn new(module: &str) -> Self {
        Self { module: module.to_string() }
    }
}

impl Query<Vec<String>> for DependentsQuery {
    fn run(&self, graph: &Graph) -> Vec<String> {
        ModuleQuery::new(&self.module, QueryMode::Dependents).run(graph).dependents
    }
}

#[must_use]
pub fn find_dependencies(graph: &Graph, module: &str) -> Vec<String> {
    DependenciesQuery::new(module).run(graph)
}

#[must_use]
pub fn find_dependents(graph: &Graph, module: &str) -> Vec<String> {
    DependentsQuery::new(module).run(graph)
}

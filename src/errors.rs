use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FindDependenciesError {
    #[error("Either or both of these flags must be specified: --show-dependencies --show-dependents")]
    Usage,

    #[error("No graph exists at path: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    #[error("Failed to parse the graph: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{tool} is not installed (expected at {})", path.display())]
    ToolNotFound { tool: String, path: PathBuf },
}

impl FindDependenciesError {
    /// Process exit code for this error: 2 for usage mistakes, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage => 2,
            _ => 1,
        }
    }
}

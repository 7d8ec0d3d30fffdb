pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const CONFIG_FILE_NAME: &str = "find-dependencies.toml";
    pub const DEFAULT_GRAPH_FILE: &str = "graph.json";
    pub const DEFAULT_TOOL_NAME: &str = "tuist";
    pub const DEFAULT_TOOL_PATH: &str = "/usr/local/bin/tuist";

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct GraphConfig {
        pub file_name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct ToolConfig {
        pub name: Option<String>,
        pub path: Option<PathBuf>,
        pub skip_check: Option<bool>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct QueryConfig {
        pub default_format: Option<String>, // "text" | "json"
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub graph: Option<GraphConfig>,
        pub tool: Option<ToolConfig>,
        pub query: Option<QueryConfig>,
    }

    impl Config {
        #[must_use]
        pub fn graph_file_name(&self) -> &str {
            self.graph.as_ref().and_then(|g| g.file_name.as_deref()).unwrap_or(DEFAULT_GRAPH_FILE)
        }

        #[must_use]
        pub fn tool_name(&self) -> &str {
            self.tool.as_ref().and_then(|t| t.name.as_deref()).unwrap_or(DEFAULT_TOOL_NAME)
        }

        #[must_use]
        pub fn tool_path(&self) -> PathBuf {
            self.tool
                .as_ref()
                .and_then(|t| t.path.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL_PATH))
        }

        #[must_use]
        pub fn skip_tool_check(&self) -> bool {
            self.tool.as_ref().and_then(|t| t.skip_check).unwrap_or(false)
        }

        #[must_use]
        pub fn default_format(&self) -> Option<&str> {
            self.query.as_ref().and_then(|q| q.default_format.as_deref())
        }
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    /// Look for `find-dependencies.toml` inside `dir`.
    #[must_use]
    pub fn load_config_near(dir: &Path) -> Option<Config> {
        let p = dir.join(CONFIG_FILE_NAME);
        if p.exists() {
            load_config_at(&p)
        } else {
            None
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn defaults_apply_when_sections_are_missing() {
            let cfg = Config::default();
            assert_eq!(cfg.graph_file_name(), "graph.json");
            assert_eq!(cfg.tool_name(), "tuist");
            assert_eq!(cfg.tool_path(), PathBuf::from("/usr/local/bin/tuist"));
            assert!(!cfg.skip_tool_check());
            assert_eq!(cfg.default_format(), None);
        }

        #[test]
        fn malformed_file_yields_none() {
            let dir = tempfile::tempdir().unwrap();
            let p = dir.path().join(CONFIG_FILE_NAME);
            fs::write(&p, "[graph\nfile_name = ").unwrap();
            assert!(load_config_at(&p).is_none());
            assert!(load_config_near(dir.path()).is_none());
        }
    }
}

pub mod graph_location {
    use std::path::{Path, PathBuf};

    /// Directory the graph document is looked up in: `path` when given, else the
    /// current directory. Trailing separators are dropped.
    #[must_use]
    pub fn search_dir(path: Option<&str>) -> PathBuf {
        match path {
            Some(p) if !p.trim().is_empty() => {
                let trimmed = p.trim_end_matches(['/', '\\']);
                if trimmed.is_empty() {
                    // the filesystem root itself
                    PathBuf::from(&p[..1])
                } else {
                    PathBuf::from(trimmed)
                }
            }
            _ => PathBuf::from("."),
        }
    }

    /// Full path of the graph document named `file_name` inside `dir`.
    #[must_use]
    pub fn document_path(dir: &Path, file_name: &str) -> PathBuf {
        dir.join(file_name)
    }

}

pub mod tool_probe {
    use crate::errors::FindDependenciesError;
    use std::env;
    use std::path::{Path, PathBuf};

    /// Something that can tell whether the graph-producing tool is installed.
    pub trait ToolProbe {
        /// Location of the tool, if installed.
        fn locate(&self) -> Option<PathBuf>;

        /// Name shown in diagnostics.
        fn tool_name(&self) -> &str;

        /// Where the tool is expected to live.
        fn expected_path(&self) -> &Path;
    }

    /// Checks a fixed install location first, then every `PATH` entry.
    #[derive(Debug, Clone)]
    pub struct PathProbe {
        pub name: String,
        pub expected: PathBuf,
        pub search_path: Option<std::ffi::OsString>,
    }

    impl PathProbe {
        #[must_use]
        pub fn new(name: &str, expected: &Path) -> Self {
            Self {
                name: name.to_string(),
                expected: expected.to_path_buf(),
                search_path: env::var_os("PATH"),
            }
        }

        /// Replace the `PATH` value used for the lookup.
        #[must_use]
        pub fn with_search_path(mut self, search_path: Option<std::ffi::OsString>) -> Self {
            self.search_path = search_path;
            self
        }
    }

    impl ToolProbe for PathProbe {
        fn locate(&self) -> Option<PathBuf> {
            if self.expected.is_file() {
                return Some(self.expected.clone());
            }
            let dirs = self.search_path.as_ref()?;
            env::split_paths(dirs).map(|d| d.join(&self.name)).find(|p| p.is_file())
        }

        fn tool_name(&self) -> &str {
            &self.name
        }

        fn expected_path(&self) -> &Path {
            &self.expected
        }
    }

    /// Run `probe`, mapping absence to `ToolNotFound`.
    ///
    /// # Errors
    /// Returns `FindDependenciesError::ToolNotFound` when the tool cannot be located.
    pub fn ensure_installed(probe: &dyn ToolProbe) -> Result<PathBuf, FindDependenciesError> {
        probe.locate().ok_or_else(|| FindDependenciesError::ToolNotFound {
            tool: probe.tool_name().to_string(),
            path: probe.expected_path().to_path_buf(),
        })
    }

}

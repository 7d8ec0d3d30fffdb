use find_dependencies::utils::config::{self};
use std::fs;
use std::path::{Path, PathBuf};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, content).unwrap();
}

#[test]
fn parses_full_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("custom.toml");
    let data = r#"
[graph]
file_name = "workspace-graph.json"

[tool]
name = "tuist"
path = "/opt/homebrew/bin/tuist"
skip_check = true

[query]
default_format = "json"
"#;
    write(&cfg_path, data);

    let cfg = config::load_config_at(&cfg_path).expect("config parsed");
    assert_eq!(cfg.graph_file_name(), "workspace-graph.json");
    assert_eq!(cfg.tool_name(), "tuist");
    assert_eq!(cfg.tool_path(), PathBuf::from("/opt/homebrew/bin/tuist"));
    assert!(cfg.skip_tool_check());
    assert_eq!(cfg.default_format(), Some("json"));
}

#[test]
fn partial_config_keeps_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("partial.toml");
    write(&cfg_path, "[query]\ndefault_format = 'text'\n");

    let cfg = config::load_config_at(&cfg_path).expect("config parsed");
    assert_eq!(cfg.graph_file_name(), config::DEFAULT_GRAPH_FILE);
    assert_eq!(cfg.tool_path(), PathBuf::from(config::DEFAULT_TOOL_PATH));
    assert_eq!(cfg.default_format(), Some("text"));
}

#[test]
fn load_config_near_looks_for_default_name() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(config::load_config_near(tmp.path()).is_none());

    write(&tmp.path().join("find-dependencies.toml"), "[graph]\nfile_name = 'g.json'\n");
    let cfg = config::load_config_near(tmp.path()).expect("found default config");
    assert_eq!(cfg.graph_file_name(), "g.json");
}

//! Decoding of raw dependency edges.
//!
//! Graph documents describe a target's dependencies in a few loosely
//! structured shapes. Each raw edge is turned into a [`DependencyEdge`]
//! carrying a closed [`EdgeKind`] and the referenced name. Decoding never
//! fails: an edge that cannot be understood becomes [`EdgeKind::Unrecognized`]
//! with an empty name.
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// A target defined in the same project.
    TargetInSameProject,
    /// A target defined in another project of the graph.
    TargetInOtherProject,
    /// A package product or other external dependency.
    External,
    /// A precompiled framework or static library referenced by path.
    FrameworkOrLibrary,
    /// A system SDK framework or library.
    Sdk,
    /// A prebuilt XCFramework bundle referenced by path.
    XCFramework,
    /// An edge whose shape or tag is not understood; its name is empty.
    Unrecognized,
}

/// A normalized dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct DependencyEdge {
    pub kind: EdgeKind,
    pub name: String,
}

impl DependencyEdge {
    #[must_use]
    pub fn new(kind: EdgeKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    #[must_use]
    pub fn unrecognized() -> Self {
        Self::new(EdgeKind::Unrecognized, String::new())
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.kind != EdgeKind::Unrecognized
    }

    /// Decode a raw edge value from a graph document.
    #[must_use]
    pub fn decode(raw: &Value) -> Self {
        match raw {
            Value::String(text) => decode_textual(text),
            Value::Object(fields) => decode_object(fields),
            _ => Self::unrecognized(),
        }
    }
}

impl From<Value> for DependencyEdge {
    fn from(raw: Value) -> Self {
        Self::decode(&raw)
    }
}

// `{"type": "target", "name": "Core"}` or `{"target": {"name": "Core"}}`
fn decode_object(fields: &Map<String, Value>) -> DependencyEdge {
    if let Some(Value::String(tag)) = fields.get("type") {
        return from_tag(tag, |key| fields.get(key).and_then(Value::as_str).map(str::to_string));
    }
    if fields.len() != 1 {
        return DependencyEdge::unrecognized();
    }
    let Some((tag, payload)) = fields.iter().next() else {
        return DependencyEdge::unrecognized();
    };
    match payload {
        Value::Object(inner) => {
            from_tag(tag, |key| inner.get(key).and_then(Value::as_str).map(str::to_string))
        }
        // payload-less cases such as `{"xctest": {}}` encoded as null or an empty array
        Value::Null | Value::Array(_) => from_tag(tag, |_| None),
        _ => DependencyEdge::unrecognized(),
    }
}

fn textual_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?P<tag>[A-Za-z_][A-Za-z0-9_]*)\s*(?:\((?P<args>.*)\))?\s*$")
            .expect("edge pattern compiles")
    })
}

fn argument_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?P<label>[A-Za-z_][A-Za-z0-9_]*)\s*:\s*"(?P<value>(?:[^"\\]|\\.)*)""#)
            .expect("argument pattern compiles")
    })
}

// `target(name: "Core")`, `project(target: "Api", path: "../Api")`, `xctest`
fn decode_textual(text: &str) -> DependencyEdge {
    let Some(caps) = textual_pattern().captures(text) else {
        return DependencyEdge::unrecognized();
    };
    let tag = caps.name("tag").map_or("", |m| m.as_str());
    let args = caps.name("args").map_or("", |m| m.as_str());
    let labeled: Vec<(String, String)> = argument_pattern()
        .captures_iter(args)
        .filter_map(|c| {
            let label = c.name("label")?.as_str().to_string();
            let value = unescape(c.name("value")?.as_str());
            Some((label, value))
        })
        .collect();
    from_tag(tag, |key| labeled.iter().find(|(l, _)| l == key).map(|(_, v)| v.clone()))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Map a tag plus a field lookup to a normalized edge.
fn from_tag<F>(tag: &str, field: F) -> DependencyEdge
where
    F: Fn(&str) -> Option<String>,
{
    let (kind, name) = match tag {
        "target" => (EdgeKind::TargetInSameProject, field("name")),
        "project" => (EdgeKind::TargetInOtherProject, field("target")),
        "package" | "external" => (EdgeKind::External, field("product").or_else(|| field("name"))),
        "framework" | "library" => (EdgeKind::FrameworkOrLibrary, field("path").map(file_stem)),
        "xcframework" => (EdgeKind::XCFramework, field("path").map(file_stem)),
        "sdk" => (EdgeKind::Sdk, field("name")),
        "xctest" => (EdgeKind::Sdk, Some("XCTest".to_string())),
        _ => return DependencyEdge::unrecognized(),
    };
    DependencyEdge::new(kind, name.unwrap_or_default())
}

fn file_stem(path: String) -> String {
    Path::new(&path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map_or(path.clone(), str::to_string)
}

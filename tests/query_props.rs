use find_dependencies::graph::{DependencyEdge, EdgeKind, Graph, Project, Target};
use find_dependencies::query::{find_dependencies, find_dependents};
use proptest::prelude::*;
use serde_json::json;

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

proptest! {
    // Edge decoding is total: any JSON value yields an edge, never a panic
    #[test]
    fn edge_decoding_never_panics_on_text(s in ".*") {
        let edge = DependencyEdge::decode(&json!(s));
        if !edge.is_recognized() {
            prop_assert!(edge.name.is_empty());
        }
    }

    #[test]
    fn edge_decoding_handles_arbitrary_tags(tag in "[a-z]{1,10}", value in ".*") {
        let mut raw = serde_json::Map::new();
        raw.insert(tag.clone(), json!({ "name": value.clone() }));
        let edge = DependencyEdge::decode(&serde_json::Value::Object(raw));
        if tag == "target" {
            prop_assert_eq!(edge, DependencyEdge::new(EdgeKind::TargetInSameProject, value));
        } else if !edge.is_recognized() {
            prop_assert!(edge.name.is_empty());
        }
    }

    // Serialized targets round-trip into the same ordered dependency names
    #[test]
    fn dependencies_round_trip_through_document(
        module in name(),
        deps in prop::collection::vec(name(), 0..8),
    ) {
        let edges: Vec<_> = deps.iter().map(|d| json!({ "target": { "name": d } })).collect();
        let doc = json!({
            "projects": { "p": { "targets": [ { "name": module.clone(), "dependencies": edges } ] } }
        });
        let g = Graph::from_slice(doc.to_string().as_bytes()).unwrap();
        prop_assert_eq!(find_dependencies(&g, &module), deps);
    }

    // A target with no edges is never reported as a dependent
    #[test]
    fn edgeless_targets_are_never_dependents(
        targets in prop::collection::vec((name(), prop::collection::vec(name(), 0..4)), 1..8),
        module in name(),
    ) {
        let mut g = Graph::default();
        g.projects.insert("p".to_string(), Project {
            targets: targets
                .iter()
                .map(|(n, deps)| Target {
                    name: n.clone(),
                    dependencies: deps
                        .iter()
                        .map(|d| DependencyEdge::new(EdgeKind::TargetInSameProject, d.clone()))
                        .collect(),
                })
                .collect(),
        });
        let dependents = find_dependents(&g, &module);
        for (n, deps) in &targets {
            if deps.is_empty() && !targets.iter().any(|(m, d)| m == n && !d.is_empty()) {
                prop_assert!(!dependents.contains(n));
            }
        }
        let expected: usize = targets
            .iter()
            .map(|(_, deps)| deps.iter().filter(|d| *d == &module).count())
            .sum();
        prop_assert_eq!(dependents.len(), expected);
    }
}

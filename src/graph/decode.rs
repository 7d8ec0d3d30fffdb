//! Object-only deserialization for the graph entities.
//!
//! Derived struct deserializers also accept a JSON array in field order, so a
//! target written as `["Core", []]` would decode. These visitors only accept
//! maps, reject duplicate fields and duplicate project ids, and skip unknown
//! fields.
use super::{DependencyEdge, Graph, Project, Target};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

struct GraphVisitor;

impl<'de> Visitor<'de> for GraphVisitor {
    type Value = Graph;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a graph object with a `projects` map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Graph, A::Error> {
        let mut projects: Option<ProjectMap> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "projects" => {
                    if projects.is_some() {
                        return Err(de::Error::duplicate_field("projects"));
                    }
                    projects = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let projects = projects.ok_or_else(|| de::Error::missing_field("projects"))?;
        Ok(Graph { projects: projects.0 })
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GraphVisitor)
    }
}

/// Project id -> project, refusing repeated ids.
struct ProjectMap(BTreeMap<String, Project>);

struct ProjectMapVisitor;

impl<'de> Visitor<'de> for ProjectMapVisitor {
    type Value = ProjectMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from project id to project")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ProjectMap, A::Error> {
        let mut projects = BTreeMap::new();
        while let Some(id) = map.next_key::<String>()? {
            if projects.contains_key(&id) {
                return Err(de::Error::custom(format!("duplicate project id `{id}`")));
            }
            let project: Project = map.next_value()?;
            projects.insert(id, project);
        }
        Ok(ProjectMap(projects))
    }
}

impl<'de> Deserialize<'de> for ProjectMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProjectMapVisitor)
    }
}

struct ProjectVisitor;

impl<'de> Visitor<'de> for ProjectVisitor {
    type Value = Project;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a project object with a `targets` array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Project, A::Error> {
        let mut targets: Option<Vec<Target>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "targets" => {
                    if targets.is_some() {
                        return Err(de::Error::duplicate_field("targets"));
                    }
                    targets = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let targets = targets.ok_or_else(|| de::Error::missing_field("targets"))?;
        Ok(Project { targets })
    }
}

impl<'de> Deserialize<'de> for Project {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProjectVisitor)
    }
}

struct TargetVisitor;

impl<'de> Visitor<'de> for TargetVisitor {
    type Value = Target;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a target object with `name` and `dependencies`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Target, A::Error> {
        let mut name: Option<String> = None;
        let mut dependencies: Option<Vec<DependencyEdge>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => {
                    if name.is_some() {
                        return Err(de::Error::duplicate_field("name"));
                    }
                    name = Some(map.next_value()?);
                }
                "dependencies" => {
                    if dependencies.is_some() {
                        return Err(de::Error::duplicate_field("dependencies"));
                    }
                    dependencies = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
        let dependencies = dependencies.ok_or_else(|| de::Error::missing_field("dependencies"))?;
        Ok(Target { name, dependencies })
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TargetVisitor)
    }
}

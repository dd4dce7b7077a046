use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GrandError;
use crate::graph::{Graph, LinkAttributes, NodeAttributes, NodeId};
use crate::utils::source::{parse_toml, read_toml};

/// Name given to in-memory sources in diagnostics
const INLINE_SOURCE: &str = "<build description>";

#[derive(Debug, Clone, Deserialize)]
pub struct BuildFile {
    pub project: Project,
    #[serde(default, rename = "target")]
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    /// Target used as the graph's start node
    pub default: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub depends: Vec<String>,
    #[serde(default)]
    pub calls: Vec<String>,
    #[serde(rename = "if")]
    pub if_condition: Option<String>,
    pub unless: Option<String>,
}

impl Target {
    pub fn is_conditional(&self) -> bool {
        self.if_condition.is_some() || self.unless.is_some()
    }

    /// `if X, unless Y` style summary of the target's guards
    pub fn condition_text(&self) -> Option<String> {
        let guards: Vec<String> = [("if", &self.if_condition), ("unless", &self.unless)]
            .into_iter()
            .filter_map(|(keyword, condition)| {
                condition.as_ref().map(|condition| format!("{keyword} {condition}"))
            })
            .collect();
        (!guards.is_empty()).then(|| guards.join(", "))
    }
}

impl BuildFile {
    pub fn parse_file(path: &Path) -> Result<Self, GrandError> {
        read_toml(path)
    }

    /// Build the dependency graph
    ///
    /// Every named target becomes a node first, in file order. Links are
    /// created in a second pass; a reference to an undefined target creates
    /// a node flagged `MISSING` on first use.
    pub fn to_graph(&self) -> Result<Graph, GrandError> {
        debug!(project = %self.project.name, targets = self.targets.len(), "building graph");
        let mut graph = Graph::new(&self.project.name);

        for target in self.named_targets() {
            let id = graph.create_node(&target.name)?;
            match target.description.as_deref().filter(|d| !d.is_empty()) {
                Some(description) => {
                    graph.add_node_attributes(id, NodeAttributes::MAIN)?;
                    graph.set_node_description(id, Some(description.to_string()))?;
                }
                None => graph.set_node_description(id, target.condition_text())?,
            }
        }

        if let Some(default) = self.project.default.as_deref().filter(|d| !d.is_empty()) {
            let start = graph.node_id(default).ok_or_else(|| GrandError::GraphError {
                message: format!(
                    "Default target '{default}' of project '{}' is not defined",
                    self.project.name
                ),
            })?;
            graph.set_start_node(Some(start))?;
        }

        for target in self.named_targets() {
            let start = graph.node_id(&target.name).ok_or_else(|| GrandError::NonExistentNode {
                name: target.name.clone(),
            })?;
            let mut extra = LinkAttributes::empty();
            if target.is_conditional() {
                extra |= LinkAttributes::CONDITIONAL;
            }

            for dependency in &target.depends {
                let end = end_node(&mut graph, &target.name, dependency)?;
                let link = graph.create_link(None, start, end)?;
                graph.add_link_attributes(link, extra)?;
            }
            for callee in &target.calls {
                let end = end_node(&mut graph, &target.name, callee)?;
                let link = graph.create_link(Some("call"), start, end)?;
                graph.add_link_attributes(link, LinkAttributes::WEAK | extra)?;
            }
        }

        Ok(graph)
    }

    fn named_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter().filter(|target| !target.name.is_empty())
    }
}

fn end_node(graph: &mut Graph, from: &str, name: &str) -> Result<NodeId, GrandError> {
    if let Some(id) = graph.node_id(name) {
        return Ok(id);
    }
    warn!(
        from,
        dependency = name,
        "dependency to non existent target, creating a dummy node"
    );
    let id = graph.create_node(name)?;
    graph.add_node_attributes(id, NodeAttributes::MISSING)?;
    Ok(id)
}

impl FromStr for BuildFile {
    type Err = GrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_toml(s, INLINE_SOURCE)
    }
}

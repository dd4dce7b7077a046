use tracing::debug;

use super::GraphFilter;
use crate::error::GrandError;
use crate::graph::Graph;

/// Removes exactly the named nodes, whatever their connectivity
///
/// Names absent from the graph are ignored. Nodes left linkless by the
/// removal stay in the graph.
#[derive(Debug, Clone, Default)]
pub struct NodeRemoverFilter {
    nodes: Vec<String>,
}

impl NodeRemoverFilter {
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::default();
        for node in nodes {
            filter.add_node(node);
        }
        filter
    }

    pub fn add_node(&mut self, node: impl Into<String>) {
        let node = node.into();
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

impl GraphFilter for NodeRemoverFilter {
    fn name(&self) -> &str {
        "removenode"
    }

    fn filter(&self, mut graph: Graph) -> Result<Graph, GrandError> {
        for name in &self.nodes {
            match graph.node_id(name) {
                Some(id) => {
                    graph.remove_node(id);
                    debug!(filter = self.name(), node = %name, "node removed");
                }
                None => debug!(filter = self.name(), node = %name, "node not in graph"),
            }
        }
        Ok(graph)
    }
}

use tracing::debug;

use super::GraphFilter;
use crate::error::GrandError;
use crate::graph::Graph;

/// Drops every node that has neither outgoing nor incoming links
///
/// Single pass over the node table: nodes left linkless by another removal in
/// the same pass are not revisited.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsolatedNodeFilter;

impl GraphFilter for IsolatedNodeFilter {
    fn name(&self) -> &str {
        "isolatednode"
    }

    fn filter(&self, mut graph: Graph) -> Result<Graph, GrandError> {
        let removed = graph.retain_nodes(|node| node.is_linked());
        debug!(filter = self.name(), removed, "isolated nodes removed");
        Ok(graph)
    }
}

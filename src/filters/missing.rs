use tracing::debug;

use super::GraphFilter;
use crate::error::GrandError;
use crate::graph::{Graph, NodeAttributes};

/// Drops nodes that were referenced but never defined upstream
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingNodeFilter;

impl GraphFilter for MissingNodeFilter {
    fn name(&self) -> &str {
        "missingnode"
    }

    fn filter(&self, mut graph: Graph) -> Result<Graph, GrandError> {
        let removed = graph.retain_nodes(|node| !node.has_attributes(NodeAttributes::MISSING));
        debug!(filter = self.name(), removed, "missing nodes removed");
        Ok(graph)
    }
}

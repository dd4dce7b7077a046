use std::collections::HashSet;

use tracing::debug;

use super::GraphFilter;
use crate::error::GrandError;
use crate::graph::{BackwardLinkFinder, ForwardLinkFinder, Graph, GraphCrawler, LinkFinder, NodeId};

/// Keeps the nodes reached by crawling from a named anchor node
///
/// The kept set is the union of one crawl per configured [`LinkFinder`]; the
/// anchor itself is always kept. Fails with
/// [`GrandError::NonExistentNode`] when the anchor is absent upstream.
#[derive(Debug)]
pub struct GraphWalkFilter {
    name: &'static str,
    node: String,
    finders: Vec<Box<dyn LinkFinder>>,
}

impl GraphWalkFilter {
    /// The anchor and everything it depends on
    pub fn from_node(node: impl Into<String>) -> Self {
        Self::new("fromnode", node, vec![Box::new(ForwardLinkFinder)])
    }

    /// The anchor and everything depending on it
    pub fn to_node(node: impl Into<String>) -> Self {
        Self::new("tonode", node, vec![Box::new(BackwardLinkFinder)])
    }

    /// Everything linked to the anchor in either direction
    pub fn connected_to(node: impl Into<String>) -> Self {
        Self::new(
            "connected",
            node,
            vec![Box::new(ForwardLinkFinder), Box::new(BackwardLinkFinder)],
        )
    }

    fn new(name: &'static str, node: impl Into<String>, finders: Vec<Box<dyn LinkFinder>>) -> Self {
        Self {
            name,
            node: node.into(),
            finders,
        }
    }

    pub fn node(&self) -> &str {
        &self.node
    }
}

impl GraphFilter for GraphWalkFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn filter(&self, mut graph: Graph) -> Result<Graph, GrandError> {
        let start = graph
            .node(&self.node)
            .ok_or_else(|| GrandError::NonExistentNode {
                name: self.node.clone(),
            })?;

        let keep: HashSet<NodeId> = self
            .finders
            .iter()
            .flat_map(|finder| GraphCrawler::new(finder.as_ref()).crawl(start))
            .map(|node| node.id())
            .collect();

        let removed = graph.retain_nodes(|node| keep.contains(&node.id()));
        debug!(
            filter = self.name,
            node = %self.node,
            kept = keep.len(),
            removed,
            "walk filter applied"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{abcd, node_names};

    /// `A -> B -> C`, `E -> B`, `D` isolated
    fn with_side_branch() -> Graph {
        let mut graph = abcd();
        let e = graph.create_node("E").unwrap();
        let b = graph.node_id("B").unwrap();
        graph.create_link(None, e, b).unwrap();
        graph
    }

    #[test]
    fn test_from_node_keeps_downstream() {
        let graph = GraphWalkFilter::from_node("B")
            .filter(with_side_branch())
            .unwrap();

        assert_eq!(node_names(&graph), vec!["B", "C"]);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_to_node_keeps_upstream() {
        let graph = GraphWalkFilter::to_node("B")
            .filter(with_side_branch())
            .unwrap();

        assert_eq!(node_names(&graph), vec!["A", "B", "E"]);
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn test_connected_to_is_union_of_both_directions() {
        let graph = GraphWalkFilter::connected_to("B")
            .filter(with_side_branch())
            .unwrap();

        assert_eq!(node_names(&graph), vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn test_connected_to_does_not_cross_direction_changes() {
        // From C going backward reaches B, A and E; nothing is only reachable
        // through a forward hop after a backward one.
        let mut graph = with_side_branch();
        let f = graph.create_node("F").unwrap();
        let e = graph.node_id("E").unwrap();
        graph.create_link(None, e, f).unwrap();

        let graph = GraphWalkFilter::connected_to("C").filter(graph).unwrap();
        assert_eq!(node_names(&graph), vec!["A", "B", "C", "E"]);
    }

    #[test]
    fn test_walk_keeps_start_node() {
        let graph = GraphWalkFilter::from_node("D").filter(abcd()).unwrap();

        assert_eq!(node_names(&graph), vec!["D"]);
    }

    #[test]
    fn test_non_existent_anchor_fails() {
        for filter in [
            GraphWalkFilter::from_node("gruik"),
            GraphWalkFilter::to_node("gruik"),
            GraphWalkFilter::connected_to("gruik"),
        ] {
            match filter.filter(abcd()) {
                Err(GrandError::NonExistentNode { name }) => assert_eq!(name, "gruik"),
                Err(other) => panic!("{}: unexpected error {other}", filter.name()),
                Ok(_) => panic!("{}: expected an error", filter.name()),
            }
        }
    }

    #[test]
    fn test_walk_handles_cycles() {
        let mut graph = abcd();
        let a = graph.node_id("A").unwrap();
        let c = graph.node_id("C").unwrap();
        graph.create_link(None, c, a).unwrap();

        let graph = GraphWalkFilter::from_node("C").filter(graph).unwrap();
        assert_eq!(node_names(&graph), vec!["A", "B", "C"]);
    }
}

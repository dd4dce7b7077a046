//! Borrowed views on graph elements
//!
//! A view pairs a handle with the graph that owns it, which is how a node
//! reaches its owning graph and how a link reaches its endpoints.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use petgraph::Direction;

use super::container::SubGraph;
use super::model::Graph;
use super::types::{LinkAttributes, LinkId, NodeAttributes, NodeId};

#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Self { graph, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph owning this node
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn name(&self) -> &'g str {
        &self.graph.node_data(self.id).name
    }

    pub fn description(&self) -> Option<&'g str> {
        self.graph.node_data(self.id).description.as_deref()
    }

    pub fn attributes(&self) -> NodeAttributes {
        self.graph.node_data(self.id).attributes
    }

    /// True when every bit of `attributes` is set on the node
    pub fn has_attributes(&self, attributes: NodeAttributes) -> bool {
        self.attributes().contains(attributes)
    }

    /// Outgoing links, in creation order
    pub fn links(&self) -> impl Iterator<Item = LinkRef<'g>> + use<'g> {
        self.graph
            .sorted_links(self.id, Direction::Outgoing)
            .into_iter()
    }

    /// Incoming links, in creation order
    pub fn back_links(&self) -> impl Iterator<Item = LinkRef<'g>> + use<'g> {
        self.graph
            .sorted_links(self.id, Direction::Incoming)
            .into_iter()
    }

    /// True when the node has at least one incoming or outgoing link
    pub fn is_linked(&self) -> bool {
        self.graph.is_linked(self.id)
    }

    /// The subgraph the node was created in, if any
    pub fn subgraph(&self) -> Option<&'g SubGraph> {
        let position = self.graph.node_data(self.id).container?;
        self.graph.subgraph_at(position)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
pub struct LinkRef<'g> {
    graph: &'g Graph,
    id: LinkId,
    start: NodeId,
    end: NodeId,
}

impl<'g> LinkRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: LinkId, start: NodeId, end: NodeId) -> Self {
        Self {
            graph,
            id,
            start,
            end,
        }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn name(&self) -> Option<&'g str> {
        self.graph.link_data(self.id).name.as_deref()
    }

    pub fn attributes(&self) -> LinkAttributes {
        self.graph.link_data(self.id).attributes
    }

    pub fn has_attributes(&self, attributes: LinkAttributes) -> bool {
        self.attributes().contains(attributes)
    }

    pub fn start_node(&self) -> NodeRef<'g> {
        NodeRef::new(self.graph, self.start)
    }

    pub fn end_node(&self) -> NodeRef<'g> {
        NodeRef::new(self.graph, self.end)
    }
}

impl PartialEq for LinkRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for LinkRef<'_> {}

impl fmt::Debug for LinkRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("start", &self.start_node().name())
            .field("end", &self.end_node().name())
            .finish()
    }
}

/// A subgraph seen through its owning graph
#[derive(Clone, Copy)]
pub struct SubGraphRef<'g> {
    graph: &'g Graph,
    subgraph: &'g SubGraph,
}

impl<'g> SubGraphRef<'g> {
    pub(crate) fn new(graph: &'g Graph, subgraph: &'g SubGraph) -> Self {
        Self { graph, subgraph }
    }

    pub fn name(&self) -> &'g str {
        self.subgraph.name()
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.subgraph.has_node(name)
    }

    pub fn node(&self, name: &str) -> Option<NodeRef<'g>> {
        self.subgraph
            .node_id(name)
            .map(|id| NodeRef::new(self.graph, id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'g>> + use<'g> {
        let graph = self.graph;
        self.subgraph
            .node_ids()
            .map(move |id| NodeRef::new(graph, id))
    }

    pub fn len(&self) -> usize {
        self.subgraph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subgraph.is_empty()
    }
}

impl fmt::Debug for SubGraphRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubGraphRef")
            .field("name", &self.name())
            .field("nodes", &self.len())
            .finish()
    }
}

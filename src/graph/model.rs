use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use tracing::{trace, warn};

use super::container::{NodeTable, SubGraph};
use super::refs::{LinkRef, NodeRef, SubGraphRef};
use super::types::{
    LinkAttributes, LinkData, LinkId, NodeAttributes, NodeData, NodeId, next_origin, next_serial,
};
use crate::error::{ElementKind, GrandError};

/// A named directed multigraph of uniquely named nodes and attributed links
///
/// Nodes and links are only created through the graph's factory methods and
/// only destroyed through [`Graph::remove_node`] / [`Graph::remove_link`], so
/// every link is always registered on exactly its two endpoints.
///
/// A clone keeps the origin tag of the graph it was cloned from, so handles
/// taken on one are valid on the other.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    origin: u64,
    inner: StableDiGraph<NodeData, LinkData>,
    nodes: NodeTable,
    subgraphs: Vec<SubGraph>,
    start: Option<NodeId>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: next_origin(),
            inner: StableDiGraph::new(),
            nodes: NodeTable::default(),
            subgraphs: Vec::new(),
            start: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a node in the main node table
    pub fn create_node(&mut self, name: &str) -> Result<NodeId, GrandError> {
        if self.nodes.contains(name) {
            warn!(graph = %self.name, node = name, "cannot create two nodes with the same name");
            return Err(GrandError::DuplicateName {
                kind: ElementKind::Node,
                name: name.to_string(),
            });
        }
        let id = self.add_node_data(name, None);
        self.nodes.insert(name, id)?;
        Ok(id)
    }

    /// Create a node registered in the named subgraph instead of the main
    /// table
    pub fn create_node_in(&mut self, subgraph: &str, name: &str) -> Result<NodeId, GrandError> {
        let position = self.subgraph_position(subgraph)?;
        if self.subgraphs[position].has_node(name) {
            warn!(subgraph, node = name, "cannot create two nodes with the same name");
            return Err(GrandError::DuplicateName {
                kind: ElementKind::Node,
                name: name.to_string(),
            });
        }
        let id = self.add_node_data(name, Some(position));
        self.subgraphs[position].table.insert(name, id)?;
        Ok(id)
    }

    /// Create a link from `start` to `end`
    ///
    /// Link names need not be unique and several links may join the same
    /// pair of nodes.
    pub fn create_link(
        &mut self,
        name: Option<&str>,
        start: NodeId,
        end: NodeId,
    ) -> Result<LinkId, GrandError> {
        self.check_node(start)?;
        self.check_node(end)?;
        let serial = next_serial();
        let data = LinkData {
            name: name.map(str::to_string),
            attributes: LinkAttributes::empty(),
            serial,
        };
        Ok(LinkId {
            index: self.inner.add_edge(start.index, end.index, data),
            origin: self.origin,
            serial,
        })
    }

    pub fn create_subgraph(&mut self, name: &str) -> Result<(), GrandError> {
        if self.has_subgraph(name) {
            warn!(subgraph = name, "cannot create two subgraphs with the same name");
            return Err(GrandError::DuplicateName {
                kind: ElementKind::SubGraph,
                name: name.to_string(),
            });
        }
        self.subgraphs.push(SubGraph::new(name));
        Ok(())
    }

    /// Look a node up in the main node table
    pub fn node(&self, name: &str) -> Option<NodeRef<'_>> {
        self.nodes.get(name).map(|id| NodeRef::new(self, id))
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name)
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    /// Resolve a handle on any node of the graph, subgraph members included
    pub fn node_by_id(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.owns_node(id).then(|| NodeRef::new(self, id))
    }

    /// Nodes of the main table in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.nodes.ids().map(move |id| NodeRef::new(self, id))
    }

    /// Snapshot of the main table handles, safe to hold while removing nodes
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.ids().collect()
    }

    /// Number of nodes in the main table
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn link(&self, id: LinkId) -> Option<LinkRef<'_>> {
        if !self.owns_link(id) {
            return None;
        }
        let (start, end) = self.inner.edge_endpoints(id.index)?;
        Some(LinkRef::new(self, id, self.node_handle(start), self.node_handle(end)))
    }

    pub fn start_node(&self) -> Option<NodeRef<'_>> {
        self.start.map(|id| NodeRef::new(self, id))
    }

    /// Designate the start node, or clear it with `None`
    ///
    /// The previous start node loses its `START` attribute and the new one
    /// gains it.
    pub fn set_start_node(&mut self, node: Option<NodeId>) -> Result<(), GrandError> {
        if let Some(id) = node {
            self.check_node(id)?;
        }
        if let Some(previous) = self.start.take() {
            self.inner[previous.index].attributes.remove(NodeAttributes::START);
        }
        if let Some(id) = node {
            self.inner[id.index].attributes.insert(NodeAttributes::START);
            self.start = Some(id);
        }
        Ok(())
    }

    pub fn has_subgraph(&self, name: &str) -> bool {
        self.subgraphs.iter().any(|subgraph| subgraph.name() == name)
    }

    pub fn subgraph(&self, name: &str) -> Option<SubGraphRef<'_>> {
        self.subgraphs
            .iter()
            .find(|subgraph| subgraph.name() == name)
            .map(|subgraph| SubGraphRef::new(self, subgraph))
    }

    /// Subgraphs in creation order
    pub fn subgraphs(&self) -> impl Iterator<Item = SubGraphRef<'_>> + '_ {
        self.subgraphs
            .iter()
            .map(move |subgraph| SubGraphRef::new(self, subgraph))
    }

    pub fn set_node_description(
        &mut self,
        id: NodeId,
        description: Option<String>,
    ) -> Result<(), GrandError> {
        self.node_data_mut(id)?.description = description;
        Ok(())
    }

    /// Set node attributes; `START` is ignored, see [`Graph::set_start_node`]
    pub fn add_node_attributes(
        &mut self,
        id: NodeId,
        attributes: NodeAttributes,
    ) -> Result<(), GrandError> {
        self.node_data_mut(id)?
            .attributes
            .insert(attributes.difference(NodeAttributes::START));
        Ok(())
    }

    /// Clear node attributes; `START` is ignored, see [`Graph::set_start_node`]
    pub fn clear_node_attributes(
        &mut self,
        id: NodeId,
        attributes: NodeAttributes,
    ) -> Result<(), GrandError> {
        self.node_data_mut(id)?
            .attributes
            .remove(attributes.difference(NodeAttributes::START));
        Ok(())
    }

    pub fn add_link_attributes(
        &mut self,
        id: LinkId,
        attributes: LinkAttributes,
    ) -> Result<(), GrandError> {
        if !self.owns_link(id) {
            return Err(GrandError::GraphError {
                message: format!("Link {id} does not belong to graph '{}'", self.name),
            });
        }
        self.inner[id.index].attributes.insert(attributes);
        Ok(())
    }

    /// Remove a node together with every link touching it
    ///
    /// Outgoing links are dropped from their end node, incoming links from
    /// their start node, the node leaves its container and the start pointer
    /// is cleared if it referenced the node. Returns `false` for an unknown
    /// handle.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.owns_node(id) {
            return false;
        }
        let data = &self.inner[id.index];
        let name = data.name.clone();
        let container = data.container;

        let mut touching: Vec<EdgeIndex> = self
            .inner
            .edges_directed(id.index, Direction::Outgoing)
            .chain(self.inner.edges_directed(id.index, Direction::Incoming))
            .map(|edge| edge.id())
            .collect();
        touching.sort_unstable();
        touching.dedup();
        trace!(node = %name, links = touching.len(), "unlinking node");

        for edge in touching {
            self.inner.remove_edge(edge);
        }

        match container {
            None => self.nodes.remove(&name),
            Some(position) => self.subgraphs[position].table.remove(&name),
        };

        if self.start == Some(id) {
            self.start = None;
        }

        self.inner.remove_node(id.index);
        true
    }

    /// Remove a single link from both of its endpoints
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        self.owns_link(id) && self.inner.remove_edge(id.index).is_some()
    }

    /// True when the node has at least one incoming or outgoing link
    pub fn is_linked(&self, id: NodeId) -> bool {
        self.owns_node(id) && self.inner.neighbors_undirected(id.index).next().is_some()
    }

    /// Keep only the main-table nodes accepted by `keep`
    ///
    /// The predicate sees the graph as it was before the call: every verdict
    /// is taken first, then the rejected nodes are removed. Returns the
    /// number of removed nodes.
    pub fn retain_nodes<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(NodeRef<'_>) -> bool,
    {
        let rejected: Vec<NodeId> = self
            .nodes()
            .filter(|node| !keep(*node))
            .map(|node| node.id())
            .collect();

        rejected
            .into_iter()
            .filter(|&id| self.remove_node(id))
            .count()
    }

    pub(crate) fn node_data(&self, id: NodeId) -> &NodeData {
        &self.inner[id.index]
    }

    pub(crate) fn link_data(&self, id: LinkId) -> &LinkData {
        &self.inner[id.index]
    }

    /// Links of a node in one direction, in creation order
    pub(crate) fn sorted_links(&self, id: NodeId, direction: Direction) -> Vec<LinkRef<'_>> {
        let mut links: Vec<LinkRef<'_>> = self
            .inner
            .edges_directed(id.index, direction)
            .filter_map(|edge| {
                let (start, end) = self.inner.edge_endpoints(edge.id())?;
                let link = LinkId {
                    index: edge.id(),
                    origin: self.origin,
                    serial: edge.weight().serial,
                };
                Some(LinkRef::new(self, link, self.node_handle(start), self.node_handle(end)))
            })
            .collect();
        links.sort_unstable_by_key(|link| link.id().serial);
        links
    }

    pub(crate) fn subgraph_at(&self, position: usize) -> Option<&SubGraph> {
        self.subgraphs.get(position)
    }

    fn subgraph_position(&self, name: &str) -> Result<usize, GrandError> {
        self.subgraphs
            .iter()
            .position(|subgraph| subgraph.name() == name)
            .ok_or_else(|| GrandError::UnknownSubGraph {
                name: name.to_string(),
            })
    }

    fn add_node_data(&mut self, name: &str, container: Option<usize>) -> NodeId {
        let serial = next_serial();
        NodeId {
            index: self.inner.add_node(NodeData::new(name, container, serial)),
            origin: self.origin,
            serial,
        }
    }

    /// Handle on a live arena slot
    fn node_handle(&self, index: NodeIndex) -> NodeId {
        NodeId {
            index,
            origin: self.origin,
            serial: self.inner[index].serial,
        }
    }

    /// The handle was issued by this graph (or a clone) and its node is alive
    fn owns_node(&self, id: NodeId) -> bool {
        id.origin == self.origin
            && self
                .inner
                .node_weight(id.index)
                .is_some_and(|data| data.serial == id.serial)
    }

    fn owns_link(&self, id: LinkId) -> bool {
        id.origin == self.origin
            && self
                .inner
                .edge_weight(id.index)
                .is_some_and(|data| data.serial == id.serial)
    }

    fn check_node(&self, id: NodeId) -> Result<(), GrandError> {
        if self.owns_node(id) {
            Ok(())
        } else {
            Err(GrandError::GraphError {
                message: format!("Node {id} does not belong to graph '{}'", self.name),
            })
        }
    }

    fn node_data_mut(&mut self, id: NodeId) -> Result<&mut NodeData, GrandError> {
        self.check_node(id)?;
        Ok(&mut self.inner[id.index])
    }
}

impl NodeData {
    fn new(name: &str, container: Option<usize>, serial: u64) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            attributes: NodeAttributes::empty(),
            container,
            serial,
        }
    }
}

#[derive(PartialEq)]
struct NodeShape<'a> {
    name: &'a str,
    description: Option<&'a str>,
    attributes: NodeAttributes,
    links: Vec<(Option<&'a str>, &'a str, LinkAttributes)>,
}

impl<'a> NodeShape<'a> {
    fn of(node: NodeRef<'a>) -> Self {
        Self {
            name: node.name(),
            description: node.description(),
            attributes: node.attributes(),
            links: node
                .links()
                .map(|link| (link.name(), link.end_node().name(), link.attributes()))
                .collect(),
        }
    }
}

/// Structural equality: same name, start node, main-table nodes (in order,
/// with their outgoing links) and subgraph membership
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.start_node().map(|node| node.name()) != other.start_node().map(|node| node.name())
        {
            return false;
        }

        let ours: Vec<NodeShape<'_>> = self.nodes().map(NodeShape::of).collect();
        let theirs: Vec<NodeShape<'_>> = other.nodes().map(NodeShape::of).collect();
        if ours != theirs {
            return false;
        }

        let ours: Vec<(&str, Vec<NodeShape<'_>>)> = self
            .subgraphs()
            .map(|subgraph| (subgraph.name(), subgraph.nodes().map(NodeShape::of).collect()))
            .collect();
        let theirs: Vec<(&str, Vec<NodeShape<'_>>)> = other
            .subgraphs()
            .map(|subgraph| (subgraph.name(), subgraph.nodes().map(NodeShape::of).collect()))
            .collect();
        ours == theirs
    }
}

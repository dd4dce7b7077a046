//! Core graph types
//!
//! Handles and attribute flags shared by the graph container, the crawler and
//! the filters.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;
use petgraph::stable_graph::{EdgeIndex, NodeIndex};

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Tag shared by a graph and all of its clones
pub(crate) fn next_origin() -> u64 {
    NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed)
}

/// Process-wide creation counter for nodes and links
///
/// Monotonic, so it doubles as the creation order of links.
pub(crate) fn next_serial() -> u64 {
    NEXT_SERIAL.fetch_add(1, Ordering::Relaxed)
}

/// Handle on a node owned by a [`Graph`](super::Graph)
///
/// Handles stay valid across clones of the graph. A handle is rejected by
/// any other graph, and once its node is removed it stays dead even if the
/// arena slot is reused by a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: NodeIndex,
    pub(crate) origin: u64,
    pub(crate) serial: u64,
}

/// Handle on a link owned by a [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId {
    pub(crate) index: EdgeIndex,
    pub(crate) origin: u64,
    pub(crate) serial: u64,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index.index())
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.index.index())
    }
}

bitflags! {
    /// Attributes carried by a node
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeAttributes: u32 {
        /// The target has a human-facing description.
        const MAIN = 1 << 0;

        /// Referenced by the build description but never defined.
        const MISSING = 1 << 1;

        /// The graph's designated entry point. Only [`Graph::set_start_node`]
        /// sets or clears this bit.
        ///
        /// [`Graph::set_start_node`]: super::Graph::set_start_node
        const START = 1 << 2;
    }
}

bitflags! {
    /// Attributes carried by a link
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LinkAttributes: u32 {
        /// A call-style reference that does not imply a build order.
        const WEAK = 1 << 0;

        /// Guarded by a runtime condition.
        const CONDITIONAL = 1 << 1;
    }
}

impl NodeAttributes {
    /// Lower-case names of the set flags, in bit order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(NodeAttributes::MAIN) {
            names.push("main");
        }
        if self.contains(NodeAttributes::MISSING) {
            names.push("missing");
        }
        if self.contains(NodeAttributes::START) {
            names.push("start");
        }
        names
    }
}

impl LinkAttributes {
    /// Lower-case names of the set flags, in bit order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(LinkAttributes::WEAK) {
            names.push("weak");
        }
        if self.contains(LinkAttributes::CONDITIONAL) {
            names.push("conditional");
        }
        names
    }
}

/// Payload stored for every node in the arena
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) attributes: NodeAttributes,
    /// Index of the owning subgraph, `None` for the main table.
    pub(crate) container: Option<usize>,
    pub(crate) serial: u64,
}

/// Payload stored for every link in the arena
#[derive(Debug, Clone)]
pub(crate) struct LinkData {
    pub(crate) name: Option<String>,
    pub(crate) attributes: LinkAttributes,
    /// Creation order, used to keep endpoint link sets insertion-ordered.
    pub(crate) serial: u64,
}

//! Breadth-first reachability
//!
//! [`GraphCrawler`] walks a graph from a start node, asking a [`LinkFinder`]
//! for the one-hop neighbours of every node it visits. The finder picks the
//! direction, so the same crawl answers both "what does X depend on" and
//! "what depends on X".

use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::refs::NodeRef;
use super::types::NodeId;

/// One-hop neighbour lookup in a fixed direction
pub trait LinkFinder: fmt::Debug {
    /// Neighbours of `node`, de-duplicated, in link insertion order
    fn find<'g>(&self, node: NodeRef<'g>) -> Vec<NodeRef<'g>>;
}

/// Follows outgoing links to their end nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardLinkFinder;

/// Follows incoming links back to their start nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct BackwardLinkFinder;

impl LinkFinder for ForwardLinkFinder {
    fn find<'g>(&self, node: NodeRef<'g>) -> Vec<NodeRef<'g>> {
        unique(node.links().map(|link| link.end_node()))
    }
}

impl LinkFinder for BackwardLinkFinder {
    fn find<'g>(&self, node: NodeRef<'g>) -> Vec<NodeRef<'g>> {
        unique(node.back_links().map(|link| link.start_node()))
    }
}

fn unique<'g>(nodes: impl Iterator<Item = NodeRef<'g>>) -> Vec<NodeRef<'g>> {
    let mut seen = HashSet::new();
    nodes.filter(|node| seen.insert(node.id())).collect()
}

#[derive(Debug, Clone, Copy)]
pub struct GraphCrawler<'f> {
    finder: &'f dyn LinkFinder,
}

impl<'f> GraphCrawler<'f> {
    pub fn new(finder: &'f dyn LinkFinder) -> Self {
        Self { finder }
    }

    /// Every node reachable from `start`, `start` included
    ///
    /// Nodes come out in BFS level order, each exactly once. Only membership
    /// is meaningful to callers.
    pub fn crawl<'g>(&self, start: NodeRef<'g>) -> Vec<NodeRef<'g>> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut reached = Vec::new();
        let mut worklist = VecDeque::from([start]);

        while let Some(node) = worklist.pop_front() {
            if !visited.insert(node.id()) {
                continue;
            }
            reached.push(node);
            worklist.extend(
                self.finder
                    .find(node)
                    .into_iter()
                    .filter(|next| !visited.contains(&next.id())),
            );
        }

        reached
    }
}

//! Named node containers
//!
//! A [`NodeTable`] is the insertion-ordered name index behind both the main
//! node table of a [`Graph`](super::Graph) and every [`SubGraph`].

use std::collections::HashMap;

use super::types::NodeId;
use crate::error::{ElementKind, GrandError};

/// Tombstones tolerated before the order list is compacted
const COMPACT_SLACK: usize = 16;

/// Removal leaves a tombstone in `order`, so it costs O(1) amortized.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeTable {
    index: HashMap<String, (NodeId, usize)>,
    order: Vec<Option<NodeId>>,
}

impl NodeTable {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).map(|&(id, _)| id)
    }

    /// Register a node; fails without touching the table on a duplicate name
    pub(crate) fn insert(&mut self, name: &str, id: NodeId) -> Result<(), GrandError> {
        if self.index.contains_key(name) {
            return Err(GrandError::DuplicateName {
                kind: ElementKind::Node,
                name: name.to_string(),
            });
        }
        self.index.insert(name.to_string(), (id, self.order.len()));
        self.order.push(Some(id));
        Ok(())
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<NodeId> {
        let (id, slot) = self.index.remove(name)?;
        self.order[slot] = None;
        if self.order.len() > 2 * self.index.len() + COMPACT_SLACK {
            self.compact();
        }
        Some(id)
    }

    /// Live handles in insertion order
    pub(crate) fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().flatten().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    fn compact(&mut self) {
        self.order.retain(Option::is_some);
        let slots: HashMap<NodeId, usize> = self
            .ids()
            .enumerate()
            .map(|(slot, id)| (id, slot))
            .collect();
        for (id, slot) in self.index.values_mut() {
            if let Some(&new_slot) = slots.get(id) {
                *slot = new_slot;
            }
        }
    }
}

/// A named node partition of a graph
///
/// Subgraphs only store nodes: links are always created through the owning
/// graph and subgraphs cannot be nested.
#[derive(Debug, Clone)]
pub struct SubGraph {
    name: String,
    pub(crate) table: NodeTable,
}

impl SubGraph {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            table: NodeTable::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.table.get(name)
    }

    /// Node handles in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.table.ids()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use petgraph::stable_graph::NodeIndex;

    use super::*;

    fn id(raw: u32) -> NodeId {
        NodeId {
            index: NodeIndex::new(raw as usize),
            origin: 0,
            serial: u64::from(raw),
        }
    }

    fn ids(table: &NodeTable) -> Vec<NodeId> {
        table.ids().collect()
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut table = NodeTable::default();
        table.insert("b", id(1)).unwrap();
        table.insert("a", id(0)).unwrap();
        table.insert("c", id(2)).unwrap();

        assert_eq!(ids(&table), vec![id(1), id(0), id(2)]);
        assert_eq!(table.get("a"), Some(id(0)));
        assert!(!table.contains("d"));
    }

    #[test]
    fn test_duplicate_insert_leaves_table_unchanged() {
        let mut table = NodeTable::default();
        table.insert("a", id(0)).unwrap();

        let err = table.insert("a", id(1)).unwrap_err();
        assert!(matches!(err, GrandError::DuplicateName { .. }));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(id(0)));
    }

    #[test]
    fn test_remove() {
        let mut table = NodeTable::default();
        table.insert("a", id(0)).unwrap();
        table.insert("b", id(1)).unwrap();

        assert_eq!(table.remove("a"), Some(id(0)));
        assert_eq!(table.remove("a"), None);
        assert_eq!(ids(&table), vec![id(1)]);
    }

    #[test]
    fn test_order_survives_compaction() {
        let mut table = NodeTable::default();
        for raw in 0..100 {
            table.insert(&format!("n{raw}"), id(raw)).unwrap();
        }
        for raw in (0..100).filter(|raw| raw % 10 != 0) {
            assert_eq!(table.remove(&format!("n{raw}")), Some(id(raw)));
        }

        let expected: Vec<NodeId> = (0..100).step_by(10).map(id).collect();
        assert_eq!(ids(&table), expected);
        assert_eq!(table.len(), 10);

        // Positions were rewritten by the compaction.
        assert_eq!(table.remove("n50"), Some(id(50)));
        table.insert("n50", id(50)).unwrap();
        let mut expected: Vec<NodeId> = (0..100).step_by(10).filter(|&raw| raw != 50).map(id).collect();
        expected.push(id(50));
        assert_eq!(ids(&table), expected);
    }

    #[test]
    fn test_subgraph_accessors() {
        let mut subgraph = SubGraph::new("core");
        assert!(subgraph.is_empty());
        subgraph.table.insert("Node1", id(0)).unwrap();
        subgraph.table.insert("Node2", id(1)).unwrap();

        assert_eq!(subgraph.name(), "core");
        assert!(subgraph.has_node("Node1"));
        assert!(subgraph.has_node("Node2"));
        assert!(!subgraph.has_node("Node3"));
        assert_eq!(subgraph.len(), 2);
    }
}

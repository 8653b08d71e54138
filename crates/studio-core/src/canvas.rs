//! The canvas editing model.
//!
//! Holds the ordered list of placed nodes and applies the edits the builder
//! UI performs: dropping a palette item, editing props, drag-reordering,
//! deleting and clearing.

use crate::errors::{CoreError, Result};
use crate::node::CanvasNode;
use crate::types::{PropMap, PropValue};

/// The nodes currently placed on the canvas.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    nodes: Vec<CanvasNode>,
    next_id: u64,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a canvas from previously placed nodes.
    pub fn from_nodes(nodes: Vec<CanvasNode>) -> Self {
        Self {
            next_id: nodes.len() as u64,
            nodes,
        }
    }

    /// Place a new node at the bottom of the canvas.
    pub fn add(&mut self, component_type: &str, props: PropMap) -> &CanvasNode {
        let id = self.fresh_id();
        let node = CanvasNode {
            id,
            component_type: component_type.to_string(),
            props,
            order: self.nodes.len() as i64,
        };
        tracing::debug!(id = %node.id, component_type, "node added");
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Replace all props of a node.
    pub fn update_props(&mut self, id: &str, props: PropMap) -> Result<()> {
        let node = self.get_mut(id)?;
        node.props = props;
        Ok(())
    }

    /// Set a single prop of a node.
    pub fn set_prop(&mut self, id: &str, name: &str, value: PropValue) -> Result<()> {
        let node = self.get_mut(id)?;
        node.props.insert(name.to_string(), value);
        Ok(())
    }

    /// Move `active_id` to the position of `over_id`, then renumber every
    /// node's order to its index.
    ///
    /// Returns `false` when either id is unknown or both are the same node.
    pub fn move_node(&mut self, active_id: &str, over_id: &str) -> bool {
        let old_index = self.index_of(active_id);
        let new_index = self.index_of(over_id);
        let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
            return false;
        };
        if old_index == new_index {
            return false;
        }

        let node = self.nodes.remove(old_index);
        self.nodes.insert(new_index, node);
        for (index, node) in self.nodes.iter_mut().enumerate() {
            node.order = index as i64;
        }
        true
    }

    /// Delete a node.
    pub fn remove(&mut self, id: &str) -> Option<CanvasNode> {
        let index = self.index_of(id)?;
        Some(self.nodes.remove(index))
    }

    /// Delete every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Get a node by id.
    pub fn get(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All nodes in placement order.
    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the canvas is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CanvasNode> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| CoreError::NodeNotFound(id.to_string()))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("node_{}", self.next_id);
            self.next_id += 1;
            if self.index_of(&id).is_none() {
                return id;
            }
        }
    }
}

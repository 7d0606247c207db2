//! DOM Document - Document node and tree management
//!
//! The document owns every node in a dense arena. The embedder builds the
//! tree programmatically and supplies layout rectangles; the page engine
//! mutates classes, attributes, and text through the operations here.
//! Operations on unknown node ids are silent no-ops.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::geometry::Rect;
use crate::node::{Attribute, Node, NodeData, NodeId};

/// A DOM document.
#[derive(Debug)]
pub struct Document {
    /// All nodes in the document.
    nodes: Vec<Node>,
    /// ID to node mapping.
    id_map: HashMap<String, NodeId>,
    /// Layout rectangle per element, in page coordinates.
    rects: HashMap<NodeId, Rect>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        let mut doc = Document {
            nodes: Vec::new(),
            id_map: HashMap::new(),
            rects: HashMap::new(),
        };

        // Create document node
        doc.nodes.push(Node::new_document(0));
        doc
    }

    /// The document node id.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Create a new element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create_element_with_attrs(tag, Vec::new())
    }

    /// Create a new element with attributes.
    pub fn create_element_with_attrs(&mut self, tag: &str, attrs: Vec<Attribute>) -> NodeId {
        let id = self.nodes.len();

        // Extract ID attribute for mapping
        if let Some(id_attr) = attrs.iter().find(|a| a.name == "id") {
            self.id_map.insert(id_attr.value.clone(), id);
        }

        self.nodes.push(Node::new_element(id, tag, attrs));
        id
    }

    /// Create a new text node.
    pub fn create_text(&mut self, content: String) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new_text(id, content));
        id
    }

    /// Append a child to a parent.
    pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        if parent_id >= self.nodes.len() || child_id >= self.nodes.len() {
            return;
        }

        // Set child's parent
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent = Some(parent_id);
        }

        // Get parent's current last child
        let old_last_child = self.nodes.get(parent_id).and_then(|p| p.last_child);

        // Update old last child's next_sibling
        if let Some(old_last_id) = old_last_child {
            if let Some(old_last) = self.nodes.get_mut(old_last_id) {
                old_last.next_sibling = Some(child_id);
            }
        }

        // Update child's prev_sibling
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.prev_sibling = old_last_child;
        }

        // Update parent
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            if parent.first_child.is_none() {
                parent.first_child = Some(child_id);
            }
            parent.last_child = Some(child_id);
        }
    }

    /// Remove a child from its parent. The node id stays valid but the node
    /// is no longer reachable from the tree.
    pub fn remove_child(&mut self, child_id: NodeId) {
        let (parent_id, prev_id, next_id) = {
            let child = match self.nodes.get(child_id) {
                Some(c) => c,
                None => return,
            };
            (child.parent, child.prev_sibling, child.next_sibling)
        };

        // Update previous sibling
        if let Some(prev_id) = prev_id {
            if let Some(prev) = self.nodes.get_mut(prev_id) {
                prev.next_sibling = next_id;
            }
        } else if let Some(parent_id) = parent_id {
            // child was first child
            if let Some(parent) = self.nodes.get_mut(parent_id) {
                parent.first_child = next_id;
            }
        }

        // Update next sibling
        if let Some(next_id) = next_id {
            if let Some(next) = self.nodes.get_mut(next_id) {
                next.prev_sibling = prev_id;
            }
        } else if let Some(parent_id) = parent_id {
            // child was last child
            if let Some(parent) = self.nodes.get_mut(parent_id) {
                parent.last_child = prev_id;
            }
        }

        // Clear child's links
        if let Some(child) = self.nodes.get_mut(child_id) {
            child.parent = None;
            child.prev_sibling = None;
            child.next_sibling = None;
        }
    }

    /// Check whether a node is attached to the tree.
    pub fn is_attached(&self, node_id: NodeId) -> bool {
        node_id == 0 || self.nodes.get(node_id).map(|n| n.parent.is_some()).unwrap_or(false)
    }

    /// Get children of a node.
    pub fn children(&self, parent_id: NodeId) -> Vec<NodeId> {
        let mut children = Vec::new();
        let mut child_id = self.nodes.get(parent_id).and_then(|p| p.first_child);

        while let Some(id) = child_id {
            children.push(id);
            child_id = self.nodes.get(id).and_then(|n| n.next_sibling);
        }

        children
    }

    /// Get elements by tag name.
    pub fn get_elements_by_tag_name(&self, tag: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| {
                n.tag_name()
                    .map(|t| t.eq_ignore_ascii_case(tag))
                    .unwrap_or(false)
            })
            .map(|n| n.id)
            .collect()
    }

    /// Get element by ID.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map.get(id).copied()
    }

    /// Get elements by class name.
    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.has_class(class_name))
            .map(|n| n.id)
            .collect()
    }

    /// Get attribute value.
    pub fn get_attribute(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.get(node_id).and_then(|n| n.get_attribute(name))
    }

    /// Set attribute value, keeping the id/class caches in sync.
    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) {
        let mut old_id = None;
        let mut updated = false;

        if let Some(node) = self.nodes.get_mut(node_id) {
            if let NodeData::Element {
                attrs, id, classes, ..
            } = &mut node.data
            {
                updated = true;
                if name == "id" {
                    old_id = id.replace(value.to_string());
                } else if name == "class" {
                    *classes = value.split_whitespace().map(|s| s.into()).collect();
                }

                if let Some(attr) = attrs.iter_mut().find(|a| a.name == name) {
                    attr.value = value.to_string();
                } else {
                    attrs.push(Attribute::new(name, value));
                }
            }
        }

        // Id map updates happen only for real elements, and a rename drops
        // the previous mapping first.
        if name == "id" && updated {
            if let Some(old) = old_id {
                self.id_map.remove(&old);
            }
            self.id_map.insert(value.to_string(), node_id);
        }
    }

    /// Remove attribute.
    pub fn remove_attribute(&mut self, node_id: NodeId, name: &str) {
        let mut removed_id = None;
        if let Some(node) = self.nodes.get_mut(node_id) {
            if let NodeData::Element {
                attrs, id, classes, ..
            } = &mut node.data
            {
                if name == "id" {
                    removed_id = id.take();
                } else if name == "class" {
                    classes.clear();
                }
                attrs.retain(|a| a.name != name);
            }
        }
        if let Some(old) = removed_id {
            self.id_map.remove(&old);
        }
    }

    /// Check if element has a class.
    pub fn has_class(&self, node_id: NodeId, class: &str) -> bool {
        self.get(node_id).map(|n| n.has_class(class)).unwrap_or(false)
    }

    /// Add a class.
    pub fn add_class(&mut self, node_id: NodeId, class: &str) {
        if self.has_class(node_id, class) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(node_id) {
            if let NodeData::Element { classes, .. } = &mut node.data {
                classes.push(class.into());
            }
        }
        self.write_class_attribute(node_id);
    }

    /// Remove a class.
    pub fn remove_class(&mut self, node_id: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(node_id) {
            if let NodeData::Element { classes, .. } = &mut node.data {
                classes.retain(|c| c != class);
            }
        }
        self.write_class_attribute(node_id);
    }

    /// Toggle a class. Returns the new presence state.
    pub fn toggle_class(&mut self, node_id: NodeId, class: &str) -> bool {
        if self.has_class(node_id, class) {
            self.remove_class(node_id, class);
            false
        } else {
            self.add_class(node_id, class);
            true
        }
    }

    /// Set a class's presence explicitly.
    pub fn set_class(&mut self, node_id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node_id, class);
        } else {
            self.remove_class(node_id, class);
        }
    }

    fn write_class_attribute(&mut self, node_id: NodeId) {
        let class_str = self
            .get(node_id)
            .map(|n| n.element_classes().join(" "))
            .unwrap_or_default();

        if let Some(node) = self.nodes.get_mut(node_id) {
            if let NodeData::Element { attrs, .. } = &mut node.data {
                if class_str.is_empty() {
                    attrs.retain(|a| a.name != "class");
                } else if let Some(attr) = attrs.iter_mut().find(|a| a.name == "class") {
                    attr.value = class_str;
                } else {
                    attrs.push(Attribute::new("class", &class_str));
                }
            }
        }
    }

    /// Get text content of a node (recursive).
    pub fn text_content(&self, node_id: NodeId) -> String {
        let node = match self.get(node_id) {
            Some(n) => n,
            None => return String::new(),
        };

        match &node.data {
            NodeData::Text { content } => content.clone(),
            NodeData::Element { .. } | NodeData::Document => {
                let mut result = String::new();
                for child_id in self.children(node_id) {
                    result.push_str(&self.text_content(child_id));
                }
                result
            }
        }
    }

    /// Replace an element's children with a single text node.
    pub fn set_text(&mut self, node_id: NodeId, text: &str) {
        if !self.get(node_id).map(|n| n.is_element()).unwrap_or(false) {
            return;
        }

        // Reuse a sole existing text child when possible
        let children = self.children(node_id);
        if children.len() == 1 {
            if let Some(child) = self.nodes.get_mut(children[0]) {
                if let NodeData::Text { content } = &mut child.data {
                    *content = text.to_string();
                    return;
                }
            }
        }

        for child in children {
            self.remove_child(child);
        }
        let text_id = self.create_text(text.to_string());
        self.append_child(node_id, text_id);
    }

    /// Set an element's layout rectangle (page coordinates).
    pub fn set_rect(&mut self, node_id: NodeId, rect: Rect) {
        if node_id < self.nodes.len() {
            self.rects.insert(node_id, rect);
        }
    }

    /// Get an element's layout rectangle.
    pub fn rect(&self, node_id: NodeId) -> Option<Rect> {
        self.rects.get(&node_id).copied()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if document is empty (only document node).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

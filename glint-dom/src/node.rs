//! DOM Node - Base node type

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Node ID - unique identifier within a document.
pub type NodeId = usize;

/// DOM node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
    Document,
}

/// A DOM node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique ID of this node.
    pub id: NodeId,
    /// Node type.
    pub node_type: NodeType,
    /// Node data (element, text, etc.)
    pub data: NodeData,
    /// Parent node ID.
    pub parent: Option<NodeId>,
    /// First child node ID.
    pub first_child: Option<NodeId>,
    /// Last child node ID.
    pub last_child: Option<NodeId>,
    /// Previous sibling node ID.
    pub prev_sibling: Option<NodeId>,
    /// Next sibling node ID.
    pub next_sibling: Option<NodeId>,
}

/// Node data union.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document node
    Document,
    /// Element node
    Element {
        tag: String,
        attrs: Vec<Attribute>,
        /// Element ID attribute value (cached)
        id: Option<String>,
        /// Element class list (cached)
        classes: Vec<String>,
    },
    /// Text node
    Text { content: String },
}

/// An element attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(name: &str, value: &str) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Node {
    /// Create a new document node.
    pub fn new_document(id: NodeId) -> Self {
        Node {
            id,
            node_type: NodeType::Document,
            data: NodeData::Document,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Create a new element node.
    pub fn new_element(id: NodeId, tag: &str, attrs: Vec<Attribute>) -> Self {
        let id_attr = attrs
            .iter()
            .find(|a| a.name == "id")
            .map(|a| a.value.clone());

        let classes: Vec<String> = attrs
            .iter()
            .find(|a| a.name == "class")
            .map(|a| a.value.split_whitespace().map(|s| s.into()).collect())
            .unwrap_or_default();

        Node {
            id,
            node_type: NodeType::Element,
            data: NodeData::Element {
                tag: tag.into(),
                attrs,
                id: id_attr,
                classes,
            },
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Create a new text node.
    pub fn new_text(id: NodeId, content: String) -> Self {
        Node {
            id,
            node_type: NodeType::Text,
            data: NodeData::Text { content },
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is a document node.
    pub fn is_document(&self) -> bool {
        self.node_type == NodeType::Document
    }

    /// Get tag name (if element).
    pub fn tag_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Get element ID (if element with id attribute).
    pub fn element_id(&self) -> Option<&str> {
        match &self.data {
            NodeData::Element { id: Some(id), .. } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Get element classes (if element).
    pub fn element_classes(&self) -> &[String] {
        match &self.data {
            NodeData::Element { classes, .. } => classes,
            _ => &[],
        }
    }

    /// Get text content (if text node).
    pub fn text_content(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Get attribute value.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        match &self.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    /// Check if has attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        matches!(&self.data, NodeData::Element { attrs, .. } if attrs.iter().any(|a| a.name == name))
    }

    /// Check if element has a class.
    pub fn has_class(&self, class: &str) -> bool {
        match &self.data {
            NodeData::Element { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    /// Check if node has children.
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            NodeData::Document => write!(f, "#document"),
            NodeData::Element { tag, .. } => write!(f, "<{}>", tag),
            NodeData::Text { content } => {
                // Truncate on a char boundary; text may be non-ASCII
                match content.char_indices().nth(20) {
                    Some((cut, _)) => write!(f, "\"{}...\"", &content[..cut]),
                    None => write!(f, "\"{}\"", content),
                }
            }
        }
    }
}

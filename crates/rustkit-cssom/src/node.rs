//! Tree nodes.

use crate::property::{Property, PropertyId};
use crate::selector::Selector;

/// Handle to a node inside a [`crate::Document`].
///
/// Handles stay valid for the lifetime of the document: removal detaches a
/// node from its parent but never deallocates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One CSS rule block: a selector, its declarations, and nested blocks.
#[derive(Debug, Clone)]
pub struct Node {
    /// The rule header.
    pub selector: Selector,
    pub(crate) properties: Vec<Property>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Create a detached node with no declarations or children.
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            properties: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// The declarations of this rule, in cascade order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The nested blocks of this rule, in rendering order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The owning node, or `None` for the root and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether some declaration matches `name` (and `value`, if given).
    ///
    /// This is the idempotence guard consulted before every handler-driven
    /// insertion.
    pub fn has_property(&self, name: &str, value: Option<&str>) -> bool {
        self.properties
            .iter()
            .any(|property| property.is(name, value))
    }

    /// Current index of the identified declaration, if still attached here.
    pub fn property_position(&self, id: PropertyId) -> Option<usize> {
        self.properties.iter().position(|property| property.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::Vendor;

    #[test]
    fn test_has_property() {
        let mut node = Node::new(Selector::new(".box"));
        node.properties
            .push(Property::new("border-radius", "4px").with_vendor(Some(Vendor::Webkit)));

        assert!(node.has_property("border-radius", None));
        assert!(node.has_property("border-radius", Some("4px")));
        assert!(!node.has_property("border-radius", Some("8px")));
        assert!(!node.has_property("box-shadow", None));
    }
}

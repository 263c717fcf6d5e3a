//! The document arena and tree operations.

use crate::node::{Node, NodeId};
use crate::property::{Property, PropertyFilter, PropertyId};
use crate::selector::{Selector, SelectorFilter};

/// A parsed CSS document.
///
/// All nodes live in an id-addressed arena owned by the document; parent and
/// child links are [`NodeId`] handles, so back-references never imply
/// ownership. Removal unlinks a node from its parent but keeps the slot
/// alive, which keeps every previously handed-out id valid.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    next_property: u32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the selector-less root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(Selector::none())],
            root: NodeId(0),
            next_property: 1,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Allocate a detached node and return its handle.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // =======================================================================
    // Tree mutation
    // =======================================================================

    /// Insert `child` into `parent`'s child list.
    ///
    /// Appends when `position` is `None`, otherwise inserts at that index and
    /// shifts later siblings right (out-of-range positions append). A child
    /// that is still attached elsewhere is detached first. There is no
    /// duplicate check; callers decide what belongs in the tree.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId, position: Option<usize>) {
        debug_assert!(parent != child);
        if self.node(child).parent.is_some() {
            self.remove_self(child);
        }
        self.node_mut(child).parent = Some(parent);

        let children = &mut self.node_mut(parent).children;
        match position {
            Some(at) if at < children.len() => children.insert(at, child),
            _ => children.push(child),
        }
    }

    /// Detach a node from its parent: locate it by identity in the parent's
    /// child list, remove it, and clear the back-reference. No-op for the
    /// root and for already-detached nodes.
    pub fn remove_self(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        if let Some(at) = self.child_position(parent, id) {
            self.node_mut(parent).children.remove(at);
        }
        self.node_mut(id).parent = None;
    }

    /// Current index of `child` in `parent`'s child list, by identity.
    pub fn child_position(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.node(parent)
            .children
            .iter()
            .position(|&candidate| candidate == child)
    }

    /// Deep-copy the subtree rooted at `id` into a detached clone.
    ///
    /// The clone carries copies of the selector, the declarations (with fresh
    /// ids) and the whole child subtree; its parent link is unset until the
    /// caller inserts it.
    pub fn clone_detached(&mut self, id: NodeId) -> NodeId {
        let source = self.node(id);
        let selector = source.selector.clone();
        let properties = source.properties.clone();
        let children = source.children.clone();

        let clone = self.alloc(Node::new(selector));
        for property in properties {
            self.add_property(clone, property, None);
        }
        for child in children {
            let child_clone = self.clone_detached(child);
            self.add_child(clone, child_clone, None);
        }
        clone
    }

    // =======================================================================
    // Declarations
    // =======================================================================

    /// Insert a declaration into `node`'s property list, assigning it a fresh
    /// document-unique id. Positional semantics match [`Self::add_child`].
    pub fn add_property(
        &mut self,
        node: NodeId,
        mut property: Property,
        position: Option<usize>,
    ) -> PropertyId {
        let id = PropertyId(self.next_property);
        self.next_property += 1;
        property.id = id;

        let properties = &mut self.node_mut(node).properties;
        match position {
            Some(at) if at < properties.len() => properties.insert(at, property),
            _ => properties.push(property),
        }
        id
    }

    /// Borrow a declaration by identity.
    pub fn property(&self, node: NodeId, id: PropertyId) -> Option<&Property> {
        let at = self.node(node).property_position(id)?;
        self.node(node).properties.get(at)
    }

    /// Mutably borrow a declaration by identity.
    pub fn property_mut(&mut self, node: NodeId, id: PropertyId) -> Option<&mut Property> {
        let at = self.node(node).property_position(id)?;
        self.node_mut(node).properties.get_mut(at)
    }

    /// Drop every declaration of `node` that fails the predicate.
    pub fn retain_properties(&mut self, node: NodeId, keep: impl FnMut(&Property) -> bool) {
        self.node_mut(node).properties.retain(keep);
    }

    /// The declarations of `node` matching `filter`.
    pub fn properties_where(&self, node: NodeId, filter: PropertyFilter<'_>) -> Vec<&Property> {
        self.node(node)
            .properties
            .iter()
            .filter(|property| filter.matches(property))
            .collect()
    }

    /// The children of `node` whose selector matches `filter`.
    pub fn children_where(&self, node: NodeId, filter: SelectorFilter<'_>) -> Vec<NodeId> {
        self.node(node)
            .children
            .iter()
            .copied()
            .filter(|&child| filter.matches(&self.node(child).selector))
            .collect()
    }

    // =======================================================================
    // Traversal
    // =======================================================================

    /// Pre-order walk from `from`, carrying a caller-controlled context.
    ///
    /// The visitor runs on `from` first and may mutate the context; each
    /// child branch then receives its own clone of it, so context changes
    /// made under one child are invisible to its siblings.
    ///
    /// The walk is mutation-safe: after each child's subtree returns, the
    /// cursor re-locates that child by identity. Siblings the visitor
    /// inserted before the cursor (clone-before-original handlers) are
    /// skipped, siblings appended after it are visited in this same pass,
    /// and a child that removed itself simply yields the cursor to its
    /// successor.
    pub fn walk<C, F>(&mut self, from: NodeId, ctx: &mut C, visitor: &mut F)
    where
        C: Clone,
        F: FnMut(&mut Document, NodeId, &mut C),
    {
        visitor(self, from, ctx);

        let mut cursor = 0;
        loop {
            let child = match self.node(from).children.get(cursor) {
                Some(&child) => child,
                None => break,
            };
            let mut branch = ctx.clone();
            self.walk(child, &mut branch, visitor);

            cursor = match self.child_position(from, child) {
                Some(at) => at + 1,
                None => cursor,
            };
        }
    }
}

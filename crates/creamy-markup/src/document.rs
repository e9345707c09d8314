//! Arena document: navigation and in-place mutation.
//!
//! Nodes are never freed. Removing a node detaches it from its parent; the
//! arena slot stays allocated until the document is dropped.

use crate::types::{Element, Node, NodeId, NodeKind};

/// A parsed markup fragment.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only the fragment root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Fragment,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The fragment root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The element stored at `id`, if the node is an element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[id.0].kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Whether the node is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root()
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The next sibling that is an element, skipping text nodes.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|&s| s == id)?;
        siblings[position + 1..]
            .iter()
            .copied()
            .find(|&s| self.element(s).is_some())
    }

    /// Remove a node (and its subtree) from its parent.
    ///
    /// Detaching the root or an already detached node does nothing.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Replace `id` with copies of the top-level nodes of `fragment`.
    ///
    /// Returns how many nodes now stand where `id` was. A node without a
    /// parent cannot be replaced and yields 0.
    pub fn replace_with_fragment(&mut self, id: NodeId, fragment: &Document) -> usize {
        let Some(parent) = self.parent(id) else {
            return 0;
        };
        let Some(position) = self.children(parent).iter().position(|&c| c == id) else {
            return 0;
        };

        let imported: Vec<NodeId> = fragment
            .children(fragment.root())
            .iter()
            .map(|&child| self.import(fragment, child, parent))
            .collect();
        let count = imported.len();

        self.nodes[id.0].parent = None;
        self.nodes[parent.0]
            .children
            .splice(position..=position, imported);
        count
    }

    /// Deep-copy the subtree at `id` into a fresh document.
    ///
    /// The copy becomes the only top-level node of the new document.
    pub fn extract(&self, id: NodeId) -> Document {
        let mut document = Document::new();
        let root = document.root();
        let copy = document.import(self, id, root);
        document.nodes[root.0].children.push(copy);
        document
    }

    /// All nodes under `id` (including `id`) in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    /// Copy `source_id` from `source` (recursively) under `parent`.
    ///
    /// The copy is registered in the arena but not yet linked into the
    /// parent's child list; callers do that.
    fn import(&mut self, source: &Document, source_id: NodeId, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind: source.kind(source_id).clone(),
            parent: Some(parent),
            children: Vec::new(),
        });
        let children: Vec<NodeId> = source
            .children(source_id)
            .iter()
            .map(|&child| self.import(source, child, id))
            .collect();
        self.nodes[id.0].children = children;
        id
    }
}

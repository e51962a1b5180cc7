//! Immutable element-tree snapshot.
//!
//! The scanner never walks live markup. A page is parsed once into a
//! `PageTree` arena and all heuristics run against that snapshot, so
//! unit tests can build trees from small HTML literals with no rendering
//! environment.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Handle to a node in a [`PageTree`]. Ids are assigned in document
/// order, so sorting or iterating by id matches element order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct NodeData {
    tag: String,
    class_attr: String,
    id_attr: String,
    own_text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena snapshot of a page's element tree.
#[derive(Debug, Default)]
pub struct PageTree {
    nodes: Vec<NodeData>,
}

impl PageTree {
    /// Parse raw HTML into a snapshot.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let mut tree = PageTree { nodes: Vec::new() };
        tree.add_element(document.root_element(), None);
        tree
    }

    fn add_element(&mut self, element: ElementRef<'_>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let value = element.value();
        self.nodes.push(NodeData {
            tag: value.name().to_ascii_lowercase(),
            class_attr: value.attr("class").unwrap_or("").to_string(),
            id_attr: value.attr("id").unwrap_or("").to_string(),
            own_text: String::new(),
            parent,
            children: Vec::new(),
        });

        let mut text_parts: Vec<&str> = Vec::new();
        let mut child_ids: Vec<NodeId> = Vec::new();
        for child in element.children() {
            match child.value() {
                Node::Text(text) => {
                    let trimmed = text.text.trim();
                    if !trimmed.is_empty() {
                        text_parts.push(trimmed);
                    }
                }
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        child_ids.push(self.add_element(child_element, Some(id)));
                    }
                }
                _ => {}
            }
        }
        self.nodes[id.0].own_text = text_parts.join(" ");
        self.nodes[id.0].children = child_ids;
        id
    }

    /// All node ids in document order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Lowercased tag name.
    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Whether the node's `class` or `id` attribute contains the given
    /// substring. Case-sensitive; callers pass the spellings they accept.
    pub fn attr_marked(&self, id: NodeId, needle: &str) -> bool {
        let node = &self.nodes[id.0];
        node.class_attr.contains(needle) || node.id_attr.contains(needle)
    }

    /// Trimmed text of the node's entire subtree, whitespace-joined.
    pub fn text(&self, id: NodeId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, id: NodeId, parts: &mut Vec<&'a str>) {
        let node = &self.nodes[id.0];
        if !node.own_text.is_empty() {
            parts.push(&node.own_text);
        }
        for child in &node.children {
            self.collect_text(*child, parts);
        }
    }

    /// Strict descendants of a node in document order. The node itself
    /// is excluded, matching subtree-query semantics.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.push_descendants(id, &mut out);
        out
    }

    fn push_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            out.push(*child);
            self.push_descendants(*child, out);
        }
    }
}

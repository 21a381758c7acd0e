//! Arena-backed document tree.
//!
//! Nodes live in a flat `Vec` owned by [`Document`] and refer to each other by
//! index, so parent links are plain ids rather than shared pointers. Traversal
//! goes through the borrowed [`Node`] handle.

use std::ptr;

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.into(),
            attrs,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whitespace-separated tokens of the `class` attribute; empty when absent.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// An empty document holding only its root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn root(&self) -> Node<'_> {
        self.node(self.root_id())
    }

    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { doc: self, id }
    }

    /// Number of nodes below the document root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        self.append(parent, NodeKind::Element(ElementData::new(tag, attrs)))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.append(parent, NodeKind::Text(text.to_string()))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of one node in a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.doc.nodes[self.id.0].kind
    }

    pub fn element(&self) -> Option<&'a ElementData> {
        match self.kind() {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.element().map(|e| e.tag.as_str())
    }

    /// Literal value of a text node.
    pub fn text(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.doc.nodes[self.id.0].parent.map(|id| self.doc.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + use<'a> {
        let doc = self.doc;
        doc.nodes[self.id.0].children.iter().map(move |&id| doc.node(id))
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.children().next()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_links_parent_and_children() {
        let mut doc = Document::new();
        let root = doc.root_id();
        let div = doc.append_element(root, "div", &[("class", "a b")]);
        let text = doc.append_text(div, "hello");

        let div_node = doc.node(div);
        assert_eq!(div_node.tag_name(), Some("div"));
        assert_eq!(div_node.parent(), Some(doc.root()));
        assert_eq!(div_node.first_child().map(|n| n.id()), Some(text));
        assert_eq!(doc.node(text).text(), Some("hello"));
        assert!(doc.root().parent().is_none());
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_fresh_document_is_empty() {
        let doc = Document::new();
        assert_eq!(doc.len(), 0);
        assert!(doc.is_empty());
        assert!(doc.root().first_child().is_none());
    }

    #[test]
    fn test_classes_of_element_without_class_attribute() {
        let data = ElementData::new("span", vec![("id".into(), "x".into())]);
        assert_eq!(data.classes().count(), 0);
        assert_eq!(data.attr("id"), Some("x"));
    }

    #[test]
    fn test_classes_split_on_any_whitespace() {
        let data = ElementData::new("div", vec![("class".into(), " a\tb\n c ".into())]);
        assert_eq!(data.classes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}

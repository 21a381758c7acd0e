use crate::dom::node::{Node, NodeKind};

/// Concatenated value of every text node under `node`, in document order.
/// Nothing is inserted between adjacent nodes and nothing is trimmed.
pub fn text_content(node: Node<'_>) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: Node<'_>, out: &mut String) {
    match node.kind() {
        NodeKind::Text(value) => out.push_str(value),
        NodeKind::Comment(_) => {}
        NodeKind::Document | NodeKind::Element(_) => {
            for child in node.children() {
                push_text(child, out);
            }
        }
    }
}

/// Value of the direct text children of `node` only.
pub fn own_text(node: Node<'_>) -> String {
    node.children().filter_map(|child| child.text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::{Document, NodeKind};

    #[test]
    fn test_concatenates_nested_text_without_separators() {
        let mut doc = Document::new();
        let root = doc.root_id();
        let li = doc.append_element(root, "li", &[]);
        doc.append_text(li, " hello");
        let b = doc.append_element(li, "b", &[]);
        doc.append_text(b, "big");
        doc.append(li, NodeKind::Comment("skip".into()));
        doc.append_text(li, "world ");

        assert_eq!(text_content(doc.node(li)), " hellobigworld ");
        assert_eq!(text_content(doc.root()), " hellobigworld ");
        assert_eq!(own_text(doc.node(li)), " helloworld ");
    }

    #[test]
    fn test_empty_element_has_empty_text() {
        let mut doc = Document::new();
        let root = doc.root_id();
        let ul = doc.append_element(root, "ul", &[]);
        assert_eq!(text_content(doc.node(ul)), "");
        assert_eq!(own_text(doc.node(ul)), "");
    }
}

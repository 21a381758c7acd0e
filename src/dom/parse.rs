use kuchiki::NodeData;
use kuchiki::traits::TendrilSink;
use tracing::instrument;

use crate::dom::node::{Document, ElementData, NodeId, NodeKind};

/// Parse an HTML page with html5ever and copy the result into a [`Document`].
///
/// Doctypes and processing instructions are dropped; template contents are
/// not part of the child list, same as in the browser DOM. Attributes come
/// out sorted by name rather than in source order, since kuchiki keeps them
/// in a `BTreeMap`. Lookups go through `attr` and `classes`, which do not
/// care about order.
#[instrument(skip_all, fields(bytes = html.len()))]
pub fn parse_html(html: &str) -> Document {
    let parsed = kuchiki::parse_html().one(html);
    let mut doc = Document::new();
    let root = doc.root_id();
    copy_children(&parsed, &mut doc, root);
    doc
}

fn copy_children(src: &kuchiki::NodeRef, doc: &mut Document, parent: NodeId) {
    for child in src.children() {
        match child.data() {
            NodeData::Element(el) => {
                let attrs = el
                    .attributes
                    .borrow()
                    .map
                    .iter()
                    .map(|(name, attr)| (name.local.to_string(), attr.value.clone()))
                    .collect();
                let id = doc.append(
                    parent,
                    NodeKind::Element(ElementData::new(el.name.local.to_string(), attrs)),
                );
                copy_children(&child, doc, id);
            }
            NodeData::Text(text) => {
                doc.append(parent, NodeKind::Text(text.borrow().clone()));
            }
            NodeData::Comment(text) => {
                doc.append(parent, NodeKind::Comment(text.borrow().clone()));
            }
            NodeData::Document(_) | NodeData::DocumentFragment => {
                copy_children(&child, doc, parent);
            }
            NodeData::Doctype(_) | NodeData::ProcessingInstruction(_) => {}
        }
    }
}

use crate::dom::node::Node;

/// All elements under `root` (inclusive) named `tag` whose class list
/// contains every entry of `classes`, in document order.
///
/// Matches nested inside other matches are reported too.
pub fn find_by_tag_and_classes<'a>(root: Node<'a>, tag: &str, classes: &[&str]) -> Vec<Node<'a>> {
    let mut found = Vec::new();
    collect(root, &mut found, &|node: Node<'a>| {
        node.element().is_some_and(|el| {
            el.tag == tag && classes.iter().all(|cls| el.classes().any(|c| c == *cls))
        })
    });
    found
}

/// All elements under `root` (inclusive) named `tag`, in document order.
pub fn find_by_tag<'a>(root: Node<'a>, tag: &str) -> Vec<Node<'a>> {
    let mut found = Vec::new();
    collect(root, &mut found, &|node: Node<'a>| node.tag_name() == Some(tag));
    found
}

fn collect<'a>(node: Node<'a>, found: &mut Vec<Node<'a>>, matches: &dyn Fn(Node<'a>) -> bool) {
    if matches(node) {
        found.push(node);
    }
    for child in node.children() {
        collect(child, found, matches);
    }
}

use tracing::debug;

use crate::dom::{Node, find_by_tag, find_by_tag_and_classes, own_text, text_content};
use crate::lookup::session::Session;

pub const CONTAINER_CLASSES: [&str; 3] = ["content-wrp", "dict-container", "opened"];
pub const GROUP_CLASSES: [&str; 1] = ["trans-container"];
pub const PHONETIC_CLASSES: [&str; 1] = ["phonetic"];
pub const LINK_CLASSES: [&str; 1] = ["clickable"];

pub const PRONOUNCE_PROMPT: &str = "回车可听发音";

/// Walk the opened dictionary panels of a web-dictionary page and add a row
/// for every phonetic line, list item and clickable link found.
pub fn extract_from_page(session: &mut Session, root: Node<'_>) {
    for container in find_by_tag_and_classes(root, "div", &CONTAINER_CLASSES) {
        extract_container(session, container);
    }
}

fn extract_container(session: &mut Session, container: Node<'_>) {
    let word = session.word().to_string();

    let groups = find_by_tag_and_classes(container, "div", &GROUP_CLASSES);
    debug!(groups = groups.len(), "dictionary container");
    for group in groups {
        let phonetics = phonetic_line(group);
        if !phonetics.is_empty() {
            session.add_result(&phonetics, PRONOUNCE_PROMPT, &word, &word, true);
        }
    }

    for list in find_by_tag(container, "ul") {
        let items = find_by_tag(list, "li");
        let links = find_by_tag_and_classes(list, "a", &LINK_CLASSES);
        debug!(items = items.len(), links = links.len(), "translation list");

        for node in items.into_iter().chain(links) {
            let text = text_content(node);
            let text = trim_ascii(&text);
            if !text.is_empty() {
                session.add_result(text, &word, &word, &word, true);
            }
        }
    }
}

/// `"{label} {phonetic}"` for every phonetic span in the group, joined by `"; "`.
fn phonetic_line(group: Node<'_>) -> String {
    find_by_tag_and_classes(group, "span", &PHONETIC_CLASSES)
        .into_iter()
        .map(|span| format!("{} {}", phonetic_label(span), trim_ascii(&own_text(span))))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Leading text of the span's parent, e.g. the "英" in `英<span>[ˈtest]</span>`.
fn phonetic_label(span: Node<'_>) -> String {
    span.parent()
        .and_then(|parent| parent.first_child())
        .and_then(|first| first.text())
        .map(|label| trim_ascii(label).to_string())
        .unwrap_or_default()
}

/// Page text may still be one char per byte, where 0x85 and 0xA0 are UTF-8
/// continuation bytes rather than spaces.
fn trim_ascii(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace())
}

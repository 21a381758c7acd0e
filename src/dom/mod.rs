pub mod matcher;
pub mod node;
pub mod parse;
pub mod text;

pub use matcher::{find_by_tag, find_by_tag_and_classes};
pub use node::{Document, ElementData, Node, NodeId, NodeKind};
pub use parse::parse_html;
pub use text::{own_text, text_content};

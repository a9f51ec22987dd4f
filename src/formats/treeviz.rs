//! Treeviz formatter for parse trees
//!
//! One line per node, nesting encoded as two spaces of indentation per level:
//!
//! ```text
//! <b>
//!   "x"
//!   <i>
//!     "y"
//!   &gt; '>'
//! <br>
//! ```
//!
//! Text is truncated to 30 characters.

use crate::ast::MarkupNode;

const MAX_TEXT_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(nodes: &[MarkupNode]) -> String {
    let mut result = String::new();
    for node in nodes {
        write_node(&mut result, node, 0);
    }
    result
}

fn write_node(out: &mut String, node: &MarkupNode, depth: usize) {
    out.push_str(&"  ".repeat(depth));
    match node {
        MarkupNode::Text(text) => {
            out.push_str(&format!("{:?}", truncate(text, MAX_TEXT_CHARS)));
        }
        MarkupNode::Entity(entity) => match entity.resolve() {
            Some(ch) => out.push_str(&format!("{} {:?}", entity, ch)),
            None => out.push_str(&entity.to_string()),
        },
        MarkupNode::Element {
            tag, attributes, ..
        } => {
            out.push('<');
            out.push_str(tag.name());
            for (key, value) in attributes {
                out.push_str(&format!(" {}={:?}", key, value));
            }
            out.push('>');
        }
    }
    out.push('\n');

    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

//! Style transform
//!
//! Walks a parse tree depth-first and flattens it into [`Fragment`]s. Each
//! element first transforms its children, then decorates every resulting
//! fragment with its own style (see [`style`]). Because decoration only fills
//! attributes that are still unset, the innermost element wins.
//!
//! Adjacent text and entity siblings are merged into one fragment, and a
//! `<br>` is glued onto the text run right before it. Merging never crosses an
//! element boundary: after a closed element or a line break, the next text
//! starts a new fragment.

pub mod style;

use crate::ast::{Fragment, MarkupNode};
use crate::theme::Theme;

/// Converts parse trees into flat fragment lists.
#[derive(Debug, Clone)]
pub struct Transform {
    theme: Theme,
    merge_adjacent_text: bool,
}

impl Transform {
    /// Create a transform; without a theme the built-in defaults apply.
    pub fn new(theme: Option<Theme>) -> Self {
        Transform {
            theme: theme.unwrap_or_default(),
            merge_adjacent_text: true,
        }
    }

    /// Enable or disable merging of adjacent text fragments (enabled by default).
    pub fn with_merge_adjacent_text(mut self, merge: bool) -> Self {
        self.merge_adjacent_text = merge;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Transform a sequence of sibling nodes into fragments.
    pub fn apply(&self, nodes: &[MarkupNode]) -> Vec<Fragment> {
        let mut fragments: Vec<Fragment> = Vec::new();
        let mut previous_fragment_is_text = false;

        for node in nodes {
            match node {
                MarkupNode::Text(_) | MarkupNode::Entity(_) => {
                    // Parsed trees never hold unresolvable entities; hand-built
                    // ones keep the reference as written.
                    let text = match node {
                        MarkupNode::Entity(entity) => entity
                            .resolve()
                            .map(String::from)
                            .unwrap_or_else(|| entity.to_string()),
                        _ => node.literal().unwrap_or_default(),
                    };
                    if self.merge_adjacent_text && previous_fragment_is_text {
                        self.append_to_last(&mut fragments, &text);
                    } else {
                        fragments.push(Fragment::text(text));
                    }
                    previous_fragment_is_text = true;
                }
                MarkupNode::Element { .. } if node.is_line_break() => {
                    if self.merge_adjacent_text && previous_fragment_is_text {
                        self.append_to_last(&mut fragments, "\n");
                    } else {
                        fragments.push(Fragment::text("\n"));
                    }
                    previous_fragment_is_text = false;
                }
                MarkupNode::Element {
                    tag,
                    attributes,
                    children,
                } => {
                    let mut decorated = self.apply(children);
                    for fragment in &mut decorated {
                        style::decorate(fragment, tag, attributes, &self.theme);
                    }
                    fragments.extend(decorated);
                    previous_fragment_is_text = false;
                }
            }
        }

        fragments
    }

    fn append_to_last(&self, fragments: &mut Vec<Fragment>, text: &str) {
        match fragments.pop() {
            Some(mut last) => {
                last.text.push_str(text);
                fragments.push(last);
            }
            None => fragments.push(Fragment::text(text)),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(None)
    }
}

//! Data model for formatted text
//!
//! Two shapes live here:
//! - [`MarkupNode`]: the parse tree produced by the grammar parser. A tree is a
//!   plain `Vec<MarkupNode>` of top-level nodes, there is no root wrapper.
//! - [`Fragment`]: the flat, render-ready unit produced by the style
//!   transform. A fragment list is what the layout engine consumes.

mod fragment;
mod nodes;

pub use fragment::{Color, Fragment, TextStyle};
pub use nodes::{Attributes, EntityRef, MarkupNode, Tag};

//! # fmtext
//!
//! Parser and style transform for inline formatted-text markup.
//!
//! Markup such as `<b>bold</b> &amp; <color rgb="#FF0000">red</color>` is
//! parsed into a tree of [`ast::MarkupNode`]s and flattened into
//! [`ast::Fragment`]s: runs of text that share one set of style attributes,
//! ready to hand to a text layout engine.
//!
//! Most callers only need [`pipeline::Formatter`]:
//!
//! ```text
//! let formatter = Formatter::new(None);
//! let fragments = formatter.format("<b>x</b>", &FormatOptions::default());
//! ```
//!
//! Modules, leaves first:
//! - [`entities`]: named and numeric character references
//! - [`lexing`]: logos tokenizer
//! - [`parsing`]: chumsky grammar producing the parse tree
//! - [`transform`]: tree to fragment list, with per-tag style rules
//! - [`theme`]: monospace and link defaults, loadable from TOML
//! - [`pipeline`]: the never-failing entry point
//! - [`formats`]: serializers for fragments and parse trees

pub mod ast;
pub mod entities;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod theme;
pub mod transform;

pub use ast::{Color, Fragment, MarkupNode, Tag, TextStyle};
pub use parsing::{parse_markup, ParseError};
pub use pipeline::{format, looks_like_markup, FormatOptions, Formatter};
pub use theme::Theme;
pub use transform::Transform;

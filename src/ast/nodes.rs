//! Parse tree nodes.

use std::collections::BTreeMap;
use std::fmt;

use crate::entities;

/// Attribute mapping of an element, keyed by attribute name.
///
/// Names are case sensitive. When a tag repeats an attribute the last
/// occurrence wins.
pub type Attributes = BTreeMap<String, String>;

/// A single node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Literal run of characters. Never empty.
    Text(String),
    /// Character reference such as `&amp;` or `&#x2014;`.
    Entity(EntityRef),
    /// Tag with its attributes and nested content.
    Element {
        tag: Tag,
        attributes: Attributes,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    /// Convenience constructor for text nodes.
    pub fn text(value: impl Into<String>) -> Self {
        MarkupNode::Text(value.into())
    }

    /// Convenience constructor for elements without attributes.
    pub fn element(tag: Tag, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element {
            tag,
            attributes: Attributes::new(),
            children,
        }
    }

    /// Returns the literal text this node contributes, when it is a leaf.
    ///
    /// Elements return `None`, and so do entities that do not resolve.
    pub fn literal(&self) -> Option<String> {
        match self {
            MarkupNode::Text(text) => Some(text.clone()),
            MarkupNode::Entity(entity) => entity.resolve().map(String::from),
            MarkupNode::Element { .. } => None,
        }
    }

    /// Nested nodes of an element (empty for leaves).
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Returns `true` for `<br>` elements.
    pub fn is_line_break(&self) -> bool {
        matches!(
            self,
            MarkupNode::Element {
                tag: Tag::LineBreak,
                ..
            }
        )
    }
}

/// Reference to a single character.
///
/// A reference is either named or numeric, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// `&name;`, resolved through the entity table.
    Named(String),
    /// `&#NNNN;` or `&#xHHHH;`.
    Codepoint(u32),
}

impl EntityRef {
    /// Decode this reference to its character.
    pub fn resolve(&self) -> Option<char> {
        match self {
            EntityRef::Named(name) => entities::lookup(name),
            EntityRef::Codepoint(codepoint) => entities::decode_codepoint(*codepoint),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Named(name) => write!(f, "&{};", name),
            EntityRef::Codepoint(codepoint) => write!(f, "&#{};", codepoint),
        }
    }
}

/// Tag vocabulary understood by the style transform.
///
/// Any other tag name parses into [`Tag::Other`] and acts as a transparent
/// container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Bold,
    Strong,
    Italic,
    Emphasis,
    Underline,
    Delete,
    Strikethrough,
    Subscript,
    Superscript,
    Code,
    Color,
    Font,
    Anchor,
    Link,
    Span,
    LineBreak,
    Other(String),
}

impl Tag {
    /// Map a tag name to its variant. Matching is case sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "b" => Tag::Bold,
            "strong" => Tag::Strong,
            "i" => Tag::Italic,
            "em" => Tag::Emphasis,
            "u" => Tag::Underline,
            "del" => Tag::Delete,
            "strikethrough" => Tag::Strikethrough,
            "sub" => Tag::Subscript,
            "sup" => Tag::Superscript,
            "code" => Tag::Code,
            "color" => Tag::Color,
            "font" => Tag::Font,
            "a" => Tag::Anchor,
            "link" => Tag::Link,
            "span" => Tag::Span,
            "br" => Tag::LineBreak,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The tag name as written in markup.
    pub fn name(&self) -> &str {
        match self {
            Tag::Bold => "b",
            Tag::Strong => "strong",
            Tag::Italic => "i",
            Tag::Emphasis => "em",
            Tag::Underline => "u",
            Tag::Delete => "del",
            Tag::Strikethrough => "strikethrough",
            Tag::Subscript => "sub",
            Tag::Superscript => "sup",
            Tag::Code => "code",
            Tag::Color => "color",
            Tag::Font => "font",
            Tag::Anchor => "a",
            Tag::Link => "link",
            Tag::Span => "span",
            Tag::LineBreak => "br",
            Tag::Other(name) => name,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

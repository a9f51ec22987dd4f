//! Token definitions for formatted text markup
//!
//! Tokens are produced by the logos derive macro. A whole opening tag,
//! attributes included, is a single token: the grammar only has to deal with
//! nesting, never with the inside of a tag.
//!
//! The logos rule for opening tags only finds the closing `>` (skipping over
//! quoted values). The tag body is then checked against `OPEN_TAG_REGEX`,
//! and a body that does not match makes the token invalid.

use logos::{Lexer, Logos};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Attributes, EntityRef};
use crate::entities;

static TAG_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</?([A-Za-z][A-Za-z0-9_-]*)").unwrap());

/// Full opening tag: name, attributes, optional whitespace and `/` before `>`.
static OPEN_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^<([A-Za-z][A-Za-z0-9_-]*)((?:\s+[A-Za-z_][A-Za-z0-9_:-]*\s*=\s*(?:"[^"]*"|'[^']*'))*)\s*(/?)>$"#,
    )
    .unwrap()
});

static ATTRIBUTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// All possible tokens in formatted text
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    // Opening tag, optionally self-closing: <b>, <a href="x" >, <br />
    #[regex(r#"<[A-Za-z][A-Za-z0-9_-]*([^<>"']|"[^"]*"|'[^']*')*>"#, lex_open_tag)]
    OpenTag(OpenTag),

    // Closing tag: </b>
    #[regex(r"</[A-Za-z][A-Za-z0-9_-]*\s*>", lex_close_tag)]
    CloseTag(String),

    // Character references: &amp; &#65; &#x41;
    #[regex(r"&[A-Za-z][A-Za-z0-9]*;", lex_named_entity)]
    #[regex(r"&#[0-9]+;", lex_numeric_entity)]
    #[regex(r"&#[xX][0-9A-Fa-f]+;", lex_numeric_entity)]
    Entity(EntityRef),

    // Text content (anything that cannot start a tag or an entity)
    #[regex(r"[^<&]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// Payload of an opening tag token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenTag {
    pub name: String,
    pub attributes: Attributes,
    /// Written as `<name ... />`.
    pub self_closing: bool,
}

impl OpenTag {
    /// Split a lexed opening tag into name, attributes and the self-closing
    /// flag. Returns `None` when the tag body is malformed.
    pub fn parse(slice: &str) -> Option<Self> {
        let captures = OPEN_TAG_REGEX.captures(slice)?;

        let attributes = ATTRIBUTE_REGEX
            .captures_iter(captures.get(2)?.as_str())
            .filter_map(|attribute| {
                let key = attribute.get(1)?.as_str().to_string();
                let value = attribute.get(2).or_else(|| attribute.get(3))?;
                Some((key, value.as_str().to_string()))
            })
            .collect();

        Some(OpenTag {
            name: captures.get(1)?.as_str().to_string(),
            attributes,
            self_closing: !captures.get(3)?.as_str().is_empty(),
        })
    }
}

fn lex_open_tag(lex: &mut Lexer<Token>) -> Option<OpenTag> {
    OpenTag::parse(lex.slice())
}

fn lex_close_tag(lex: &mut Lexer<Token>) -> Option<String> {
    let captures = TAG_NAME_REGEX.captures(lex.slice())?;
    Some(captures.get(1)?.as_str().to_string())
}

fn lex_named_entity(lex: &mut Lexer<Token>) -> Option<EntityRef> {
    let name = &lex.slice()[1..lex.slice().len() - 1];
    if entities::is_known(name) {
        Some(EntityRef::Named(name.to_string()))
    } else {
        None
    }
}

fn lex_numeric_entity(lex: &mut Lexer<Token>) -> Option<EntityRef> {
    let digits = &lex.slice()[2..lex.slice().len() - 1];
    entities::parse_numeric(digits).map(EntityRef::Codepoint)
}

//! Grammar for formatted text
//!
//! Grammar:
//! ```text
//! <markup>  = <node>* EOF
//! <node>    = TEXT | ENTITY | <void> | <element>
//! <void>    = OPEN_TAG(br) | OPEN_TAG(self-closing)
//! <element> = OPEN_TAG(name) <node>* CLOSE_TAG(name)
//! ```
//!
//! The grammar is not restricted to known tags; any tag name nests the same
//! way. A closing tag must match the innermost open element.

use chumsky::prelude::*;
use std::ops::Range;

use crate::ast::{MarkupNode, Tag};
use crate::lexing::{OpenTag, Token, TokenLocation};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenLocation>;

fn unexpected(span: Range<usize>, found: TokenLocation) -> ParserError {
    ParserError::expected_input_found(span, Vec::new(), Some(found))
}

/// `<br>` never has content, whether or not it is written `<br/>`.
fn is_void(open: &OpenTag) -> bool {
    open.self_closing || open.name == "br"
}

fn into_element(open: OpenTag, children: Vec<MarkupNode>) -> MarkupNode {
    MarkupNode::Element {
        tag: Tag::from_name(&open.name),
        attributes: open.attributes,
        children,
    }
}

/// Plain text run
fn text() -> impl Parser<TokenLocation, MarkupNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: TokenLocation| match token {
        (Token::Text(text), _) => Ok(MarkupNode::Text(text)),
        other => Err(unexpected(span, other)),
    })
}

/// Character reference
fn entity() -> impl Parser<TokenLocation, MarkupNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: TokenLocation| match token {
        (Token::Entity(entity), _) => Ok(MarkupNode::Entity(entity)),
        other => Err(unexpected(span, other)),
    })
}

/// Element without content: `<br>`, `<br/>`, `<anything/>`
fn void_element() -> impl Parser<TokenLocation, MarkupNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: TokenLocation| match token {
        (Token::OpenTag(open), _) if is_void(&open) => Ok(into_element(open, Vec::new())),
        other => Err(unexpected(span, other)),
    })
}

fn open_tag() -> impl Parser<TokenLocation, OpenTag, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: TokenLocation| match token {
        (Token::OpenTag(open), _) if !is_void(&open) => Ok(open),
        other => Err(unexpected(span, other)),
    })
}

fn close_tag() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: TokenLocation| match token {
        (Token::CloseTag(name), _) => Ok(name),
        other => Err(unexpected(span, other)),
    })
}

/// Parse a complete markup string into its top-level nodes.
pub(crate) fn markup() -> impl Parser<TokenLocation, Vec<MarkupNode>, Error = ParserError> {
    let node = recursive(|node| {
        let element = open_tag()
            .then(node.repeated())
            .then(close_tag())
            .try_map(
                |((open, children), close): ((OpenTag, Vec<MarkupNode>), String),
                 span: Range<usize>| {
                    if open.name == close {
                        Ok(into_element(open, children))
                    } else {
                        Err(ParserError::custom(
                            span,
                            format!("expected </{}> but found </{}>", open.name, close),
                        ))
                    }
                },
            );

        choice((text(), entity(), void_element(), element))
    });

    node.repeated().then_ignore(end())
}

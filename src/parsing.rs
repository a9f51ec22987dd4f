//! Parser for formatted text
//!
//! Parsing happens in two steps: [`crate::lexing::tokenize`] splits the input
//! into tags, entities and text runs, then the [`grammar`] nests them into a
//! tree. Either step can reject the input; there is no partial result and no
//! error recovery.

mod grammar;

use chumsky::error::SimpleReason;
use chumsky::Parser;
use std::fmt;
use std::ops::Range;

use crate::ast::MarkupNode;
use crate::lexing::{tokenize, LexError, TokenLocation};

/// Errors that can occur while parsing markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Part of the input is not a tag, entity or text run.
    InvalidToken(LexError),
    /// Tokens are valid but do not nest: unterminated element, stray or
    /// mismatched closing tag.
    Syntax {
        range: Range<usize>,
        message: String,
    },
}

impl ParseError {
    /// Byte range of the input the error points at.
    pub fn range(&self) -> Range<usize> {
        match self {
            ParseError::InvalidToken(err) => err.range.clone(),
            ParseError::Syntax { range, .. } => range.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken(err) => write!(f, "{}", err),
            ParseError::Syntax { range, message } => {
                write!(f, "Syntax error at {}..{}: {}", range.start, range.end, message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::InvalidToken(err)
    }
}

/// Parse markup into its top-level nodes.
pub fn parse_markup(source: &str) -> Result<Vec<MarkupNode>, ParseError> {
    let tokens = tokenize(source)?;

    grammar::markup()
        .parse(tokens.clone())
        .map_err(|errors| syntax_error(source, &tokens, errors))
}

/// Convert chumsky errors (token-indexed) into a single byte-ranged error.
fn syntax_error(
    source: &str,
    tokens: &[TokenLocation],
    errors: Vec<grammar::ParserError>,
) -> ParseError {
    let Some(error) = errors.into_iter().next() else {
        return ParseError::Syntax {
            range: 0..source.len(),
            message: "invalid markup".to_string(),
        };
    };

    let span = error.span();
    let range = match (tokens.get(span.start), tokens.get(span.end.saturating_sub(1))) {
        (Some((_, first)), Some((_, last))) if span.end > span.start => first.start..last.end,
        (Some((_, first)), _) => first.clone(),
        _ => source.len()..source.len(),
    };

    let message = match error.reason() {
        SimpleReason::Custom(message) => message.clone(),
        _ => match error.found() {
            Some((_, found)) => format!("unexpected {:?}", &source[found.clone()]),
            None => "unexpected end of input, an element is not closed".to_string(),
        },
    };

    ParseError::Syntax { range, message }
}

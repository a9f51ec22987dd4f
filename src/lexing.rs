//! Lexer for formatted text markup
//!
//! Tokenization is handled entirely by logos (see [`tokens`]). Unlike a
//! forgiving tokenizer, this one refuses to skip bytes it cannot classify: a
//! stray `<`, an unknown entity or a tag that never closes its `>` make the
//! whole input invalid, so the pipeline can fall back to literal text.

pub mod tokens;

use logos::Logos;
use std::fmt;
use std::ops::Range;

pub use tokens::{OpenTag, Token};

/// Token paired with its byte range in the source.
pub type TokenLocation = (Token, Range<usize>);

/// Error raised when part of the input is not a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Byte range of the offending input.
    pub range: Range<usize>,
    /// The offending input itself.
    pub snippet: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid markup {:?} at {}..{}",
            self.snippet, self.range.start, self.range.end
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize source text, returning tokens with their byte ranges.
///
/// Stops at the first invalid token.
pub fn tokenize(source: &str) -> Result<Vec<TokenLocation>, LexError> {
    let mut tokens = Vec::new();

    for (result, range) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push((token, range)),
            Err(()) => {
                return Err(LexError {
                    snippet: source.get(range.clone()).unwrap_or_default().to_string(),
                    range,
                });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized markup");
    Ok(tokens)
}

//! High-level formatting pipeline
//!
//! [`Formatter`] is the entry point most callers want: it turns a markup
//! string into fragments and never fails. Strings without `<` or `&` skip the
//! parser entirely. Strings that do not parse are logged and returned as a
//! single literal fragment.
//!
//! ```text
//! markup -> [normalize] -> sniff -> parse -> transform -> fragments
//!                            \________ fallback _______/
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Fragment, MarkupNode};
use crate::parsing::{parse_markup, ParseError};
use crate::theme::Theme;
use crate::transform::Transform;

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Returns `true` if `source` may contain tags or entities.
pub fn looks_like_markup(source: &str) -> bool {
    source.contains(|ch: char| ch == '<' || ch == '&')
}

/// Collapse every whitespace run, newlines included, into a single space.
pub fn normalize_whitespace(source: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(source, " ").into_owned()
}

/// Per-call options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Collapse whitespace before parsing.
    pub normalize: bool,
}

impl FormatOptions {
    pub fn normalized() -> Self {
        FormatOptions { normalize: true }
    }
}

/// Turns markup strings into render-ready fragments.
///
/// Holds only immutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    transform: Transform,
}

impl Formatter {
    /// Create a formatter; without a theme the built-in defaults apply.
    pub fn new(theme: Option<Theme>) -> Self {
        Formatter {
            transform: Transform::new(theme),
        }
    }

    /// Create a formatter around a preconfigured transform.
    pub fn with_transform(transform: Transform) -> Self {
        Formatter { transform }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Format `markup` into fragments, falling back to literal text when it
    /// does not parse.
    pub fn format(&self, markup: &str, options: &FormatOptions) -> Vec<Fragment> {
        let source = prepare(markup, options);

        if !looks_like_markup(&source) {
            tracing::trace!("no markup found, skipping parser");
            return vec![Fragment::text(source)];
        }

        match parse_markup(&source) {
            Ok(nodes) => {
                let fragments = self.transform.apply(&nodes);
                tracing::debug!(
                    nodes = nodes.len(),
                    fragments = fragments.len(),
                    "formatted markup"
                );
                fragments
            }
            Err(error) => {
                tracing::warn!(input = %source, %error, "failed to parse formatted text");
                vec![Fragment::text(source)]
            }
        }
    }

    /// Parse `markup` without transforming it.
    ///
    /// Input without markup yields a single text node (or nothing, when
    /// empty) without running the parser.
    pub fn parse(
        &self,
        markup: &str,
        options: &FormatOptions,
    ) -> Result<Vec<MarkupNode>, ParseError> {
        let source = prepare(markup, options);

        if !looks_like_markup(&source) {
            if source.is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![MarkupNode::Text(source)]);
        }

        parse_markup(&source)
    }
}

fn prepare(markup: &str, options: &FormatOptions) -> String {
    if options.normalize {
        normalize_whitespace(markup)
    } else {
        markup.to_string()
    }
}

/// Format `markup` with the default theme.
pub fn format(markup: &str) -> Vec<Fragment> {
    Formatter::default().format(markup, &FormatOptions::default())
}

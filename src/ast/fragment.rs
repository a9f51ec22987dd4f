//! Style fragments: the output of the transform.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Text decoration flags a fragment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Underline => "underline",
            TextStyle::Strikethrough => "strikethrough",
            TextStyle::Subscript => "subscript",
            TextStyle::Superscript => "superscript",
        };
        f.write_str(name)
    }
}

/// Fragment color, either a hex string (without `#`) or a CMYK tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Hex(String),
    Cmyk([i32; 4]),
}

impl Color {
    /// Hex color with any leading `#` removed.
    pub fn hex(value: &str) -> Self {
        Color::Hex(value.trim_start_matches('#').to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => write!(f, "#{}", hex),
            Color::Cmyk([c, m, y, k]) => write!(f, "cmyk({}, {}, {}, {})", c, m, y, k),
        }
    }
}

/// One run of text sharing a single set of style attributes.
///
/// Every attribute is optional; an absent attribute means "inherit whatever
/// the renderer uses by default". The transform sets each attribute at most
/// once, so the innermost element that sets it wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub styles: BTreeSet<TextStyle>,
}

impl Fragment {
    /// Unstyled fragment holding `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Fragment {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper adding a style flag.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.styles.insert(style);
        self
    }

    /// Builder-style helper setting the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns `true` when no style attribute is set.
    pub fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.font.is_none()
            && self.size.is_none()
            && self.character_spacing.is_none()
            && self.anchor.is_none()
            && self.link.is_none()
            && self.local.is_none()
            && self.styles.is_empty()
    }

    pub fn has_style(&self, style: TextStyle) -> bool {
        self.styles.contains(&style)
    }
}

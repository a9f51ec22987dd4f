//! Output formats
//!
//! Fragment lists serialize to `json`, `yaml` or `fragments` (a compact line
//! per fragment, handy for eyeballing) through the [`FormatRegistry`]. Parse
//! trees have their own [`to_treeviz_str`] view.

mod registry;
mod treeviz;

pub use registry::{FormatError, FormatRegistry, FragmentFormatter};
pub use treeviz::to_treeviz_str;

use crate::ast::Fragment;

/// Pretty-printed JSON array of fragments.
pub struct JsonFormatter;

impl FragmentFormatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, fragments: &[Fragment]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(fragments)
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Fragments as a JSON array"
    }
}

/// YAML sequence of fragments.
pub struct YamlFormatter;

impl FragmentFormatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, fragments: &[Fragment]) -> Result<String, FormatError> {
        serde_yaml::to_string(fragments).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Fragments as a YAML sequence"
    }
}

/// One line per fragment: the quoted text followed by its attributes.
pub struct FragmentListFormatter;

impl FragmentFormatter for FragmentListFormatter {
    fn name(&self) -> &'static str {
        "fragments"
    }

    fn serialize(&self, fragments: &[Fragment]) -> Result<String, FormatError> {
        let mut out = String::new();
        for fragment in fragments {
            out.push_str(&describe_fragment(fragment));
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &'static str {
        "One line per fragment with its attributes"
    }
}

/// Single-line description of a fragment, e.g. `"x" bold color=#FF0000`.
pub fn describe_fragment(fragment: &Fragment) -> String {
    let mut parts = vec![format!("{:?}", fragment.text)];
    parts.extend(fragment.styles.iter().map(|style| style.to_string()));
    if let Some(color) = &fragment.color {
        parts.push(format!("color={}", color));
    }
    if let Some(font) = &fragment.font {
        parts.push(format!("font={:?}", font));
    }
    if let Some(size) = fragment.size {
        parts.push(format!("size={}", size));
    }
    if let Some(spacing) = fragment.character_spacing {
        parts.push(format!("character_spacing={}", spacing));
    }
    if let Some(anchor) = &fragment.anchor {
        parts.push(format!("anchor={:?}", anchor));
    }
    if let Some(link) = &fragment.link {
        parts.push(format!("link={:?}", link));
    }
    if let Some(local) = &fragment.local {
        parts.push(format!("local={:?}", local));
    }
    parts.join(" ")
}

//! Named output formats for fragment lists

use crate::ast::Fragment;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown output format '{name}'"),
            FormatError::Serialization(msg) => write!(f, "Could not serialize fragments: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders a fragment list as text.
pub trait FragmentFormatter: Send + Sync {
    fn name(&self) -> &'static str;

    fn serialize(&self, fragments: &[Fragment]) -> Result<String, FormatError>;

    /// Shown by `--list-formats`.
    fn description(&self) -> &'static str;
}

/// Output formats keyed by name, iterated in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn FragmentFormatter>>,
}

impl FormatRegistry {
    /// Registry holding `json`, `yaml` and `fragments`.
    pub fn with_defaults() -> Self {
        let defaults: [Box<dyn FragmentFormatter>; 3] = [
            Box::new(super::JsonFormatter),
            Box::new(super::YamlFormatter),
            Box::new(super::FragmentListFormatter),
        ];
        let formatters = defaults
            .into_iter()
            .map(|formatter| (formatter.name(), formatter))
            .collect();
        FormatRegistry { formatters }
    }

    pub fn get(&self, name: &str) -> Option<&dyn FragmentFormatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, fragments: &[Fragment], format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::UnknownFormat(format.to_string()))?
            .serialize(fragments)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().map(|name| name.to_string()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TextStyle;

    #[test]
    fn test_default_formats_in_name_order() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["fragments", "json", "yaml"]);
        assert!(registry
            .get("fragments")
            .is_some_and(|f| !f.description().is_empty()));
    }

    #[test]
    fn test_serialize_by_name() {
        let registry = FormatRegistry::default();
        let fragments = vec![Fragment::text("x").with_style(TextStyle::Bold)];
        assert_eq!(
            registry.serialize(&fragments, "fragments").unwrap(),
            "\"x\" bold\n"
        );
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.serialize(&[], "html"),
            Err(FormatError::UnknownFormat("html".to_string()))
        );
    }
}

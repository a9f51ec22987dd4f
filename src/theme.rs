//! Theme binding
//!
//! A [`Theme`] supplies the defaults the style transform cannot read from the
//! markup itself: which font `<code>` uses, and which colors code and links
//! get. `defaults/theme.default.toml` is embedded so the built-in values and
//! the documented ones stay in sync. Applications layer their own files on top
//! of those defaults via [`ThemeLoader`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/theme.default.toml");

/// Font family used for `<code>` when no theme is given.
pub const DEFAULT_MONOSPACE_FONT_FAMILY: &str = "Courier";

/// Link color used when no theme is given.
pub const DEFAULT_LINK_FONT_COLOR: &str = "0000FF";

/// Style defaults injected into the transform.
///
/// Hex colors are stored without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub monospace_font_family: String,
    pub monospace_font_color: Option<String>,
    pub link_font_color: String,
}

impl Theme {
    pub fn new(
        monospace_font_family: impl Into<String>,
        monospace_font_color: Option<&str>,
        link_font_color: &str,
    ) -> Self {
        Theme {
            monospace_font_family: monospace_font_family.into(),
            monospace_font_color: monospace_font_color.map(strip_hash),
            link_font_color: strip_hash(link_font_color),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new(DEFAULT_MONOSPACE_FONT_FAMILY, None, DEFAULT_LINK_FONT_COLOR)
    }
}

fn strip_hash(color: &str) -> String {
    color.trim().trim_start_matches('#').to_string()
}

/// On-disk theme layout.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub code: CodeConfig,
    pub link: LinkConfig,
}

/// `[code]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeConfig {
    pub font_family: String,
    #[serde(default)]
    pub font_color: Option<String>,
}

/// `[link]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    pub font_color: String,
}

impl From<ThemeConfig> for Theme {
    fn from(config: ThemeConfig) -> Self {
        Theme::new(
            config.code.font_family,
            config.code.font_color.as_deref(),
            &config.link.font_color,
        )
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl ThemeLoader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a theme file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional theme file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer theme settings given as a TOML string.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override, e.g. `link.font_color`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting theme.
    pub fn build(self) -> Result<Theme, ConfigError> {
        let config: ThemeConfig = self.builder.build()?.try_deserialize()?;
        Ok(config.into())
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Theme, ConfigError> {
    ThemeLoader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_match_fallback() {
        let theme = load_defaults().expect("defaults to deserialize");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn supports_overrides() {
        let theme = ThemeLoader::new()
            .set_override("link.font_color", "#336699")
            .expect("override to apply")
            .build()
            .expect("theme to build");
        assert_eq!(theme.link_font_color, "336699");
        assert_eq!(theme.monospace_font_family, DEFAULT_MONOSPACE_FONT_FAMILY);
    }

    #[test]
    fn layers_toml_sources() {
        let theme = ThemeLoader::new()
            .with_toml("[code]\nfont_family = \"M+ 1mn\"\nfont_color = \"#B12146\"\n")
            .build()
            .expect("theme to build");
        assert_eq!(theme.monospace_font_family, "M+ 1mn");
        assert_eq!(theme.monospace_font_color.as_deref(), Some("B12146"));
        assert_eq!(theme.link_font_color, DEFAULT_LINK_FONT_COLOR);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let theme = ThemeLoader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("theme to build");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn missing_required_file_errors() {
        assert!(ThemeLoader::new()
            .with_file("does/not/exist.toml")
            .build()
            .is_err());
    }
}

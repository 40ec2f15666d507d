//! Configuration for mdtty.
//!
//! Values are resolved from built-in defaults, then an optional TOML file,
//! then `MDTTY_*` environment variables. Command-line flags are applied on top
//! by the binary through the generated setters.

mod error;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Environment, File, FileFormat};
use derive_setters::Setters;
use mdtty_markdown_stream::{BlockDetector, RenderOptions, StreamMode};
use serde::{Deserialize, Deserializer};
use tracing::debug;

pub use error::{ConfigError, Result};

const ENV_PREFIX: &str = "MDTTY";
const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Setters)]
#[serde(default)]
#[setters(strip_option)]
pub struct MdttyConfig {
    /// Rendering mode at startup.
    #[serde(deserialize_with = "deserialize_mode")]
    pub mode: StreamMode,
    /// Show the language tag on code blocks.
    pub show_language: bool,
    /// Fixed render width. `None` follows the terminal.
    pub width: Option<usize>,
    /// Emit open code fences early once their body grows past this size.
    pub max_fence_bytes: Option<usize>,
}

impl Default for MdttyConfig {
    fn default() -> Self {
        Self {
            mode: StreamMode::Ansi,
            show_language: true,
            width: None,
            max_fence_bytes: None,
        }
    }
}

fn deserialize_mode<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<StreamMode, D::Error> {
    let value = String::deserialize(deserializer)?;
    StreamMode::from_str(value.trim()).map_err(|_| {
        serde::de::Error::custom(format!(
            "unknown mode '{value}', expected one of: off, ansi, overlay"
        ))
    })
}

impl MdttyConfig {
    /// Default location of the config file, e.g. `~/.config/mdtty/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdtty").join("config.toml"))
    }

    /// Loads configuration. An explicit `path` must exist; the default path is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading config file");
                builder = builder
                    .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(path) = Self::default_path() {
                    builder = builder
                        .add_source(File::from(path).format(FileFormat::Toml).required(false));
                }
            }
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.width == Some(0) {
            return Err(ConfigError::InvalidWidth(0));
        }
        if self.max_fence_bytes == Some(0) {
            return Err(ConfigError::InvalidFenceLimit(0));
        }
        Ok(self)
    }

    /// Render options for a terminal currently `terminal_cols` wide. A
    /// configured width wins over the terminal's.
    pub fn render_options(&self, terminal_cols: Option<usize>) -> RenderOptions {
        RenderOptions::default()
            .show_language(self.show_language)
            .term_width(self.width.or(terminal_cols).unwrap_or(DEFAULT_WIDTH))
    }

    /// True when the render width should track terminal resizes.
    pub fn follows_terminal(&self) -> bool {
        self.width.is_none()
    }

    /// A detector configured with the fence limit, if any.
    pub fn detector(&self) -> BlockDetector {
        match self.max_fence_bytes {
            Some(limit) => BlockDetector::new().with_max_fence_bytes(limit),
            None => BlockDetector::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let fixture = config_file("mode = \"overlay\"\nshow_language = false\nwidth = 120\n");
        let actual = MdttyConfig::load(Some(fixture.path())).unwrap();
        let expected = MdttyConfig {
            mode: StreamMode::Overlay,
            show_language: false,
            width: Some(120),
            max_fence_bytes: None,
        };
        assert_eq!(actual, expected);
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        let fixture = config_file("max_fence_bytes = 65536\n");
        let actual = MdttyConfig::load(Some(fixture.path())).unwrap();
        let expected = MdttyConfig::default().max_fence_bytes(65536_usize);
        assert_eq!(actual, expected);
    }

    #[test]
    #[serial]
    fn test_mode_is_case_insensitive() {
        let fixture = config_file("mode = \"OFF\"\n");
        let actual = MdttyConfig::load(Some(fixture.path())).unwrap();
        assert_eq!(actual.mode, StreamMode::Off);
    }

    #[test]
    #[serial]
    fn test_unknown_mode_is_rejected() {
        let fixture = config_file("mode = \"fancy\"\n");
        let actual = MdttyConfig::load(Some(fixture.path()));
        assert!(matches!(actual, Err(ConfigError::Load(_))));
    }

    #[test]
    #[serial]
    fn test_zero_width_is_rejected() {
        let fixture = config_file("width = 0\n");
        let actual = MdttyConfig::load(Some(fixture.path()));
        assert!(matches!(actual, Err(ConfigError::InvalidWidth(0))));
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let actual = MdttyConfig::load(Some(&dir.path().join("absent.toml")));
        assert!(actual.is_err());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let fixture = config_file("mode = \"ansi\"\nwidth = 100\n");
        unsafe {
            std::env::set_var("MDTTY_MODE", "off");
            std::env::set_var("MDTTY_WIDTH", "60");
        }
        let actual = MdttyConfig::load(Some(fixture.path()));
        unsafe {
            std::env::remove_var("MDTTY_MODE");
            std::env::remove_var("MDTTY_WIDTH");
        }
        let actual = actual.unwrap();
        assert_eq!(actual.mode, StreamMode::Off);
        assert_eq!(actual.width, Some(60));
    }

    #[test]
    fn test_render_options_prefers_configured_width() {
        let fixture = MdttyConfig::default().width(42_usize).show_language(false);
        let actual = fixture.render_options(Some(200));
        let expected = RenderOptions { show_language: false, term_width: 42 };
        assert_eq!(actual, expected);
        assert!(!fixture.follows_terminal());
    }

    #[test]
    fn test_render_options_follows_terminal() {
        let fixture = MdttyConfig::default();
        assert_eq!(fixture.render_options(Some(132)).term_width, 132);
        assert_eq!(fixture.render_options(None).term_width, 80);
        assert!(fixture.follows_terminal());
    }
}

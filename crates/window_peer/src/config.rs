//! Window configuration
//!
//! Creation-time parameters for a peer-backed window, loadable from TOML or
//! RON files. The peer itself never reads configuration; backends consume it
//! when they create the toolkit window the peer will bind to.

use serde::{Deserialize, Serialize};

use crate::geometry::Rectangle;
use crate::toolkit::WindowLook;

/// Creation-time window parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title-bar text
    pub title: String,
    /// Initial left edge in pixels
    pub x: i32,
    /// Initial top edge in pixels
    pub y: i32,
    /// Initial width in pixels
    pub width: i32,
    /// Initial height in pixels
    pub height: i32,
    /// Whether the window gets a title bar and border
    pub decorated: bool,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Untitled"),
            x: 100,
            y: 100,
            width: 640,
            height: 480,
            decorated: true,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Initial bounds as a framework rectangle
    #[must_use]
    pub const fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }

    /// Border treatment implied by the decorated flag
    #[must_use]
    pub const fn look(&self) -> WindowLook {
        if self.decorated {
            WindowLook::Titled
        } else {
            WindowLook::NoBorder
        }
    }

    /// Load configuration from a TOML or RON file, chosen by extension
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a TOML or RON file, chosen by extension
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_decorated_and_resizable() {
        let config = WindowConfig::default();
        assert!(config.decorated);
        assert!(config.resizable);
        assert_eq!(config.look(), WindowLook::Titled);
        assert_eq!(config.bounds(), Rectangle::new(100, 100, 640, 480));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: WindowConfig = toml::from_str(
            r#"
            title = "Editor"
            width = 1024
            height = 768
            decorated = false
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Editor");
        assert_eq!(config.bounds(), Rectangle::new(100, 100, 1024, 768));
        assert_eq!(config.look(), WindowLook::NoBorder);
        assert!(config.resizable);
    }

    #[test]
    fn toml_round_trips() {
        let config = WindowConfig {
            title: String::from("Main"),
            x: 10,
            y: 20,
            width: 800,
            height: 600,
            decorated: true,
            resizable: false,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: WindowConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn ron_round_trips() {
        let config = WindowConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let parsed: WindowConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = WindowConfig::default().save_to_file("window.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}

//! Tutor configuration, read from TOML.
//!
//! ```toml
//! sounds = true
//! haptics = false
//! colorblind = true
//! seed = 42
//! ```
//!
//! Every key is optional. Configuration is read-only here; saving changed
//! settings is left to the host application.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options that shape how a training session reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Play click, correct, and wrong sounds.
    pub sounds: bool,

    /// Emit a haptic tap for every dot selection.
    pub haptics: bool,

    /// Draw an extra checkmark on marked dots so they do not rely on color.
    pub colorblind: bool,

    /// Render the braille card at a larger scale.
    pub upscale_card: bool,

    /// Fixed seed for letter picking. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            sounds: true,
            haptics: true,
            colorblind: false,
            upscale_card: false,
            seed: None,
        }
    }
}

impl TutorConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("loaded tutor config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TutorConfig::default();
        assert!(config.sounds);
        assert!(config.haptics);
        assert!(!config.colorblind);
        assert!(!config.upscale_card);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(TutorConfig::from_toml_str("").unwrap(), TutorConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = TutorConfig::from_toml_str("haptics = false\nseed = 42\n").unwrap();
        assert!(config.sounds);
        assert!(!config.haptics);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_document() {
        let err = TutorConfig::from_toml_str("sounds = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TutorConfig::load("/nonexistent/braille-buddy.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("braille-buddy.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "braille-tutor-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "colorblind = true\nupscale_card = true\n").unwrap();

        let config = TutorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(config.colorblind);
        assert!(config.upscale_card);
    }
}

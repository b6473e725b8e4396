use std::path::Path;

use crate::ai::DEFAULT_SEARCH_DEPTH;
use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub cols: usize,
    /// Plies of lookahead for the engine.
    pub search_depth: usize,
    /// Whether the human side moves first.
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            search_depth: DEFAULT_SEARCH_DEPTH,
            human_first: true,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("cols must be > 0".into()));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Validation("search_depth must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
        assert_eq!(config.search_depth, 2);
        assert!(config.human_first);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let config = GameConfig {
            search_depth: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: search_depth must be > 0"
        );
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 8\ncols = 9\nsearch_depth = 3\nhuman_first = false").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 9);
        assert_eq!(config.search_depth, 3);
        assert!(!config.human_first);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_depth = 4").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.search_depth, 4);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.cols, 7);
    }
}

//! User configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::calculator::DEFAULT_SIGNIFICANT_DIGITS;
use crate::error::{CalcError, Result};

/// Default cap on the number of digits in a single entry.
pub const DEFAULT_MAX_DIGITS: usize = 16;

/// Calculator settings. Every key is optional in the config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Digits accepted per entry before further digits are ignored.
    pub max_digits: usize,
    /// Significant digits kept after each computation (1..=17).
    pub significant_digits: usize,
    /// Record `v%` in the history line when percent is applied.
    pub percent_history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            percent_history: false,
        }
    }
}

impl Config {
    /// Path of the default config file, `<config dir>/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load the config from the default location, falling back to defaults
    /// when there is no config directory or no file.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the config from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CalcError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CalcError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text, clamping out-of-range values.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.significant_digits = self.significant_digits.clamp(1, 17);
        self.max_digits = self.max_digits.max(1);
        self
    }
}

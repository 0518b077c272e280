//! Runtime configuration.
//!
//! Every section is optional; a missing file section falls back to the
//! defaults, which reproduce the classic `B`/`P`/`X` output.

use crate::encoding::SymbolAlphabet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// Two symbols share an output character.
    #[error("output character {0:?} is assigned to more than one symbol")]
    DuplicateSymbol(char),
}

/// Full configuration file format.
///
/// ```toml
/// [output]
/// white = "B"
/// black = "P"
/// split = "X"
/// trailing_newline = true
///
/// [input]
/// prompts = true
///
/// [metrics]
/// enabled = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[output]` section.
    #[serde(default)]
    pub output: OutputConfig,
    /// `[input]` section.
    #[serde(default)]
    pub input: InputConfig,
    /// `[metrics]` section.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// How the encoding is written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Characters used for each symbol.
    #[serde(flatten)]
    pub alphabet: SymbolAlphabet,
    /// Terminate the printed encoding with a newline.
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            alphabet: SymbolAlphabet::default(),
            trailing_newline: true,
        }
    }
}

/// Manual entry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Print prompts before reading dimensions and pixels.
    pub prompts: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { prompts: true }
    }
}

/// Metrics reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Print Prometheus text exposition to stderr after encoding.
    pub enabled: bool,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(c) = self.output.alphabet.duplicate() {
            return Err(ConfigError::DuplicateSymbol(c));
        }
        Ok(())
    }
}

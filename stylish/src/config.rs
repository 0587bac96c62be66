//! Style configuration and `stylish.toml` parsing.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Column budget every fixed-width layout measures against.
pub const TARGET_WIDTH: usize = 70;

/// How the fill of a process-end marker is budgeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessEndBudget {
    /// Count every fixed character that is emitted, so the line is exactly the
    /// target width when the text fits.
    #[default]
    Emitted,
    /// Reserve the byte length of `<=`, the text and `[√]`, the way the
    /// original style guide tooling did. For ASCII text lines come out one
    /// column wider than the target.
    Legacy,
}

/// Layout settings shared by every renderer.
///
/// ```toml
/// width = 70
/// process_end_budget = "emitted"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Target line width in display columns.
    pub width: usize,
    pub process_end_budget: ProcessEndBudget,
}

impl StyleConfig {
    pub const DEFAULT: StyleConfig = StyleConfig {
        width: TARGET_WIDTH,
        process_end_budget: ProcessEndBudget::Emitted,
    };

    /// Creates a configuration with the style guide defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the process-end fill budget.
    pub fn with_process_end_budget(mut self, budget: ProcessEndBudget) -> Self {
        self.process_end_budget = budget;
        self
    }

    /// Rejects settings no layout can honor.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::InvalidWidth(self.width));
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StyleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StyleConfig = toml::from_str(&content).map_err(|error| Error::Toml {
            error,
            context: path.display().to_string(),
        })?;
        config.validate()?;
        debug!(
            path = %path.display(),
            width = config.width,
            budget = ?config.process_end_budget,
            "loaded style config"
        );
        Ok(config)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

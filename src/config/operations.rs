//! Config loading, validation, and flag layering.

use super::model::RunConfig;
use super::types::{OutputMedium, OutputShape};
use crate::cli::Cli;
use crate::error::{CellDiffError, Result};
use std::path::Path;

impl RunConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(RunConfig)` - Successfully loaded and validated config
    /// * `Err(CellDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CellDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: RunConfig = serde_yaml::from_str(yaml).map_err(|e| {
            CellDiffError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CellDiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Header names must be non-empty after trimming, so every labelled
    /// column descriptor reads `index:name`.
    pub fn validate(&self) -> Result<()> {
        if let Some(headers) = &self.headers {
            if let Some(pos) = headers.iter().position(|h| h.trim().is_empty()) {
                return Err(CellDiffError::UserError(format!(
                    "config validation failed: header name {} is empty",
                    pos + 1
                )));
            }
        }

        Ok(())
    }

    /// Layer explicitly given command-line flags over this config.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if cli.html {
            self.medium = OutputMedium::Html;
        }
        if cli.light {
            self.shape = OutputShape::List;
        }
        if let Some(lines) = cli.lines {
            self.line_limit = lines;
        }
        if let Some(font) = &cli.font {
            self.font_family = font.clone();
        }
        if !cli.header.is_empty() {
            self.headers = Some(cli.header.clone());
        }
        self.normalize();
    }

    /// An empty header list means no header mapping.
    fn normalize(&mut self) {
        if self.headers.as_ref().is_some_and(|h| h.is_empty()) {
            self.headers = None;
        }
    }

    /// Header names as a slice, if a mapping was supplied.
    pub fn header_names(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }
}

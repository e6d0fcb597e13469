//! Importer settings
//!
//! Loaded once from a JSON file and passed explicitly to the importer.
//! Keys use camelCase; anything missing takes its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};

/// Extension required of loadable scripts when none is configured
pub const DEFAULT_EXTENSION: &str = "php";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Also write each error message to the output sink as it is found
    pub echo_errors: bool,
    /// Wrap echoed messages in HTML paragraphs
    pub html_errors: bool,
    /// Required script extension, without the leading dot
    pub extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            echo_errors: false,
            html_errors: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut settings: Settings =
            serde_json::from_str(&content).map_err(|source| ImportError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        settings.extension = normalize_extension(&settings.extension);
        Ok(settings)
    }

    /// Parse settings from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(content)?;
        settings.extension = normalize_extension(&settings.extension);
        Ok(settings)
    }

    pub fn with_echo(mut self, echo_errors: bool) -> Self {
        self.echo_errors = echo_errors;
        self
    }

    pub fn with_html(mut self, html_errors: bool) -> Self {
        self.html_errors = html_errors;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = normalize_extension(extension);
        self
    }
}

/// `".php"`, `"php"` and `""` all mean the same thing to the resolver
fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        trimmed.to_string()
    }
}

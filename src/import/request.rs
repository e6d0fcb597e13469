//! Import requests coming from outside Rust (JSON files, stdin)

use std::io::Read;

use serde_json::Value;

use crate::error::{ImportError, Result};

/// Ordered list of paths to import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRequest {
    paths: Vec<String>,
}

impl ImportRequest {
    /// Accept only a JSON array whose every element is a string
    pub fn from_value(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            ImportError::InvalidArgument(format!(
                "expected an array of paths, got {}",
                json_type(value)
            ))
        })?;

        let paths = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ImportError::InvalidArgument(format!(
                        "path #{} must be a string, got {}",
                        i,
                        json_type(item)
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { paths })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<String> {
        self.paths
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Process-wide scope filled by loaded scripts
//!
//! Holds every name defined so far and the units that defined them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Value a script can assign to a name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScopeValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl std::fmt::Display for ScopeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeValue::String(s) => write!(f, "\"{}\"", s),
            ScopeValue::Number(n) => write!(f, "{}", n),
            ScopeValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A name bound by a script, and where
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub value: ScopeValue,
    pub file: PathBuf,
    pub line: u32,
}

/// A script that finished loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedUnit {
    pub path: PathBuf,
    pub definitions: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scope {
    definitions: BTreeMap<String, Definition>,
    units: Vec<LoadedUnit>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&ScopeValue> {
        self.definitions.get(name).map(|d| &d.value)
    }

    pub fn definitions(&self) -> &BTreeMap<String, Definition> {
        &self.definitions
    }

    /// Units in the order they finished loading
    pub fn units(&self) -> &[LoadedUnit] {
        &self.units
    }

    pub fn is_loaded(&self, path: &Path) -> bool {
        self.units.iter().any(|u| u.path == path)
    }

    /// Add a fully evaluated unit and its definitions
    pub(crate) fn commit(&mut self, path: PathBuf, definitions: Vec<(String, Definition)>) {
        self.units.push(LoadedUnit {
            path,
            definitions: definitions.len(),
            loaded_at: chrono::Utc::now(),
        });
        self.definitions.extend(definitions);
    }

    /// Format scope for display
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str("Loaded Units\n");
        output.push_str("------------\n");
        if self.units.is_empty() {
            output.push_str("  (none)\n");
        }
        for unit in &self.units {
            output.push_str(&format!(
                "  {} ({} definitions)\n",
                unit.path.display(),
                unit.definitions
            ));
        }

        if !self.definitions.is_empty() {
            output.push_str("\nDefinitions\n");
            output.push_str("-----------\n");
            for (name, definition) in &self.definitions {
                output.push_str(&format!("  {} = {}\n", name, definition.value));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(value: ScopeValue) -> Definition {
        Definition {
            value,
            file: PathBuf::from("/tmp/a.php"),
            line: 1,
        }
    }

    #[test]
    fn test_scope_default() {
        let scope = Scope::new();
        assert!(scope.units().is_empty());
        assert!(scope.definitions().is_empty());
    }

    #[test]
    fn test_commit() {
        let mut scope = Scope::new();
        scope.commit(
            PathBuf::from("/tmp/a.php"),
            vec![
                ("name".to_string(), definition(ScopeValue::String("app".into()))),
                ("debug".to_string(), definition(ScopeValue::Boolean(true))),
            ],
        );

        assert!(scope.is_loaded(Path::new("/tmp/a.php")));
        assert!(!scope.is_loaded(Path::new("/tmp/b.php")));
        assert_eq!(scope.units()[0].definitions, 2);
        assert_eq!(scope.value("debug"), Some(&ScopeValue::Boolean(true)));
        assert!(scope.get("missing").is_none());
    }

    #[test]
    fn test_display() {
        let mut scope = Scope::new();
        scope.commit(
            PathBuf::from("/tmp/a.php"),
            vec![("limit".to_string(), definition(ScopeValue::Number(10.0)))],
        );

        let output = scope.display();
        assert!(output.contains("/tmp/a.php (1 definitions)"));
        assert!(output.contains("limit = 10"));
    }

    #[test]
    fn test_display_empty() {
        assert!(Scope::new().display().contains("(none)"));
    }
}

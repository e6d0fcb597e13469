//! Test helpers shared across modules

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::loader::{LoadError, Loader};

/// Loader that records every call and fails for chosen paths
#[derive(Debug, Default)]
pub struct FakeLoader {
    calls: Vec<PathBuf>,
    failing: HashSet<PathBuf>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn calls(&self) -> &[PathBuf] {
        &self.calls
    }
}

impl Loader for FakeLoader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.calls.push(path.to_path_buf());
        if self.failing.contains(path) {
            return Err(LoadError::at(path, 1, "fake failure"));
        }
        Ok(())
    }
}

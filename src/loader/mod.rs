//! Script loading
//!
//! The importer never loads anything itself: it hands every conforming path
//! to a [`Loader`]. [`ScopeLoader`] is the real one, [`RecordingLoader`] backs
//! dry runs.

pub mod scope;
pub mod script;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use scope::{Definition, LoadedUnit, Scope, ScopeValue};
pub use script::ScopeLoader;

/// Capability to execute one source unit in the current process scope
pub trait Loader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError>;
}

impl<L: Loader + ?Sized> Loader for &mut L {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        (**self).load(path)
    }
}

impl<L: Loader + ?Sized> Loader for Box<L> {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        (**self).load(path)
    }
}

/// A failed load, with the location it happened at
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
    /// File the failure is located in (may be a nested include)
    pub file: PathBuf,
    /// 1-based line, 0 when the failure is not tied to a line
    pub line: u32,
    /// Call frames, innermost first
    pub frames: Vec<String>,
}

impl LoadError {
    pub fn new(file: &Path, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: file.to_path_buf(),
            line: 0,
            frames: vec![file.display().to_string()],
        }
    }

    pub fn at(file: &Path, line: u32, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: file.to_path_buf(),
            line,
            frames: vec![format!("{}:{}", file.display(), line)],
        }
    }

    pub fn io(file: &Path, err: &io::Error) -> Self {
        Self::new(file, err.to_string())
    }

    /// Record that the failing unit was pulled in by an include statement
    pub fn included_from(mut self, file: &Path, line: u32) -> Self {
        self.frames
            .push(format!("{}:{} include", file.display(), line));
        self
    }
}

/// Loader that only remembers what it was asked to load
#[derive(Debug, Default)]
pub struct RecordingLoader {
    loaded: Vec<PathBuf>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

impl Loader for RecordingLoader {
    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.loaded.push(path.to_path_buf());
        Ok(())
    }
}

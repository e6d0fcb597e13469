//! Importer - batch loading of script files and directories
//!
//! Validates a caller-ordered list of file and directory paths, loads every
//! conforming script through an injected [`Loader`], and reports each failure
//! as an [`ErrorRecord`] instead of aborting the batch.
//!
//! # Example
//!
//! ```no_run
//! use importer::{Importer, ScopeLoader, Settings};
//!
//! let mut importer = Importer::new(Settings::default(), ScopeLoader::new());
//! let errors = importer.import(["config/", "bootstrap.php"]);
//! for error in &errors {
//!     eprintln!("{}: {}", error.item, error.message);
//! }
//! ```

pub mod cli;
pub mod error;
pub mod import;
pub mod loader;
pub mod logging;
pub mod output;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ImportError, Result};
pub use import::{ErrorDetails, ErrorKind, ErrorRecord, ImportRequest, Importer};
pub use loader::{LoadError, Loader, RecordingLoader, Scope, ScopeLoader};
pub use output::{format_report, format_scope, OutputFormat};
pub use settings::Settings;

//! Path resolution
//!
//! Turns one requested path into the ordered steps the importer runs:
//! load a conforming file, or report a rejection. Directories expand into
//! their children here, so the importer only ever sees a flat list.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use walkdir::WalkDir;

use super::record::{render_trace, ErrorRecord};

/// Where a candidate came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Named directly in the request
    Argument(String),
    /// Found while listing a requested directory
    Directory(String),
}

impl Origin {
    /// Frames describing the origin, innermost first
    pub fn frames(&self) -> Vec<String> {
        match self {
            Origin::Argument(item) => vec![format!("import({:?})", item)],
            Origin::Directory(dir) => vec![
                format!("scandir({:?})", dir),
                format!("import({:?})", dir),
            ],
        }
    }
}

/// A conforming file, ready to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub item: String,
    pub path: PathBuf,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Load(Candidate),
    Reject(ErrorRecord),
}

#[derive(Debug, Clone)]
pub struct Resolver {
    extension: String,
}

impl Resolver {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Resolve one requested path into its steps, in discovery order
    pub fn resolve(&self, item: &str) -> Vec<Step> {
        let path = Path::new(item);

        if names_directory(item, path) {
            self.resolve_directory(item, path)
        } else {
            self.resolve_file(item, path)
        }
    }

    fn resolve_directory(&self, item: &str, dir: &Path) -> Vec<Step> {
        let trace = || render_trace(Origin::Argument(item.to_string()).frames());

        if !dir.is_dir() {
            return vec![Step::Reject(ErrorRecord::directory_not_found(
                item,
                missing_reason(dir, "not a directory"),
                trace(),
            ))];
        }

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    return vec![Step::Reject(ErrorRecord::directory_unreadable(
                        item,
                        e.to_string(),
                        trace(),
                    ))];
                }
            }
        }

        let origin = Origin::Directory(item.to_string());
        let mut steps = Vec::new();
        let mut conforming = 0;

        for entry in entries {
            if is_hidden(entry.file_name()) {
                continue;
            }

            let child = dir.join(entry.file_name());
            let child_item = child.to_string_lossy().into_owned();
            let child_trace = render_trace(origin.frames());

            if !child.exists() {
                steps.push(Step::Reject(ErrorRecord::file_not_found(
                    &child_item,
                    missing_reason(&child, "broken link"),
                    child_trace,
                )));
            } else if !self.has_extension(&child) {
                let record = if child.is_dir() {
                    ErrorRecord::nested_directory(&child_item, &self.extension, child_trace)
                } else {
                    ErrorRecord::invalid_extension(&child_item, &self.extension, child_trace)
                };
                steps.push(Step::Reject(record));
            } else {
                conforming += 1;
                steps.push(Step::Load(Candidate {
                    item: child_item,
                    path: child,
                    origin: origin.clone(),
                }));
            }
        }

        if conforming == 0 {
            steps.push(Step::Reject(ErrorRecord::empty_directory(
                item,
                &self.extension,
                trace(),
            )));
        }

        steps
    }

    fn resolve_file(&self, item: &str, path: &Path) -> Vec<Step> {
        if path.file_name().is_some_and(is_hidden) {
            return Vec::new();
        }

        let origin = Origin::Argument(item.to_string());

        if !path.exists() {
            return vec![Step::Reject(ErrorRecord::file_not_found(
                item,
                missing_reason(path, "not found"),
                render_trace(origin.frames()),
            ))];
        }

        if !self.has_extension(path) {
            return vec![Step::Reject(ErrorRecord::invalid_extension(
                item,
                &self.extension,
                render_trace(origin.frames()),
            ))];
        }

        vec![Step::Load(Candidate {
            item: item.to_string(),
            path: path.to_path_buf(),
            origin,
        })]
    }

    /// Name ends in `.<extension>`, which may itself contain dots
    fn has_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension);
        path.file_name().is_some_and(|name| {
            let name = name.to_string_lossy();
            name.len() > suffix.len() && name.ends_with(&suffix)
        })
    }
}

/// An existing directory, or a path spelled with a trailing separator
fn names_directory(item: &str, path: &Path) -> bool {
    path.is_dir() || item.ends_with('/') || item.ends_with(MAIN_SEPARATOR)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// OS reason a path is unusable, or `fallback` when it does exist
fn missing_reason(path: &Path, fallback: &str) -> String {
    match fs::metadata(path) {
        Err(e) => e.to_string(),
        Ok(_) => fallback.to_string(),
    }
}

//! Error records produced by an import run

use serde::{Deserialize, Serialize};

/// What went wrong with one path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DirectoryNotFound,
    DirectoryUnreadable,
    FileNotFound,
    InvalidExtension,
    EmptyDirectory,
    LoadFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::DirectoryNotFound => "directory not found",
            ErrorKind::DirectoryUnreadable => "directory unreadable",
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::InvalidExtension => "invalid extension",
            ErrorKind::EmptyDirectory => "empty directory",
            ErrorKind::LoadFailure => "load failure",
        };
        f.write_str(name)
    }
}

/// Diagnostic context of the underlying failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub internal: String,
    pub file: String,
    pub line: u32,
    pub trace: String,
}

/// One failed path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The path as it was requested or discovered
    pub item: String,
    pub kind: ErrorKind,
    /// Human-readable message, also what gets echoed
    pub message: String,
    pub details: ErrorDetails,
}

impl ErrorRecord {
    pub fn directory_not_found(item: &str, internal: String, trace: String) -> Self {
        Self::validation(
            ErrorKind::DirectoryNotFound,
            item,
            format!("O diretório '{}' não existe", item),
            internal,
            trace,
        )
    }

    pub fn directory_unreadable(item: &str, internal: String, trace: String) -> Self {
        Self::validation(
            ErrorKind::DirectoryUnreadable,
            item,
            format!("Não foi possível ler o diretório '{}'", item),
            internal,
            trace,
        )
    }

    pub fn file_not_found(item: &str, internal: String, trace: String) -> Self {
        Self::validation(
            ErrorKind::FileNotFound,
            item,
            format!("O arquivo '{}' não existe", item),
            internal,
            trace,
        )
    }

    pub fn invalid_extension(item: &str, extension: &str, trace: String) -> Self {
        Self::validation(
            ErrorKind::InvalidExtension,
            item,
            format!("O arquivo '{}' não possui a extensão .{}", item, extension),
            format!("expected a .{} file", extension),
            trace,
        )
    }

    /// A subdirectory met while listing a directory; only files are loaded
    pub fn nested_directory(item: &str, extension: &str, trace: String) -> Self {
        Self::validation(
            ErrorKind::InvalidExtension,
            item,
            format!("O diretório '{}' não é um script .{}", item, extension),
            "subdirectories are not loaded".to_string(),
            trace,
        )
    }

    pub fn empty_directory(item: &str, extension: &str, trace: String) -> Self {
        Self::validation(
            ErrorKind::EmptyDirectory,
            item,
            format!("Nenhum script válido encontrado no diretório '{}'", item),
            format!("no .{} files to load", extension),
            trace,
        )
    }

    pub fn load_failure(item: &str, internal: String, file: String, line: u32, trace: String) -> Self {
        Self {
            item: item.to_string(),
            kind: ErrorKind::LoadFailure,
            message: format!("Erro ao carregar '{}': {}", item, internal),
            details: ErrorDetails {
                internal,
                file,
                line,
                trace,
            },
        }
    }

    fn validation(
        kind: ErrorKind,
        item: &str,
        message: String,
        internal: String,
        trace: String,
    ) -> Self {
        Self {
            item: item.to_string(),
            kind,
            message,
            details: ErrorDetails {
                internal,
                file: item.to_string(),
                line: 0,
                trace,
            },
        }
    }
}

/// Number frames innermost first: `#0 ...`, `#1 ...`
pub fn render_trace<I>(frames: I) -> String
where
    I: IntoIterator<Item = String>,
{
    frames
        .into_iter()
        .enumerate()
        .map(|(i, frame)| format!("#{} {}", i, frame))
        .collect::<Vec<_>>()
        .join("\n")
}

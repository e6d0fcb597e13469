//! Output formatting module

pub mod echo;
pub mod formatter;
pub mod human;
pub mod json;

pub use echo::{summary_line, Echo};
pub use formatter::{format_report, format_scope, OutputFormat};

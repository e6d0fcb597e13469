//! Output formatting

use crate::import::ErrorRecord;
use crate::loader::Scope;
use crate::output::human::{format_human_report, format_human_scope};
use crate::output::json::{format_json_report, format_json_scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_report(errors: &[ErrorRecord], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_report(errors),
        OutputFormat::Json => format_json_report(errors),
    }
}

pub fn format_scope(scope: &Scope, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human_scope(scope),
        OutputFormat::Json => format_json_scope(scope),
    }
}

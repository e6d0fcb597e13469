//! JSON output formatting

use serde_json::json;

use crate::import::ErrorRecord;
use crate::loader::Scope;

pub fn format_json_report(errors: &[ErrorRecord]) -> String {
    serde_json::to_string_pretty(errors).unwrap_or_else(|_| "[]".to_string())
}

pub fn format_json_scope(scope: &Scope) -> String {
    serde_json::to_string_pretty(scope).unwrap_or_else(|_| "{}".to_string())
}

/// Errors and scope in one document, for `--json --show-scope`
pub fn format_json_with_scope(errors: &[ErrorRecord], scope: &Scope) -> String {
    let document = json!({ "errors": errors, "scope": scope });
    serde_json::to_string_pretty(&document).unwrap_or_else(|_| "{}".to_string())
}

//! Human-readable output formatting

use crate::import::ErrorRecord;
use crate::loader::Scope;

pub fn format_human_report(errors: &[ErrorRecord]) -> String {
    if errors.is_empty() {
        return "All paths imported".to_string();
    }

    let mut output = format!("Import Errors ({})\n", errors.len());
    output.push_str(&"-".repeat(output.len() - 1));
    output.push('\n');

    for error in errors {
        output.push_str(&format!("\n[{}] {}\n", error.kind, error.item));
        output.push_str(&format!("  {}\n", error.message));
        if error.details.line > 0 {
            output.push_str(&format!(
                "  at {}:{}\n",
                error.details.file, error.details.line
            ));
        }
    }

    output
}

pub fn format_human_scope(scope: &Scope) -> String {
    scope.display()
}

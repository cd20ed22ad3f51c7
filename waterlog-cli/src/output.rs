//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print load/save diagnostics (skipped rows etc.) as warnings
pub fn diagnostics(diagnostics: &[String]) {
    for diagnostic in diagnostics {
        warning(diagnostic);
    }
}

/// Print a load report's diagnostics
///
/// A missing data file is a fresh start, not a problem, so its
/// diagnostic renders as info rather than a warning.
pub fn load_diagnostics(report: &waterlog_core::LoadReport) {
    if report.file_missing {
        for diagnostic in &report.diagnostics {
            info(diagnostic);
        }
    } else {
        diagnostics(&report.diagnostics);
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a consumption amount for display
pub fn format_liters(amount: f64) -> String {
    format!("{:.2} L", amount)
}

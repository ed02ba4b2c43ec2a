//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings
//! - **Standardized spacing**: Newline before and after messages

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a non-fatal problem, e.g. a cache that could not be saved
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "! Warning:".yellow(), message.white());
}

//! Pure formatting functions for CLI output.

use crate::boundary::BoundaryWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the resolved version change (or the initial version).
pub fn display_version_change(current: Option<&str>, next: &str) {
    match current {
        Some(current) => {
            println!("\n{}", style("Next version:").bold());
            println!("  From: {}", style(current).red());
            println!("  To:   {}", style(next).green());
        }
        None => {
            println!("\n{}", style("Initial version:").bold());
            println!("  {}", style(next).green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_version_change() {
        display_version_change(Some("1.0.0"), "1.1.0");
        display_version_change(None, "0.1.0");
    }
}

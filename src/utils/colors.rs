/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Grey out empty or placeholder display values ("Unknown date", "").
pub fn colorize_placeholder(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "Unknown date" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

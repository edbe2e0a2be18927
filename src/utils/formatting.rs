//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Attach the configured currency symbol to an already formatted amount.
pub fn money(symbol: &str, amount: &str) -> String {
    format!("{}{}", symbol, amount)
}

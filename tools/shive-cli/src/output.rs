//! Output formatting for the CLI.

use console::style;
use serde::Serialize;

/// Output handler for CLI messages.
///
/// Human messages go to stdout (warnings and errors to stderr). In JSON mode
/// they are suppressed and commands print one JSON document instead.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad each column to its width. Extra columns are printed unpadded.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .enumerate()
        .map(|(i, col)| match widths.get(i) {
            Some(width) => format!("{:width$}", col, width = width),
            None => col.to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Cart badge shown in prompts, e.g. `Cart (3)`.
pub fn cart_badge(count: usize) -> String {
    format!("Cart ({})", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_columns() {
        assert_eq!(format_row(&["1", "Serum", "RS 10"], &[3, 8]), "1    Serum     RS 10");
        assert_eq!(format_row(&["a", "b"], &[2, 4]), "a   b");
    }

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge(0), "Cart (0)");
        assert_eq!(cart_badge(12), "Cart (12)");
    }
}

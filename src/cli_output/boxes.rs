//! Simple line-based CLI output utilities.
//!
//! Builders return `String`s so callers can test them; the `print_*`
//! helpers just write them to stdout.

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// The main header.
///
/// ```text
/// SKILLBRIDGE SUMMARY
/// ════════════════════════════════════════════════════════════
/// ```
pub fn format_header(title: &str) -> String {
    format!("{}\n{}\n", title, "═".repeat(LINE_WIDTH))
}

/// A section title with a thin rule under it.
///
/// ```text
/// FOCUS
/// ────────────────────────────────────────────────────────────
/// ```
pub fn format_section(title: &str) -> String {
    format!("{}\n{}\n", title, "─".repeat(LINE_WIDTH))
}

/// An indented line with a leading icon.
///
/// ```text
///   ● Ownership in Rust
/// ```
pub fn format_line(icon: &str, message: &str) -> String {
    format!("  {} {}\n", icon, message)
}

/// A `label: value` row with the value column aligned.
///
/// ```text
///   Total:     12
/// ```
pub fn format_field(label: &str, value: &str) -> String {
    format!("  {:<10} {}\n", format!("{}:", label), value)
}

/// Closing rule.
pub fn format_footer() -> String {
    format!("{}\n", "═".repeat(LINE_WIDTH))
}

pub fn print_block(block: &str) {
    print!("{}", block);
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const PENDING: &str = "●";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_rule() {
        let header = format_header("SKILLBRIDGE SUMMARY");
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines[0], "SKILLBRIDGE SUMMARY");
        assert_eq!(lines[1].chars().count(), LINE_WIDTH);
    }

    #[test]
    fn test_field_alignment() {
        assert_eq!(format_field("Total", "3"), "  Total:     3\n");
        assert_eq!(format_field("Progress", "33%"), "  Progress:  33%\n");
    }

    #[test]
    fn test_line() {
        assert_eq!(format_line(icons::PENDING, "Traits"), "  ● Traits\n");
    }
}

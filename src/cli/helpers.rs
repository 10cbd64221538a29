//! Shared helper functions for CLI commands

use crate::core::identity::ReportId;

/// Format a ReportId for display, truncating if too long
///
/// IDs longer than 16 characters are truncated to 13 chars with "..." suffix.
pub fn format_short_id(id: &ReportId) -> String {
    truncate_str(&id.to_string(), 16)
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts characters, not bytes, so multi-byte titles never split mid-char.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::ReportKind;

    #[test]
    fn test_format_short_id() {
        let id = ReportId::new(ReportKind::Xfmr);
        let formatted = format_short_id(&id);
        // XFMR- (5) + ULID (26) = 31 chars, so it truncates
        assert!(formatted.len() <= 16);
        assert!(formatted.ends_with("..."));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte_boundary() {
        // a multi-byte char straddling the old byte cut point must not panic
        let title = "aaaaaaaaaaaaaaaaaaaaaaaaüzzzzz";
        assert_eq!(truncate_str(title, 28), "aaaaaaaaaaaaaaaaaaaaaaaaü...");
        assert_eq!(truncate_str("Müller", 6), "Müller");
        assert_eq!(truncate_str("Überspannungsschutz T-1", 10), "Überspa...");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv("with\nnewline"), "\"with\nnewline\"");
    }
}

//! Audit history display

use crate::audit::AuditEntry;

/// Format audit entries one per line, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_history() {
        assert_eq!(format_history(&[]), "No history recorded.\n");

        let text = format_history(&[AuditEntry::clear(3)]);
        assert!(text.contains("CLEAR"));
        assert_eq!(text.lines().count(), 1);
    }
}

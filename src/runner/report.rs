//! Report templates
//!
//! These strings are the output contract of the hook; tests compare the
//! rendered reports byte for byte.

use crate::validator::Category;

pub const WARNINGS_HEADER: &str =
    "pre-commit: Some warnings were raised. These will not stop commit:";
pub const CHECKS_HEADER: &str = "pre-commit: Stopping commit because of errors.";
pub const DEFAULT_BYPASS_HINT: &str =
    "pre-commit: You can bypass this check using the no-verify option.";

/// A rendered category report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub had_findings: bool,
}

impl Report {
    /// Render `findings` for `category`. No findings renders nothing.
    pub fn new(category: Category, findings: &[String]) -> Self {
        if findings.is_empty() {
            return Self {
                text: String::new(),
                had_findings: false,
            };
        }
        Self {
            text: format!("{}\n{}\n", header(category), findings.join("\n")),
            had_findings: true,
        }
    }
}

pub fn header(category: Category) -> &'static str {
    match category {
        Category::Checks => CHECKS_HEADER,
        Category::Warnings => WARNINGS_HEADER,
    }
}

/// Trailing note written after a failed checks report.
pub fn bypass_note(hint: &str) -> String {
    format!("{hint}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn findings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_warning_template() {
        let report = Report::new(Category::Warnings, &findings(&["warn 1", "warn 2"]));
        assert!(report.had_findings);
        assert_eq!(
            report.text,
            "pre-commit: Some warnings were raised. These will not stop commit:\nwarn 1\nwarn 2\n"
        );
        assert!(!report.text.contains("error 3"));
    }

    #[test]
    fn test_checks_template() {
        let report = Report::new(Category::Checks, &findings(&["error 3", "error 4"]));
        assert!(report.text.starts_with("pre-commit:"));
        assert!(report.text.lines().any(|l| l == "error 3"));
        assert!(report.text.lines().any(|l| l == "error 4"));
        assert!(!report.text.lines().any(|l| l == "warn 1"));
    }

    #[test]
    fn test_multiline_findings_are_verbatim() {
        let report = Report::new(
            Category::Checks,
            &findings(&["detected tab before initial space:\na.rb:1:\tx\n", "b.rb:2: new blank line at EOF.\n"]),
        );
        assert_eq!(
            report.text,
            "pre-commit: Stopping commit because of errors.\n\
             detected tab before initial space:\na.rb:1:\tx\n\n\
             b.rb:2: new blank line at EOF.\n\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new(Category::Checks, &[]);
        assert!(!report.had_findings);
        assert!(report.text.is_empty());
    }

    #[test]
    fn test_bypass_note() {
        assert_eq!(bypass_note("skip it"), "skip it\n\n");
    }
}

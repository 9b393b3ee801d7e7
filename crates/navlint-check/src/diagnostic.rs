//! Diagnostic types.

use std::fmt;

use serde::Serialize;

/// Diagnostic severity.
///
/// Only [`Severity::Error`] findings fail a check run; warnings are
/// advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Hard failure, the manifest cannot be consumed as written.
    Error,
    /// Advisory finding.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Which check produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Target path does not exist in the docs tree.
    MissingTarget,
    /// Target is absolute or escapes the docs root via `..`.
    TargetOutsideTree,
    /// Two siblings reference the identical target.
    DuplicateSibling,
    /// A docs file the manifest never references.
    Orphan,
    /// Manifest title differs from the document's H1.
    TitleMismatch,
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Finding severity.
    pub severity: Severity,
    /// Check that produced this finding.
    pub check: CheckKind,
    /// 1-based manifest line, `None` for findings about the docs tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// True if this finding fails the check run.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}: line {}: {}", self.severity, line, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line() {
        let diag = Diagnostic {
            severity: Severity::Error,
            check: CheckKind::MissingTarget,
            line: Some(4),
            message: "target \"missing.md\" does not exist".to_owned(),
        };

        assert_eq!(
            diag.to_string(),
            "error: line 4: target \"missing.md\" does not exist"
        );
        assert!(diag.is_error());
    }

    #[test]
    fn test_display_without_line() {
        let diag = Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::Orphan,
            line: None,
            message: "\"notes.md\" is not referenced by the manifest".to_owned(),
        };

        assert_eq!(
            diag.to_string(),
            "warning: \"notes.md\" is not referenced by the manifest"
        );
        assert!(!diag.is_error());
    }

    #[test]
    fn test_serialization_shape() {
        let diag = Diagnostic {
            severity: Severity::Error,
            check: CheckKind::DuplicateSibling,
            line: Some(7),
            message: "duplicate".to_owned(),
        };

        let json = serde_json::to_value(&diag).unwrap();

        assert_eq!(json["severity"], "error");
        assert_eq!(json["check"], "duplicate-sibling");
        assert_eq!(json["line"], 7);
    }

    #[test]
    fn test_serialization_skips_missing_line() {
        let diag = Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::Orphan,
            line: None,
            message: "orphan".to_owned(),
        };

        let json = serde_json::to_value(&diag).unwrap();

        assert!(json.get("line").is_none());
    }
}

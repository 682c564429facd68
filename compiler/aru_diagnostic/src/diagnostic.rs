//! A single rendered diagnostic message.
//!
//! Trimmed from the teacher's span/label/suggestion-carrying `Diagnostic`
//! (`ori_diagnostic::diagnostic`): this core's identifiers and expressions
//! carry no position info (§6), so there is nothing to attach a label span
//! to. What's left is a code, a headline message, and optional notes — a
//! single rendered message with the failing expression and the two types
//! involved, per §7's user-visible-behavior requirement.

use std::fmt;

use crate::ErrorCode;

/// Severity level for a diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A rendered diagnostic.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Error,
            code,
            message: String::new(),
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for note in &self.notes {
            writeln!(f, "  = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_code_and_message() {
        let diag = Diagnostic::error(ErrorCode::TypeMismatch)
            .with_message("expected `Int`, found `Char`")
            .with_note("at the right operand of `+`");
        let rendered = diag.to_string();
        assert_eq!(rendered.contains("E1005"), true);
        assert_eq!(rendered.contains("expected `Int`, found `Char`"), true);
        assert_eq!(rendered.contains("note: at the right operand"), true);
    }
}

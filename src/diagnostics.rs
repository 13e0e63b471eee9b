//! Scan Diagnostics
//!
//! Optional reporting for information the lexer drops by design.
//! Reconstruction never fails on malformed G-code; callers that want
//! to know about silently skipped tokens pass a [`ScanReport`].

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Warning,
    Info,
}

/// A diagnostic message tied to a 1-based input line number
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Diagnostics collected over one scan of an input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_warning(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn add_info(&mut self, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            message,
            severity: Severity::Info,
        });
    }

    /// True when no warnings were collected
    pub fn is_clean(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }
}

use crate::error::CompileError;
use crate::file::FileId;
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single reportable condition, independent of how it gets rendered.
/// `stratac` turns these into `ariadne::Report`s; nothing in this crate
/// knows about `ariadne`.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: Option<FileId>,
    pub span: Option<Span>,
    pub message: String,
}

impl Diagnostic {
    pub fn from_error(err: &CompileError) -> Self {
        let offset = err.offset().unwrap_or(0);
        Self {
            severity: Severity::Error,
            file: err.file(),
            span: err.offset().map(|_| Span::new(offset, offset + 1)),
            message: err.to_string(),
        }
    }
}

/// Collects diagnostics for the single reporting channel a compilation uses.
/// Strata's phases are fatal-on-first-error, so in practice this ever holds
/// zero or one entry, but the collector shape matches how a future phase
/// with non-fatal warnings would report through the same channel.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diag: Diagnostic) {
        self.items.push(diag);
    }

    pub fn had_error(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }
}

//! Renders a [`Diagnostic`] as a source-annotated report via `ariadne`.

use ariadne::{Color, Label, Report, ReportKind, Source};

use strata_common::{Diagnostic, Severity};
use strata_parser::Compilation;

/// Print `diag` to stderr. Diagnostics with no associated file (internal
/// errors) fall back to a bare message line.
pub fn render(comp: &Compilation, diag: &Diagnostic) {
    let Some(file_id) = diag.file else {
        eprintln!("error: {}", diag.message);
        return;
    };

    let file = comp.files.get(file_id);
    let path = comp.strings.resolve(file.path).to_string();
    let source = file.source().to_string();

    let (kind, color) = match diag.severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
    };

    let start = diag.span.map(|s| s.start as usize).unwrap_or(0);
    let end = diag.span.map(|s| s.end as usize).unwrap_or(start).max(start + 1);
    let end = end.min(source.len().max(start + 1));

    let report = Report::build(kind, (path.clone(), start..end))
        .with_message(&diag.message)
        .with_label(Label::new((path.clone(), start..end)).with_message(&diag.message).with_color(color))
        .finish();

    let _ = report.eprint((path, Source::from(source)));
}

//! Driver binary: wires the Intern -> Read -> Lex -> Parse -> Resolve ->
//! Complete pipeline together and renders the first fatal diagnostic, if
//! any. The pipeline is strictly ordered and fatal-on-first-error: there is
//! no partial output and no recovery.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use strata_common::{CompileError, Diagnostic};
use strata_parser::{parse_file, Compilation};

#[derive(ClapParser, Debug)]
#[command(name = "stratac", about = "Strata compiler front end")]
struct Cli {
    /// Source files to compile. Declarations across files share one global
    /// scope, so a later file may reference an earlier one's types and procs.
    paths: Vec<PathBuf>,

    /// Trace each pipeline phase to stderr.
    #[arg(long)]
    debug: bool,

    /// Emit the diagnostic as JSON instead of a rendered report.
    #[arg(long)]
    json: bool,
}

fn trace(debug: bool, message: impl AsRef<str>) {
    if debug {
        eprintln!("[stratac] {}", message.as_ref());
    }
}

fn compile(comp: &mut Compilation, cli: &Cli) -> Result<(), CompileError> {
    trace(cli.debug, "intern: base types registered");
    for path in &cli.paths {
        trace(cli.debug, format!("read: {}", path.display()));
        let file = comp.files.load(path, &mut comp.strings)?;
        trace(cli.debug, format!("lex+parse: {}", path.display()));
        parse_file(comp, file)?;
    }

    trace(cli.debug, "resolve: binding symrefs");
    strata_sema::resolve_all(comp)?;

    trace(cli.debug, "complete: type completion fixed point");
    strata_sema::complete_all(comp)?;
    Ok(())
}

fn report_error(comp: &Compilation, cli: &Cli, err: &CompileError) {
    let diag = Diagnostic::from_error(err);
    if cli.json {
        let line_col = diag.file.zip(diag.span).map(|(file_id, span)| {
            let source = comp.files.get(file_id).source();
            strata_common::LineIndex::new(source).line_col(span.start)
        });
        let json = serde_json::json!({
            "severity": format!("{:?}", diag.severity),
            "file": diag.file.map(|f| f.0),
            "span": diag.span.map(|s| (s.start, s.end)),
            "line": line_col.map(|(line, _)| line),
            "column": line_col.map(|(_, col)| col),
            "message": diag.message,
        });
        println!("{json}");
    } else {
        strata_sema::render(comp, &diag);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.paths.is_empty() {
        eprintln!("stratac: no input files");
        return ExitCode::FAILURE;
    }

    let mut comp = Compilation::new();
    match compile(&mut comp, &cli) {
        Ok(()) => {
            trace(cli.debug, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&comp, &cli, &err);
            ExitCode::FAILURE
        }
    }
}

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use entrylint_engine::Diagnostic;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `path:line:column: message` lines and a summary
    #[default]
    Text,
    /// A JSON array of diagnostics
    Json,
}

/// The diagnostics produced for one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn problem_count(reports: &[FileReport]) -> usize {
        reports.iter().map(|r| r.diagnostics.len()).sum()
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    path: &'a Path,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

pub fn write_report(
    format: Format,
    reports: &[FileReport],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        Format::Text => write_text(reports, out),
        Format::Json => write_json(reports, out),
    }
}

fn write_text(reports: &[FileReport], out: &mut dyn Write) -> anyhow::Result<()> {
    for report in reports {
        for d in &report.diagnostics {
            writeln!(
                out,
                "{}:{}:{}: {}",
                report.path.display(),
                d.line,
                d.column,
                d.message
            )?;
        }
    }

    let problems = FileReport::problem_count(reports);
    if problems == 0 {
        writeln!(out, "No problems found in {} file(s)", reports.len())?;
    } else {
        let failing = reports.iter().filter(|r| !r.diagnostics.is_empty()).count();
        writeln!(
            out,
            "{problems} problem(s) in {failing} of {} file(s)",
            reports.len()
        )?;
    }
    Ok(())
}

fn write_json(reports: &[FileReport], out: &mut dyn Write) -> anyhow::Result<()> {
    let entries: Vec<JsonDiagnostic<'_>> = reports
        .iter()
        .flat_map(|report| {
            report.diagnostics.iter().map(|diagnostic| JsonDiagnostic {
                path: &report.path,
                diagnostic,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

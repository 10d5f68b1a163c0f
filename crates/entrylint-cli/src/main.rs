use anyhow::{Context, Result, bail};
use clap::Parser;
use entrylint_config::Config;
use entrylint_engine::{Identifiers, Linter};
use std::{
    io::{Write, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
};

mod report;

use report::{FileReport, Format, write_report};

/// Lint the entries of curated markdown link lists
#[derive(Parser, Debug)]
#[command(name = "entrylint")]
#[command(version)]
struct Cli {
    /// Markdown files to lint (defaults to the configured `files` patterns)
    files: Vec<PathBuf>,

    /// Config file to use instead of `.entrylint.toml` or the user config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Validate every list, including a table of contents
    #[arg(long)]
    no_contents_scope: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Extra word accepted as a description's first word
    #[arg(long = "identifier", value_name = "WORD", action = clap::ArgAction::Append)]
    identifiers: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut out = stdout().lock();

    match run(&cli, Path::new(""), &mut out) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Lints the requested files from `dir` and writes the report to `out`.
/// Returns the number of problems found.
fn run(cli: &Cli, dir: &Path, out: &mut dyn Write) -> Result<usize> {
    let config =
        Config::discover(dir, cli.config.as_deref()).context("Failed to load configuration")?;
    log::debug!("Using config: {config:?}");

    let files = if cli.files.is_empty() {
        config.resolve_files(dir)?
    } else {
        cli.files.clone()
    };
    if files.is_empty() {
        bail!("No markdown files to lint");
    }

    let linter = Linter::new()
        .with_identifiers(build_identifiers(&config, &cli.identifiers))
        .respect_contents(config.respect_contents && !cli.no_contents_scope);

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let diagnostics = linter
            .lint_file(&path)
            .with_context(|| format!("Failed to lint {}", path.display()))?;
        reports.push(FileReport { path, diagnostics });
    }

    write_report(cli.format, &reports, out)?;
    Ok(FileReport::problem_count(&reports))
}

fn build_identifiers(config: &Config, extra: &[String]) -> Identifiers {
    let mut identifiers = Identifiers::default();
    identifiers.extend(config.identifiers.iter().chain(extra).cloned());

    if let Some(path) = &config.identifiers_file
        && let Err(e) = identifiers.extend_from_file(path)
    {
        log::warn!("Ignoring identifiers file: {e}");
    }

    log::debug!("{} identifiers allowed", identifiers.len());
    identifiers
}

mod cli_args;
mod config;
mod error;
mod llm;
mod logging;
mod orchestrator;
mod prompt;
mod setup;
mod song;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::cli_args::{Cli, Command, RequestInput};
use crate::config::Config;
use crate::orchestrator::Orchestrator;
use crate::song::sections::parse_sections;
use crate::song::{OperationContext, OperationKind};

/// Read a file, or stdin when the path is missing or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}")?;
    stdout.flush()?;
    Ok(())
}

fn variant_progress() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} variants [{bar:20.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// Lyric operations: parse the request, then build and (unless dry-run) run it.
fn run_operation(cli: &Cli, kind: OperationKind, input: &RequestInput) -> Result<()> {
    let body = read_input(input.request.as_deref())?;
    let ctx = OperationContext::from_json(kind, &body)?;

    if cli.dry_run {
        log::info!("Dry run: building {} without calling a model", kind.as_str());
        return print_json(&prompt::builder::build(&ctx));
    }

    let cfg = Config::from_sources(cli);
    let provider = setup::build_provider(&cfg)?;

    let mut orchestrator = Orchestrator::new(provider.as_ref());
    if kind == OperationKind::Variations {
        orchestrator = orchestrator.with_progress(variant_progress());
    }

    let outcome = orchestrator.run(&ctx)?;
    print_json(&outcome)
}

fn run_sections(lyrics: Option<&Path>) -> Result<()> {
    let text = read_input(lyrics)?;
    let sections = parse_sections(&text);
    log::info!("Found {} section(s)", sections.len());
    print_json(&sections)
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Generate(input) => run_operation(cli, OperationKind::Generate, input),
        Command::Rewrite(input) => run_operation(cli, OperationKind::Rewrite, input),
        Command::RewriteSection(input) => run_operation(cli, OperationKind::RewriteSection, input),
        Command::Variations(input) => run_operation(cli, OperationKind::Variations, input),
        Command::CustomEdit(input) => run_operation(cli, OperationKind::CustomEdit, input),
        Command::Transform(input) => run_operation(cli, OperationKind::Transform, input),
        Command::Sections { lyrics } => run_sections(lyrics.as_deref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

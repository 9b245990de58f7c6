use crate::input::{LineSource, ReaderLines, TerminalLines};
use crate::prompt::Prompter;
use crate::render::{render_json, render_text};
use chrono::{Local, NaiveDate};
use clap::Args;
use ergo_assist::assessment::{evaluate, AssessmentReport, ErgonomicProfile};
use ergo_assist::config::{AppConfig, OutputFormat};
use ergo_assist::error::AppError;
use ergo_assist::intake::{IntakeError, ProfileImporter};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Report format, `text` or `json` (defaults to ERGO_OUTPUT_FORMAT, then text)
    #[arg(long, value_parser = crate::infra::parse_format)]
    pub(crate) format: Option<OutputFormat>,
    /// Date stamped on the report (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one profile per row and a header naming each answer
    #[arg(long)]
    pub(crate) csv: PathBuf,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let format = args.output.format.unwrap_or(config.output.format);
    let generated_on = args
        .output
        .date
        .unwrap_or_else(|| Local::now().date_naive());

    // Keep stdout clean for the JSON document; rustyline always draws on stdout.
    let profile = match format {
        OutputFormat::Text if io::stdin().is_terminal() => {
            collect_profile(TerminalLines::new()?, io::stdout().lock())?
        }
        OutputFormat::Text => {
            collect_profile(ReaderLines::new(io::stdin().lock()), io::stdout().lock())?
        }
        OutputFormat::Json => {
            collect_profile(ReaderLines::new(io::stdin().lock()), io::stderr().lock())?
        }
    };

    let report = build_report(&profile, generated_on);
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            render_text(&mut out, &report)?;
        }
        OutputFormat::Json => render_json(&mut out, &report)?,
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let format = args.output.format.unwrap_or(config.output.format);
    let generated_on = args
        .output
        .date
        .unwrap_or_else(|| Local::now().date_naive());

    let profiles = ProfileImporter::from_path(&args.csv)?;
    info!(count = profiles.len(), path = %args.csv.display(), "imported profiles");

    let reports: Vec<AssessmentReport> = profiles
        .iter()
        .map(|profile| build_report(profile, generated_on))
        .collect();

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for (index, report) in reports.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "Profile {} of {}", index + 1, reports.len())?;
                render_text(&mut out, report)?;
            }
        }
        OutputFormat::Json => render_json(&mut out, &reports)?,
    }
    Ok(())
}

fn collect_profile<S: LineSource, W: Write>(
    input: S,
    output: W,
) -> Result<ErgonomicProfile, IntakeError> {
    let mut prompter = Prompter::new(input, output);
    prompter.intro()?;
    prompter.collect_profile()
}

fn build_report(profile: &ErgonomicProfile, generated_on: NaiveDate) -> AssessmentReport {
    let outcome = evaluate(profile);
    debug!(
        risk_points = outcome.risk_points,
        risk_level = outcome.risk_level.label(),
        recommendations = outcome.recommendations.len(),
        "profile evaluated"
    );
    AssessmentReport::new(profile, &outcome, generated_on)
}

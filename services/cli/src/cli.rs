use crate::session::{run_assess, run_batch, AssessArgs, BatchArgs};
use clap::{Parser, Subcommand};
use ergo_assist::config::AppConfig;
use ergo_assist::error::AppError;
use ergo_assist::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Ergonomic Assessment Assistant",
    about = "Score the ergonomic risk of a gaming setup and suggest adjustments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the questionnaire interactively (default command)
    Assess(AssessArgs),
    /// Evaluate every profile in a CSV export
    Batch(BatchArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Assess(AssessArgs::default()));
    info!(?config.environment, ?command, "ergonomic assistant starting");

    match command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Batch(args) => run_batch(args, &config),
    }
}

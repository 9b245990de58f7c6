mod cli;
mod infra;
mod input;
mod prompt;
mod render;
mod session;

use ergo_assist::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

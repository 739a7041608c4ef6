mod cli;
mod demo;
mod infra;

use flash_appraisal::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

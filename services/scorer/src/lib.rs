mod cli;
mod commands;
mod infra;

use grant_scoring::error::AppError;

pub use infra::bad_request_body;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

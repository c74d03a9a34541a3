use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use grant_scoring::error::AppError;

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "grant-scorer",
    about = "Score grant eligibility applications against configured grant types",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one application payload and print the final result as JSON
    Score(ScoreArgs),
    /// List the registered grant types
    Grants,
    /// Validate a grant scoring configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Grant type whose scoring configuration applies
    #[arg(long)]
    pub(crate) grant_type: String,
    /// Payload file; stdin is read when omitted
    #[arg(long)]
    pub(crate) payload: Option<PathBuf>,
    /// Score only the questions that were answered
    #[arg(long)]
    pub(crate) allow_partial_scoring: bool,
    /// Pretty-print the result
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Configuration file; its stem is the grant type
    pub(crate) path: PathBuf,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => commands::score(args),
        Command::Grants => commands::grants(),
        Command::Validate(args) => commands::validate(args),
    }
}

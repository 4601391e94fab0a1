/*!
 * Shell Errors
 */

use crate::memory::MemoryError;
use miette::Diagnostic;
use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Error, Debug, Diagnostic)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    #[diagnostic(
        code(shell::unknown_command),
        help("Commands are N, C, A, P, J, R and E.")
    )]
    UnknownCommand(String),

    #[error("Command {command} is missing its {argument} argument")]
    #[diagnostic(code(shell::missing_argument))]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid number {value:?} for {argument}")]
    #[diagnostic(
        code(shell::invalid_number),
        help("Arguments are non-negative integers.")
    )]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("No region has been created")]
    #[diagnostic(code(shell::no_region), help("Run `C <size>` first."))]
    NoRegion,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Failed to encode snapshot: {0}")]
    #[diagnostic(code(shell::serialization))]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(shell::io))]
    Io(#[from] std::io::Error),
}

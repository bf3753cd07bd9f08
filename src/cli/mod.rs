//! Thin command shell over a single in-memory ledger.

pub mod commands;
pub mod output;
pub mod shell;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::{ConfigError, LedgerError};

pub use commands::ShellContext;
pub use shell::run_cli;

pub const SCRIPT_ENV_VAR: &str = "FINANCE_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell failures that end the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Per-command failures, reported to the user without ending the session.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    UnknownCommand(String),
}

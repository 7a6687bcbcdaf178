use std::io;
use thiserror::Error;

/// Unrecoverable interpreter faults. Anything reported here ends the process.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline: {0}")]
    Read(#[source] io::Error),
    #[error("unable to write prompt: {0}")]
    Prompt(#[source] io::Error),
    #[error("unable to initialise logging: {0}")]
    Logging(String),
}

pub type ShellResult<T> = Result<T, ShellError>;

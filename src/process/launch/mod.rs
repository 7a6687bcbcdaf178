//! Launching external programs and waiting for them to terminate.
//!
//! A [`Launcher`] takes an invocation that is not a builtin, runs it as a
//! separate process with the full argument vector (name as `argv[0]`, the
//! executable resolved through `PATH`), and blocks until that process has
//! exited or been killed by a signal. A stopped child is not terminated; the
//! launcher keeps waiting. There is no timeout.

#[cfg(unix)]
mod fork;
mod spawn;

#[cfg(unix)]
pub use fork::{EXEC_FAILURE_STATUS, ForkLauncher};
pub use spawn::SpawnLauncher;

use crate::parse::Invocation;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Terminal state of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exited normally with this status code.
    Exited(i32),
    /// Killed by this signal number.
    Signaled(i32),
}

impl Termination {
    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }

    /// Decode a reaped child's status. `None` if it carries neither a code nor a signal.
    pub fn from_exit_status(status: ExitStatus) -> Option<Self> {
        if let Some(code) = status.code() {
            return Some(Termination::Exited(code));
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Some(Termination::Signaled(signal));
            }
        }

        None
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exited with status {code}"),
            Termination::Signaled(signal) => write!(f, "killed by signal {signal}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no command to launch")]
    MissingCommand,
    #[error("{command}: argument contains a nul byte")]
    InvalidArgument { command: String },
    #[error("{command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command}: unable to create child process: {source}")]
    Fork {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command}: unable to wait for child process: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Runs an external command to completion.
pub trait Launcher {
    fn launch(&self, invocation: &Invocation) -> Result<Termination, LaunchError>;
}

/// Which [`Launcher`] implementation the interpreter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherKind {
    /// `fork`, `execvp` and `waitpid` (unix only).
    Fork,
    /// `std::process::Command`.
    Spawn,
}

impl Default for LauncherKind {
    fn default() -> Self {
        if cfg!(unix) {
            LauncherKind::Fork
        } else {
            LauncherKind::Spawn
        }
    }
}

impl LauncherKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fork" => Some(LauncherKind::Fork),
            "spawn" => Some(LauncherKind::Spawn),
            _ => None,
        }
    }

    /// Build the launcher. `Fork` on a non-unix host falls back to `Spawn`.
    pub fn build(self) -> Box<dyn Launcher> {
        match self {
            #[cfg(unix)]
            LauncherKind::Fork => Box::new(ForkLauncher::new()),
            #[cfg(not(unix))]
            LauncherKind::Fork => {
                tracing::warn!("fork launcher is unavailable on this platform, using spawn");
                Box::new(SpawnLauncher::new())
            }
            LauncherKind::Spawn => Box::new(SpawnLauncher::new()),
        }
    }
}

/// Token 0 of the invocation and its printable form, rejecting blank input.
fn program(invocation: &Invocation) -> Result<(&OsStr, String), LaunchError> {
    let program = invocation.program().ok_or(LaunchError::MissingCommand)?;
    Ok((program, program.to_string_lossy().into_owned()))
}

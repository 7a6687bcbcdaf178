use super::{LaunchError, Launcher, Termination, program};
use crate::parse::Invocation;
use std::io;
use std::process::Command;
use tracing::debug;

/// Portable launcher built on `std::process::Command`.
///
/// Exec failures (unknown command, permission denied) surface in the parent as
/// spawn errors. `Child::wait` does not report stopped children, so it only
/// returns once the child has terminated.
pub struct SpawnLauncher {}

impl SpawnLauncher {
    pub fn new() -> Self {
        SpawnLauncher {}
    }
}

impl Launcher for SpawnLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<Termination, LaunchError> {
        let (program, command) = program(invocation)?;

        let mut child = Command::new(program)
            .args(invocation.args())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                command: command.clone(),
                source,
            })?;
        debug!(pid = child.id(), command = %command, "spawned child");

        let status = child.wait().map_err(|source| LaunchError::Wait {
            command: command.clone(),
            source,
        })?;

        Termination::from_exit_status(status).ok_or_else(|| LaunchError::Wait {
            command,
            source: io::Error::other(format!("no exit status in {status}")),
        })
    }
}

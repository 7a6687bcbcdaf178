//! Builtin commands, external process launching and the dispatcher between them.

pub mod builtin;
pub mod cd;
pub mod exit;
pub mod help;
pub mod launch;

use crate::control_state::ControlFlow;
use crate::parse::Invocation;
use crate::process::builtin::map::BuiltinMap;
use crate::process::launch::{Launcher, Termination};
use std::io::Write;
use tracing::debug;

/// Output and error sinks handed to builtins and launch diagnostics.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }
}

/// What the dispatcher did with one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line, nothing ran.
    Blank,
    /// A builtin handled the line and returned this signal.
    Builtin(ControlFlow),
    /// An external program was attempted. `None` means it never ran or could not be reaped.
    External(Option<Termination>),
}

impl Outcome {
    /// The continuation signal for the control loop. Only a builtin can stop it.
    pub fn flow(&self) -> ControlFlow {
        match self {
            Outcome::Builtin(flow) => *flow,
            Outcome::Blank | Outcome::External(_) => ControlFlow::CONTINUE,
        }
    }
}

/// Execute a command, dispatching to builtins or spawning external processes.
pub fn execute(
    builtin_map: &BuiltinMap,
    launcher: &dyn Launcher,
    invocation: &Invocation,
    streams: &mut Streams<'_>,
) -> Outcome {
    let Some(program) = invocation.program() else {
        return Outcome::Blank;
    };

    let command = program.to_string_lossy();

    // Determine if command is builtin, and call function
    if let Some(builtin) = invocation.name().and_then(|name| builtin_map.get(name)) {
        debug!(%command, "dispatching to builtin");
        return Outcome::Builtin(builtin.call(invocation, builtin_map, streams));
    }

    // Builtin output must land before anything the child writes.
    let _ = streams.out.flush();

    debug!(%command, "launching external command");
    match launcher.launch(invocation) {
        Ok(termination) => {
            debug!(%command, %termination, "child terminated");
            Outcome::External(Some(termination))
        }
        Err(err) => {
            debug!(%command, error = %err, "launch failed");
            let _ = writeln!(streams.err, "lsh: {err}");
            Outcome::External(None)
        }
    }
}

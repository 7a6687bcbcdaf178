use crate::control_state::ControlFlow;
use crate::parse::Invocation;
use crate::process::Streams;
use crate::process::builtin::{Builtin, BuiltinMap};
use std::env;
use std::path::Path;
use tracing::debug;

/// Changes the interpreter's working directory. Takes exactly one operand.
///
/// Failures are reported on the error stream and never stop the loop.
pub struct Cd {}

impl Builtin for Cd {
    fn call(
        &self,
        invocation: &Invocation,
        _builtin_map: &BuiltinMap,
        streams: &mut Streams<'_>,
    ) -> ControlFlow {
        match invocation.args() {
            [] => {
                let _ = writeln!(streams.err, "lsh: expected argument to \"cd\"");
            }
            [target] => {
                let path = Path::new(target);
                match env::set_current_dir(path) {
                    Ok(()) => debug!(path = %path.display(), "changed working directory"),
                    Err(e) => {
                        let _ = writeln!(streams.err, "lsh: cd: {}: {}", path.display(), e);
                    }
                }
            }
            _ => {
                let _ = writeln!(streams.err, "lsh: cd: too many arguments");
            }
        }
        ControlFlow::CONTINUE
    }

    fn summary(&self) -> &'static str {
        "cd DIR    change the working directory to DIR"
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd {}
    }
}

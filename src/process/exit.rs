use crate::control_state::ControlFlow;
use crate::parse::Invocation;
use crate::process::Streams;
use crate::process::builtin::{Builtin, BuiltinMap};

/// Implements the `exit` builtin, allowing the shell to terminate cleanly.
pub struct Exit {}

impl Builtin for Exit {
    /// Always stop the control loop. Arguments are ignored.
    fn call(
        &self,
        _invocation: &Invocation,
        _builtin_map: &BuiltinMap,
        _streams: &mut Streams<'_>,
    ) -> ControlFlow {
        ControlFlow::STOP
    }

    fn summary(&self) -> &'static str {
        "exit      leave the interpreter"
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}

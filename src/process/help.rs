use crate::control_state::ControlFlow;
use crate::parse::Invocation;
use crate::process::Streams;
use crate::process::builtin::{Builtin, BuiltinMap};
use std::io::{self, Write};
use tracing::warn;

/// Builtin that prints usage text for the shell.
pub struct Help {}

impl Builtin for Help {
    /// Print the builtins of the table `help` was dispatched from. Arguments are ignored.
    fn call(
        &self,
        _invocation: &Invocation,
        builtin_map: &BuiltinMap,
        streams: &mut Streams<'_>,
    ) -> ControlFlow {
        if let Err(err) = write_usage(streams.out, builtin_map) {
            warn!(error = %err, "unable to write help text");
        }
        ControlFlow::CONTINUE
    }

    fn summary(&self) -> &'static str {
        "help      show this text"
    }
}

impl Help {
    /// Create a new help builtin instance.
    pub fn new() -> Self {
        Help {}
    }
}

/// Write the usage banner followed by every builtin in `builtin_map`.
pub fn write_usage(out: &mut dyn Write, builtin_map: &BuiltinMap) -> io::Result<()> {
    writeln!(out, "lsh")?;
    writeln!(out, "Type program names and arguments, and hit enter.")?;
    writeln!(out, "The following are built in:")?;
    for (_, builtin) in builtin_map.iter() {
        writeln!(out, "  {}", builtin.summary())?;
    }
    writeln!(out, "Use the man command for information on other programs.")
}

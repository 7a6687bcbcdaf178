pub mod map;

use crate::control_state::ControlFlow;
use crate::parse::Invocation;
use crate::process::Streams;

pub use map::{BUILTINS, BuiltinMap};

/// A command handled inside the interpreter instead of by an external program.
///
/// `builtin_map` is the table the command was dispatched from.
pub trait Builtin: Send + Sync {
    fn call(
        &self,
        invocation: &Invocation,
        builtin_map: &BuiltinMap,
        streams: &mut Streams<'_>,
    ) -> ControlFlow;

    /// One-line description shown by `help`.
    fn summary(&self) -> &'static str;
}

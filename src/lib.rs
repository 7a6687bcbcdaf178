//! `lsh`: a minimal interactive command interpreter.
//!
//! Each line read from standard input is split on whitespace into a command
//! name and arguments. The name is looked up among the builtins (`cd`, `help`,
//! `exit`); anything else is run as an external program found through `PATH`,
//! and the interpreter blocks until it terminates before prompting again.
//!
//! [`control::control_loop`] runs the whole thing on the process's standard
//! streams. [`control_state::ControlState`] handles one line at a time and is
//! what tests and embedders drive directly.

pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod logging;
pub mod parse;
pub mod process;

//! State machine backing the interactive control loop.

use crate::conf::ConfigurationModel;
use crate::parse::Invocation;
use crate::process::builtin::{BUILTINS, BuiltinMap};
use crate::process::launch::{Launcher, LauncherKind, Termination};
use crate::process::{self, Outcome, Streams};
use tracing::trace;

/// Prompt written before every read unless the configuration overrides it.
pub const DEFAULT_PROMPT: &str = "> ";

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading user input.
    CONTINUE,
    /// Terminate the control loop.
    STOP,
}

/// Everything one loop iteration needs: the builtin table, the launcher and the prompt.
pub struct ControlState {
    builtin_map: &'static BuiltinMap,
    launcher: Box<dyn Launcher>,
    prompt: String,
    last_termination: Option<Termination>,
}

impl ControlState {
    /// Build a new control state with the default builtins and launcher.
    pub fn new() -> Self {
        Self::with_launcher(LauncherKind::default().build())
    }

    /// Build a control state from a loaded configuration.
    pub fn from_config(config: &ConfigurationModel) -> Self {
        let mut state = Self::with_launcher(config.process.launcher_kind().build());
        state.prompt = config.control.prompt().to_string();
        state
    }

    pub fn with_launcher(launcher: Box<dyn Launcher>) -> Self {
        Self {
            builtin_map: &BUILTINS,
            launcher,
            prompt: DEFAULT_PROMPT.to_string(),
            last_termination: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// How the most recent external command ended, if one has run to completion.
    pub fn last_termination(&self) -> Option<Termination> {
        self.last_termination
    }

    /// Tokenize and dispatch a single line of user input.
    pub fn handle_line(&mut self, line: impl AsRef<[u8]>, streams: &mut Streams<'_>) -> ControlFlow {
        let invocation = Invocation::parse(line);
        trace!(tokens = ?invocation.argv(), "tokenized line");

        let outcome = process::execute(
            self.builtin_map,
            self.launcher.as_ref(),
            &invocation,
            streams,
        );

        if let Outcome::External(termination) = outcome {
            self.last_termination = termination;
        }

        outcome.flow()
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

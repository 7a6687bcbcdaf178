//! The read, dispatch, repeat loop.

use crate::conf::ConfigurationModel;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::{ShellError, ShellResult};
use crate::process::Streams;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// A source of input lines for the control loop.
pub trait LineSource {
    /// Show `prompt` and return the next line's raw bytes, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<Vec<u8>>>;
}

/// Reads lines from any buffered reader, writing the prompt to `prompt_out`.
pub struct ReaderSource<R, W> {
    reader: R,
    prompt_out: W,
}

/// The interactive source: prompt on stdout, lines from stdin.
pub type StdinSource = ReaderSource<StdinLock<'static>, Stdout>;

impl StdinSource {
    pub fn stdin() -> Self {
        ReaderSource::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderSource<R, W> {
    fn read_line(&mut self, prompt: &str) -> ShellResult<Option<Vec<u8>>> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|()| self.prompt_out.flush())
            .map_err(ShellError::Prompt)?;

        let mut buffer = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buffer)
            .map_err(ShellError::Read)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}

/// Drive `control_state` until `exit` or end of input.
///
/// Only a failure to read input or write the prompt is returned as an error;
/// every command-level failure has already been reported by then.
pub fn run_loop_with_source(
    control_state: &mut ControlState,
    source: &mut dyn LineSource,
    streams: &mut Streams<'_>,
) -> ShellResult<()> {
    loop {
        let Some(line) = source.read_line(control_state.prompt())? else {
            debug!("end of input");
            return Ok(());
        };

        if control_state.handle_line(&line, streams) == ControlFlow::STOP {
            debug!("exit requested");
            return Ok(());
        }
    }
}

/// Run the interactive interpreter on the process's standard streams.
pub fn control_loop(config: &ConfigurationModel) -> ShellResult<()> {
    let mut control_state = ControlState::from_config(config);
    let mut source = StdinSource::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut streams = Streams::new(&mut stdout, &mut stderr);

    run_loop_with_source(&mut control_state, &mut source, &mut streams)
}

use lsh::{conf, control, logging};
use std::process::ExitCode;

/// Entry point that starts the control loop.
fn main() -> ExitCode {
    let config = conf::load();
    if let Err(err) = logging::init(&config) {
        eprintln!("Warning: {err}");
    }

    match control::control_loop(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lsh: {err}");
            ExitCode::FAILURE
        }
    }
}

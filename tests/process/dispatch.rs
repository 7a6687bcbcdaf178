use crate::support::{Capture, invocation};
use lsh::control_state::ControlFlow;
use lsh::parse::Invocation;
use lsh::process::builtin::{BUILTINS, Builtin, BuiltinMap};
use lsh::process::launch::{LaunchError, Launcher, Termination};
use lsh::process::{Outcome, Streams, execute};
use std::cell::RefCell;
use std::ffi::OsString;
use std::io::{self, Write};

fn lossy(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Records every invocation it is asked to launch and reports a fixed result.
struct RecordingLauncher {
    launched: RefCell<Vec<Vec<String>>>,
    result: Option<Termination>,
}

impl RecordingLauncher {
    fn exiting_with(code: i32) -> Self {
        Self {
            launched: RefCell::new(Vec::new()),
            result: Some(Termination::Exited(code)),
        }
    }

    /// Every launch fails as if the program did not exist.
    fn failing() -> Self {
        Self {
            launched: RefCell::new(Vec::new()),
            result: None,
        }
    }

    fn launched(&self) -> Vec<Vec<String>> {
        self.launched.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<Termination, LaunchError> {
        let argv = lossy(invocation.argv());
        let command = argv[0].clone();
        self.launched.borrow_mut().push(argv);
        self.result.ok_or_else(|| LaunchError::Spawn {
            command,
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}

/// A builtin that writes its arguments, for checking what the dispatcher passes on.
struct Echo;

impl Builtin for Echo {
    fn call(
        &self,
        invocation: &Invocation,
        _builtin_map: &BuiltinMap,
        streams: &mut Streams<'_>,
    ) -> ControlFlow {
        writeln!(streams.out, "{}", lossy(invocation.argv()).join("|")).unwrap();
        ControlFlow::CONTINUE
    }

    fn summary(&self) -> &'static str {
        "echo"
    }
}

#[test]
fn blank_input_runs_nothing() {
    let launcher = RecordingLauncher::exiting_with(0);
    let mut capture = Capture::default();

    for line in ["", "   ", "\t\r\n"] {
        let outcome = execute(
            &BUILTINS,
            &launcher,
            &Invocation::parse(line),
            &mut capture.streams(),
        );
        assert_eq!(outcome, Outcome::Blank);
        assert_eq!(outcome.flow(), ControlFlow::CONTINUE);
    }

    assert!(launcher.launched().is_empty());
    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
}

#[test]
fn builtins_receive_the_full_invocation() {
    let mut builtin_map = BuiltinMap::new();
    builtin_map.add("echo", Echo);
    let launcher = RecordingLauncher::exiting_with(0);
    let mut capture = Capture::default();

    let outcome = execute(
        &builtin_map,
        &launcher,
        &Invocation::parse("  echo  a\tb  "),
        &mut capture.streams(),
    );

    assert_eq!(outcome, Outcome::Builtin(ControlFlow::CONTINUE));
    assert_eq!(capture.out_text(), "echo|a|b\n");
    assert!(launcher.launched().is_empty());
}

#[test]
fn exit_stops_without_launching() {
    let launcher = RecordingLauncher::exiting_with(0);
    let mut capture = Capture::default();

    let outcome = execute(
        &BUILTINS,
        &launcher,
        &invocation(&["exit", "now", "please"]),
        &mut capture.streams(),
    );

    assert_eq!(outcome.flow(), ControlFlow::STOP);
    assert!(launcher.launched().is_empty());
}

#[test]
fn builtin_names_are_case_sensitive() {
    let launcher = RecordingLauncher::exiting_with(0);
    let mut capture = Capture::default();

    let outcome = execute(
        &BUILTINS,
        &launcher,
        &invocation(&["EXIT"]),
        &mut capture.streams(),
    );

    assert_eq!(outcome, Outcome::External(Some(Termination::Exited(0))));
    assert_eq!(launcher.launched(), vec![vec!["EXIT".to_string()]]);
}

#[test]
fn other_commands_go_to_the_launcher_with_argv() {
    let launcher = RecordingLauncher::exiting_with(42);
    let mut capture = Capture::default();

    let outcome = execute(
        &BUILTINS,
        &launcher,
        &Invocation::parse("ls -la /tmp\n"),
        &mut capture.streams(),
    );

    assert_eq!(outcome, Outcome::External(Some(Termination::Exited(42))));
    assert_eq!(outcome.flow(), ControlFlow::CONTINUE);
    assert_eq!(
        launcher.launched(),
        vec![vec!["ls".to_string(), "-la".to_string(), "/tmp".to_string()]]
    );
}

#[test]
fn launch_failures_are_reported_and_continue() {
    let launcher = RecordingLauncher::failing();
    let mut capture = Capture::default();

    let outcome = execute(
        &BUILTINS,
        &launcher,
        &invocation(&["ghost"]),
        &mut capture.streams(),
    );

    assert_eq!(outcome, Outcome::External(None));
    assert_eq!(outcome.flow(), ControlFlow::CONTINUE);
    let err = capture.err_text();
    assert!(err.starts_with("lsh: ghost: "), "unexpected diagnostic: {err}");
}

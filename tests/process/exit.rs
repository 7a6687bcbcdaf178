use crate::support::{Capture, invocation};
use lsh::control_state::ControlFlow;
use lsh::process::builtin::{BUILTINS, Builtin};
use lsh::process::exit::Exit;

#[test]
fn exit_stops_regardless_of_arguments() {
    let mut capture = Capture::default();
    for tokens in [&["exit"][..], &["exit", "0"][..], &["exit", "1", "2", "three"][..]] {
        assert_eq!(
            Exit::new().call(&invocation(tokens), &BUILTINS, &mut capture.streams()),
            ControlFlow::STOP
        );
    }
    assert!(capture.out.is_empty());
    assert!(capture.err.is_empty());
}

#[test]
fn exit_is_registered() {
    let builtin = BUILTINS.get("exit").expect("exit builtin");
    let mut capture = Capture::default();
    assert_eq!(
        builtin.call(&invocation(&["exit"]), &BUILTINS, &mut capture.streams()),
        ControlFlow::STOP
    );
}

use super::{LaunchError, Launcher, Termination, program};
use crate::parse::Invocation;
use nix::errno::Errno;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork, write};
use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::ptr;
use tracing::{debug, trace};

/// Status a child exits with when its program image could not be replaced.
pub const EXEC_FAILURE_STATUS: i32 = 1;

/// Launcher that forks, replaces the child image with `execvp` and reaps it with `waitpid`.
///
/// When `execvp` fails the child prints `lsh: <command>: <reason>` to its own
/// stderr and exits with [`EXEC_FAILURE_STATUS`]; the parent sees an ordinary
/// exit. Only fork and wait failures come back as errors.
pub struct ForkLauncher {}

impl ForkLauncher {
    pub fn new() -> Self {
        ForkLauncher {}
    }
}

impl Launcher for ForkLauncher {
    fn launch(&self, invocation: &Invocation) -> Result<Termination, LaunchError> {
        let (_, command) = program(invocation)?;

        // The child must not allocate, so argv is fully built here.
        let argv = invocation
            .argv()
            .iter()
            .map(|arg| CString::new(arg.as_bytes()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| LaunchError::InvalidArgument {
                command: command.clone(),
            })?;
        let mut argv_ptrs: Vec<*const libc::c_char> =
            argv.iter().map(|arg| arg.as_ptr()).collect();
        argv_ptrs.push(ptr::null());
        let prefix = format!("lsh: {command}: ");

        // SAFETY: between fork and exec the child only reads memory prepared
        // above and calls execvp(3), write(2) and _exit(2), none of which allocate.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => unsafe { exec_child(&argv_ptrs, prefix.as_bytes()) },
            Ok(ForkResult::Parent { child }) => {
                debug!(pid = child.as_raw(), command = %command, "forked child");
                wait_for_termination(child).map_err(|errno| LaunchError::Wait {
                    command,
                    source: errno.into(),
                })
            }
            Err(errno) => Err(LaunchError::Fork {
                command,
                source: errno.into(),
            }),
        }
    }
}

/// Replace the child image, or report why not and exit without unwinding.
///
/// # Safety
///
/// Must only be called in a freshly forked child. `argv` must be a
/// null-terminated array of pointers to C strings that outlive the call.
unsafe fn exec_child(argv: &[*const libc::c_char], prefix: &[u8]) -> ! {
    // SAFETY: argv[0] and the array itself satisfy execvp's contract per the caller.
    unsafe { libc::execvp(argv[0], argv.as_ptr()) };
    let errno = Errno::last();

    let stderr = io::stderr();
    let _ = write(&stderr, prefix);
    let _ = write(&stderr, errno.desc().as_bytes());
    let _ = write(&stderr, b"\n");
    // SAFETY: _exit skips atexit handlers and stdio flushing, which belong to the parent.
    unsafe { libc::_exit(EXEC_FAILURE_STATUS) }
}

/// Block until `child` exits or is killed. Stops and continues are not terminal.
fn wait_for_termination(child: Pid) -> Result<Termination, Errno> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(Termination::Exited(code)),
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                return Ok(Termination::Signaled(signal as i32));
            }
            Ok(WaitStatus::Stopped(_, signal)) => {
                debug!(pid = child.as_raw(), ?signal, "child stopped, still waiting");
            }
            Ok(status) => trace!(pid = child.as_raw(), ?status, "non-terminal wait status"),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(errno),
        }
    }
}

//! Child-process launcher for the `dexter-agent` executable.
//!
//! The launcher is a single linear sequence: resolve the agent binary
//! through the normal PATH lookup, spawn it with the forwarded argument
//! vector, block until it terminates, and report its status. Standard
//! streams are inherited file descriptors, so stream forwarding is done
//! by the operating system rather than by any copy loop here.

use crate::error::{LauncherError, Result};
use crate::exit_codes;
use std::ffi::{OsStr, OsString};
use std::process::{Command, ExitStatus, Stdio};

/// Name of the external executable the launcher dispatches to.
pub const AGENT_PROGRAM: &str = "dexter-agent";

/// Spawn `dexter-agent` with `args` forwarded verbatim and wait for it.
///
/// Returns the exit code the calling process should terminate with. On a
/// normal child exit that is the child's own code; a signal death maps to
/// 128 + signal (Unix). Arguments are opaque `OsString`s, so non-UTF-8
/// values pass through untouched.
pub fn run(args: &[OsString]) -> Result<i32> {
    run_program(OsStr::new(AGENT_PROGRAM), args)
}

/// Spawn an arbitrary program with inherited standard streams.
///
/// Split out from [`run`] so tests can point at stub executables by
/// absolute path without touching the process-global PATH.
pub(crate) fn run_program(program: &OsStr, args: &[OsString]) -> Result<i32> {
    // Direct argv spawn, never shell-mediated: arguments are passed as
    // discrete elements, so no quoting layer can reinterpret them.
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LauncherError::Spawn {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

    let status = child.wait().map_err(|source| LauncherError::Wait {
        program: program.to_string_lossy().into_owned(),
        source,
    })?;

    Ok(exit_code_for(status))
}

/// Map a child's `ExitStatus` to the code this process should exit with.
#[cfg(unix)]
fn exit_code_for(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    if let Some(code) = status.code() {
        code
    } else if let Some(signal) = status.signal() {
        exit_codes::SIGNAL_BASE + signal
    } else {
        exit_codes::FAILURE
    }
}

#[cfg(not(unix))]
fn exit_code_for(status: ExitStatus) -> i32 {
    status.code().unwrap_or(exit_codes::FAILURE)
}

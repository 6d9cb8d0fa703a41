//! Exit code constants for the `dexter` launcher.
//!
//! The launcher mirrors the child's exit code whenever the child exits
//! normally, so these constants only cover the launcher's own failure
//! paths and the signal-death mapping:
//! - 0: success (child exited 0)
//! - 1: unknown termination reason or wait failure
//! - 126: `dexter-agent` was found but could not be started
//! - 127: `dexter-agent` was not found on PATH
//! - 128 + N: child was killed by signal N

/// Successful execution (child exited 0).
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// Unknown child termination reason, or waiting on the child failed.
pub const FAILURE: i32 = 1;

/// The executable was found but could not be started (e.g. not executable).
pub const NOT_EXECUTABLE: i32 = 126;

/// The executable could not be found on the search path.
pub const NOT_FOUND: i32 = 127;

/// Base added to the signal number when the child dies to a signal.
pub const SIGNAL_BASE: i32 = 128;

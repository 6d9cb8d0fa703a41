//! Error types for the `dexter` launcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for launcher operations.
///
/// Each variant maps to a specific exit code via [`LauncherError::exit_code`].
/// Everything past a successful spawn-and-wait mirrors the child's own status
/// and never becomes an error.
#[derive(Error, Debug)]
pub enum LauncherError {
    /// The child executable could not be located or started.
    #[error("failed to launch '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    /// Waiting on the spawned child failed.
    #[error("failed to wait for '{program}': {source}")]
    Wait { program: String, source: io::Error },
}

impl LauncherError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// A missing executable maps to 127 and a present-but-unstartable one
    /// to 126, matching the shell conventions for the same failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::Spawn { source, .. } => {
                if source.kind() == io::ErrorKind::NotFound {
                    exit_codes::NOT_FOUND
                } else {
                    exit_codes::NOT_EXECUTABLE
                }
            }
            LauncherError::Wait { .. } => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

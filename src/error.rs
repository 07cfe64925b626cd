//! Error types for the login-shell trampoline.
//!
//! Every failure is reported to the caller as a value; the caller decides to
//! carry on as a non-login shell.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while attempting a login start.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The kernel refused a process-information query.
    #[error("Kernel query '{query}' failed: {source}")]
    KernelQuery {
        query: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The kernel argument blob ended early or had an unexpected shape.
    #[error("Malformed process arguments: {reason}")]
    MalformedProcArgs { reason: String },

    /// The buffer for the kernel argument blob could not be allocated.
    #[error("Failed to allocate {bytes} bytes for process arguments: {source}")]
    Allocation {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    /// Replacing the process image with the login shell failed.
    #[error("Failed to exec login shell '{}': {source}", .shell.display())]
    Exec {
        shell: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process replacement is not available on this platform.
    #[error("Login shell re-exec is not supported on this platform")]
    Unsupported,
}

impl LoginError {
    /// Non-zero status code handed back across the startup boundary.
    pub fn status(&self) -> i32 {
        match self {
            LoginError::KernelQuery { .. } => 1,
            LoginError::MalformedProcArgs { .. } => 2,
            LoginError::Allocation { .. } => 3,
            LoginError::Exec { .. } => 4,
            LoginError::Unsupported => 5,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        LoginError::MalformedProcArgs {
            reason: reason.into(),
        }
    }
}

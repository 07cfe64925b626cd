//! Recovering the invocation as the kernel recorded it.
//!
//! On macOS the process's own argv may already have been rewritten by the
//! time we run, so the executable path and argv[0] are read from
//! `kern.procargs2`. Elsewhere the program's own argv and
//! `std::env::current_exe()` are used.

pub mod blob;
#[cfg(target_os = "macos")]
mod kernel;

use std::path::PathBuf;

use crate::error::LoginError;

/// The executable path and argv[0] shape of the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInvocation {
    /// Path the shell must be re-launched from.
    pub executable: PathBuf,
    /// First byte of argv[0]; `-` marks a login shell.
    pub argv0_first: Option<u8>,
}

impl ResolvedInvocation {
    pub fn has_login_dash(&self) -> bool {
        self.argv0_first == Some(b'-')
    }
}

/// Source of the resolved invocation.
pub trait ArgResolver {
    fn resolve(&self) -> Result<ResolvedInvocation, LoginError>;
}

/// Resolver for the platform the crate was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformResolver;

impl ArgResolver for PlatformResolver {
    #[cfg(target_os = "macos")]
    fn resolve(&self) -> Result<ResolvedInvocation, LoginError> {
        let raw = kernel::read_procargs()?;
        let args = blob::parse(&raw)?;
        Ok(ResolvedInvocation {
            argv0_first: args.argv0_first(),
            executable: args.executable,
        })
    }

    #[cfg(not(target_os = "macos"))]
    fn resolve(&self) -> Result<ResolvedInvocation, LoginError> {
        let executable = std::env::current_exe().map_err(|source| LoginError::KernelQuery {
            query: "current_exe",
            source,
        })?;
        let argv0_first = std::env::args_os()
            .next()
            .and_then(|a| a.as_encoded_bytes().first().copied());
        Ok(ResolvedInvocation {
            executable,
            argv0_first,
        })
    }
}

//! Re-exec trampoline: guard → resolve → classify → exec.
//!
//! Runs once, first thing at startup. It either returns (carry on as a
//! normal shell) or replaces the process with a login shell that launches
//! this same executable again with the same arguments.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::args::{classify, DecisionReason};
use crate::error::LoginError;
use crate::exec::{default_login_shell, ExecReplacer, LoginCommand, ProcessReplacer};
use crate::guard::{GuardState, RecursionGuard};
use crate::procargs::{ArgResolver, PlatformResolver};

/// Why the trampoline returned instead of replacing the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupOutcome {
    /// This process is the target of an earlier re-exec.
    AlreadyReexeced,
    /// The invocation is not a login shell.
    NotLogin(DecisionReason),
}

/// The trampoline with its platform seams.
pub struct Trampoline<R = PlatformResolver, P = ExecReplacer> {
    guard: RecursionGuard,
    shell: PathBuf,
    resolver: R,
    replacer: P,
}

impl Trampoline {
    /// Trampoline for this platform, guarded by `guard_name`.
    pub fn new(guard_name: impl Into<String>) -> Self {
        Self {
            guard: RecursionGuard::new(guard_name),
            shell: default_login_shell().to_owned(),
            resolver: PlatformResolver,
            replacer: ExecReplacer,
        }
    }
}

impl<R: ArgResolver, P: ProcessReplacer> Trampoline<R, P> {
    /// Override the login shell.
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Swap the argument resolver.
    pub fn with_resolver<R2: ArgResolver>(self, resolver: R2) -> Trampoline<R2, P> {
        Trampoline {
            guard: self.guard,
            shell: self.shell,
            resolver,
            replacer: self.replacer,
        }
    }

    /// Swap the process replacer.
    pub fn with_replacer<P2: ProcessReplacer>(self, replacer: P2) -> Trampoline<R, P2> {
        Trampoline {
            guard: self.guard,
            shell: self.shell,
            resolver: self.resolver,
            replacer,
        }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn replacer(&self) -> &P {
        &self.replacer
    }

    /// Run the trampoline over argv[1..].
    ///
    /// `Ok` means "continue normal startup". With the real replacer a login
    /// invocation never comes back unless the exec failed.
    pub fn run<S: AsRef<OsStr>>(&mut self, args: &[S]) -> Result<StartupOutcome, LoginError> {
        if self.guard.check_and_arm() == GuardState::AlreadyArmed {
            return Ok(StartupOutcome::AlreadyReexeced);
        }

        let invocation = self.resolver.resolve()?;
        tracing::debug!(
            executable = %invocation.executable.display(),
            argv0_dash = invocation.has_login_dash(),
            "resolved invocation"
        );

        let decision = classify(invocation.argv0_first, args);
        if !decision.is_login {
            tracing::debug!(reason = ?decision.reason, "not a login invocation");
            return Ok(StartupOutcome::NotLogin(decision.reason));
        }

        let command = LoginCommand::new(&self.shell, &invocation.executable, args);
        tracing::info!(
            shell = %command.shell.display(),
            reason = ?decision.reason,
            "re-executing through login shell"
        );
        Err(self.replacer.replace(&command))
    }

    /// [`run`](Self::run) reduced to a status code: 0 to continue normal
    /// startup, [`LoginError::status`] when the attempt failed.
    pub fn attempt<S: AsRef<OsStr>>(&mut self, args: &[S]) -> i32 {
        match self.run(args) {
            Ok(_) => 0,
            Err(e) => {
                tracing::warn!("login start failed: {}", e);
                e.status()
            }
        }
    }
}

/// Typed entry point: run the platform trampoline for `args` (argv[1..]).
pub fn login_start<S: AsRef<OsStr>>(
    guard_name: &str,
    shell: Option<&Path>,
    args: &[S],
) -> Result<StartupOutcome, LoginError> {
    let mut trampoline = Trampoline::new(guard_name);
    if let Some(shell) = shell {
        trampoline = trampoline.with_shell(shell);
    }
    trampoline.run(args)
}

/// Status-code entry point.
///
/// Returns 0 to continue normal startup and a non-zero [`LoginError::status`]
/// when the attempt failed; the caller should still start as a non-login
/// shell. Does not return when the re-exec succeeds.
pub fn attempt_login_start<S: AsRef<OsStr>>(guard_name: &str, args: &[S]) -> i32 {
    Trampoline::new(guard_name).attempt(args)
}

//! Replacing the current process with a login shell that re-launches us.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::LoginError;

/// Script the login shell runs: become the original executable with the
/// original arguments (`$0` and `$@` are filled from the trailing args).
pub const EXEC_SCRIPT: &str = r#"exec "$0" "$@""#;

/// Default login shell for this platform.
pub fn default_login_shell() -> &'static Path {
    if cfg!(target_os = "macos") {
        Path::new("/bin/zsh")
    } else {
        Path::new("/bin/sh")
    }
}

/// Fully materialised login-shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCommand {
    pub shell: PathBuf,
    pub args: Vec<OsString>,
}

impl LoginCommand {
    /// `<shell> -l -c 'exec "$0" "$@"' <executable> <args...>`
    pub fn new<S: AsRef<OsStr>>(shell: &Path, executable: &Path, args: &[S]) -> Self {
        let mut argv: Vec<OsString> = Vec::with_capacity(args.len() + 4);
        argv.push("-l".into());
        argv.push("-c".into());
        argv.push(EXEC_SCRIPT.into());
        argv.push(executable.as_os_str().to_owned());
        argv.extend(args.iter().map(|a| a.as_ref().to_owned()));
        Self {
            shell: shell.to_owned(),
            args: argv,
        }
    }

    /// The arguments the original executable will receive again.
    pub fn forwarded_args(&self) -> &[OsString] {
        &self.args[4..]
    }
}

/// Replaces the process image.
pub trait ProcessReplacer {
    /// Only returns if the replacement failed.
    fn replace(&mut self, command: &LoginCommand) -> LoginError;
}

/// `execv` through `std::os::unix::process::CommandExt::exec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecReplacer;

impl ProcessReplacer for ExecReplacer {
    #[cfg(unix)]
    fn replace(&mut self, command: &LoginCommand) -> LoginError {
        use std::os::unix::process::CommandExt;

        let source = std::process::Command::new(&command.shell)
            .args(&command.args)
            .exec();
        LoginError::Exec {
            shell: command.shell.clone(),
            source,
        }
    }

    #[cfg(not(unix))]
    fn replace(&mut self, _command: &LoginCommand) -> LoginError {
        LoginError::Unsupported
    }
}

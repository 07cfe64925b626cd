//! Login-shell startup trampoline for the `pwsh` command-line shell.
//!
//! Decides once, at process start, whether the invocation is a login shell
//! and if so replaces the process with the platform login shell wrapping
//! the original executable and arguments.

pub mod args;
pub mod config;
pub mod error;
pub mod exec;
pub mod guard;
pub mod logging;
pub mod procargs;
pub mod trampoline;

pub use error::LoginError;
pub use trampoline::{attempt_login_start, login_start, StartupOutcome, Trampoline};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::exec::default_login_shell;

/// Default name of the recursion guard variable.
pub const DEFAULT_GUARD_VAR: &str = "__PWSH_LOGIN_CHECKED";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub login: LoginSettings,
}

/// Settings for the login-shell trampoline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginSettings {
    /// Environment variable used as the re-exec guard.
    pub guard_var: String,
    /// Login shell override (absolute path). Platform default when unset.
    pub shell: Option<PathBuf>,
}

impl LoginSettings {
    /// Shell to re-exec through.
    pub fn shell_path(&self) -> &Path {
        self.shell.as_deref().unwrap_or_else(|| default_login_shell())
    }
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            guard_var: DEFAULT_GUARD_VAR.to_string(),
            shell: None,
        }
    }
}

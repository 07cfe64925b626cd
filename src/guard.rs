//! Recursion guard across the process-replacement boundary.
//!
//! The re-exec'd process inherits the environment, so an armed guard tells
//! it that the login shell has already been put in front of it.

/// Value written to the guard variable. Presence is what counts.
pub const GUARD_SENTINEL: &str = "1";

/// Whether this process is the product of an earlier re-exec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The variable was inherited; it has now been cleared.
    AlreadyArmed,
    /// The variable was absent; it is now set for any child we exec.
    NotArmed,
}

/// Owns the name of the guard variable and every access to it.
///
/// The guard is left set after a non-login decision, so a nested `-Login`
/// started from that shell clears it and skips the re-exec. This is intended:
/// the variable means "already decided in this chain".
#[derive(Debug, Clone)]
pub struct RecursionGuard {
    name: String,
}

impl RecursionGuard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Is the guard variable present in this process's environment?
    pub fn is_armed(&self) -> bool {
        std::env::var_os(&self.name).is_some()
    }

    /// Set the guard variable so the next process image sees it.
    pub fn arm(&self) {
        std::env::set_var(&self.name, GUARD_SENTINEL);
    }

    /// Remove the guard variable so it doesn't leak into the shell's own children.
    pub fn disarm(&self) {
        std::env::remove_var(&self.name);
    }

    /// Clear an inherited guard, or arm a fresh one.
    pub fn check_and_arm(&self) -> GuardState {
        if self.is_armed() {
            self.disarm();
            tracing::debug!(guard = %self.name, "guard inherited, cleared");
            GuardState::AlreadyArmed
        } else {
            self.arm();
            tracing::debug!(guard = %self.name, "guard armed");
            GuardState::NotArmed
        }
    }
}

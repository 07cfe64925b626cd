//! Configuration file for the trampoline.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use types::{Config, LoginSettings, DEFAULT_GUARD_VAR};

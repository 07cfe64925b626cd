use std::ffi::OsString;

use pwsh_login::config::Config;
use pwsh_login::logging::init_tracing;
use pwsh_login::{login_start, StartupOutcome};
use serde::Serialize;

/// What the startup looked like once control came back to us.
#[derive(Debug, Serialize)]
struct StartupReport {
    outcome: &'static str,
    status: i32,
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}, using defaults", e);
        Config::default()
    });

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let settings = &config.login;
    let shell = settings.shell_path();

    let (outcome, status) = match login_start(&settings.guard_var, Some(shell), &args) {
        Ok(StartupOutcome::AlreadyReexeced) => ("reexeced", 0),
        Ok(StartupOutcome::NotLogin(_)) => ("not_login", 0),
        // Not fatal: carry on as a non-login shell.
        Err(e) => {
            tracing::warn!("login start failed: {}", e);
            ("failed", e.status())
        }
    };

    let report = StartupReport {
        outcome,
        status,
        args: args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect(),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

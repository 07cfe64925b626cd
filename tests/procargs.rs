//! Resolver round-trip against the running test process.
//!
//! Only macOS reads the kernel's copy of the arguments; elsewhere the
//! resolver is the program's own argv and is covered end to end in
//! `tests/startup.rs`.

#![cfg(target_os = "macos")]

use pwsh_login::procargs::{ArgResolver, PlatformResolver};

#[test]
fn resolved_executable_is_this_process() {
    let resolved = PlatformResolver.resolve().expect("resolve current process");

    let expected = std::env::current_exe().unwrap().canonicalize().unwrap();
    assert_eq!(resolved.executable.canonicalize().unwrap(), expected);
}

#[test]
fn resolved_argv0_matches_launch() {
    let resolved = PlatformResolver.resolve().unwrap();

    let argv0 = std::env::args_os().next().unwrap();
    assert_eq!(resolved.argv0_first, argv0.as_encoded_bytes().first().copied());
    assert!(!resolved.has_login_dash());
}

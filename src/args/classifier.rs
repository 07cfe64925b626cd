//! Argument classifier — raw args → login / not login.

use std::ffi::OsStr;

use crate::args::registry::{lookup, ParamDisposition};

/// Why the classifier reached its decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionReason {
    /// argv[0] starts with `-` (e.g. `-pwsh`), the classic login convention.
    Argv0Dash,
    /// `-Login` (or an accepted prefix) at this index.
    LoginFlag(usize),
    /// A token that can only be a script path at this index: empty, no
    /// leading dash, a lone `-` (stdin) or `-?`.
    ScriptLike(usize),
    /// File, command, version or help at this index.
    Disqualified(usize),
    /// Flag-shaped token that names no known parameter; treated as a filename.
    Unrecognized(usize),
    /// Input ended while the named parameter still expected its value.
    MissingValue(&'static str),
    /// Every argument was consumed without a decisive token.
    Exhausted,
}

/// Result of classifying an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginDecision {
    pub is_login: bool,
    pub reason: DecisionReason,
}

impl LoginDecision {
    fn login(reason: DecisionReason) -> Self {
        Self {
            is_login: true,
            reason,
        }
    }

    fn not_login(reason: DecisionReason) -> Self {
        Self {
            is_login: false,
            reason,
        }
    }
}

/// Decide whether this invocation is a login shell.
///
/// Single left-to-right pass over `args` (argv[1..]); each token is read
/// once. `argv0_first` is the first byte of the original argv[0].
pub fn classify<S: AsRef<OsStr>>(argv0_first: Option<u8>, args: &[S]) -> LoginDecision {
    if argv0_first == Some(b'-') {
        return LoginDecision::login(DecisionReason::Argv0Dash);
    }

    // Parameter whose value the next token is.
    let mut expecting: Option<&'static str> = None;

    for (index, arg) in args.iter().enumerate() {
        if expecting.take().is_some() {
            continue;
        }

        let arg = arg.as_ref().to_string_lossy();
        if is_script_like(&arg) {
            return LoginDecision::not_login(DecisionReason::ScriptLike(index));
        }

        let Some(def) = lookup(&arg) else {
            return LoginDecision::not_login(DecisionReason::Unrecognized(index));
        };

        match def.disposition {
            ParamDisposition::TriggersLogin => {
                return LoginDecision::login(DecisionReason::LoginFlag(index));
            }
            ParamDisposition::DisqualifiesLogin => {
                return LoginDecision::not_login(DecisionReason::Disqualified(index));
            }
            ParamDisposition::ConsumesArgument => expecting = Some(def.name),
            ParamDisposition::Benign => {}
        }
    }

    match expecting {
        Some(name) => LoginDecision::not_login(DecisionReason::MissingValue(name)),
        None => LoginDecision::not_login(DecisionReason::Exhausted),
    }
}

/// Tokens that start (or are) a script filename rather than a flag.
fn is_script_like(arg: &str) -> bool {
    let bytes = arg.as_bytes();
    bytes.first() != Some(&b'-') || bytes.len() == 1 || bytes[1] == b'?'
}

//! Parameter registry, the single source of truth for the shell flags that
//! matter to the login decision.

/// What a recognised parameter means for the login decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDisposition {
    /// `-Login`: the invocation is a login shell.
    TriggersLogin,
    /// File, command, version or help: never a login shell.
    DisqualifiesLogin,
    /// Takes a value that must be skipped, so it can't be mistaken for a script path.
    ConsumesArgument,
    /// Valid switch with no bearing on the decision.
    Benign,
}

/// Whether a parameter takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamArity {
    /// Switch, no value (e.g. `-NoLogo`).
    Zero,
    /// Requires exactly one value (e.g. `-ExecutionPolicy Bypass`).
    One,
}

/// A single parameter definition.
#[derive(Debug, Clone, Copy)]
pub struct ParamDef {
    /// Canonical lowercase name (e.g. "executionpolicy").
    pub name: &'static str,
    /// Shortest accepted prefix of `name` (e.g. "ex").
    pub min_prefix: &'static str,
    /// Short forms accepted only as exact matches (e.g. "ep").
    pub aliases: &'static [&'static str],
    pub arity: ParamArity,
    pub disposition: ParamDisposition,
}

/// How a token was matched against a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchStrength {
    /// Prefix of the canonical name; ranked by the minimum prefix length.
    Prefix(usize),
    /// Exact alias.
    Alias,
}

const fn def(
    name: &'static str,
    min_prefix: &'static str,
    aliases: &'static [&'static str],
    arity: ParamArity,
    disposition: ParamDisposition,
) -> ParamDef {
    ParamDef {
        name,
        min_prefix,
        aliases,
        arity,
        disposition,
    }
}

use ParamArity::{One, Zero};
use ParamDisposition::{Benign, ConsumesArgument, DisqualifiesLogin, TriggersLogin};

static REGISTRY: &[ParamDef] = &[
    def("login", "l", &[], Zero, TriggersLogin),
    // === Parameters that rule out a login shell ===
    def("file", "f", &[], One, DisqualifiesLogin),
    def("command", "c", &[], One, DisqualifiesLogin),
    def("version", "v", &[], Zero, DisqualifiesLogin),
    def("help", "h", &[], Zero, DisqualifiesLogin),
    // === Parameters whose value must be skipped ===
    def("configurationname", "config", &[], One, ConsumesArgument),
    def("custompipename", "cus", &[], One, ConsumesArgument),
    def("encodedcommand", "e", &["ec"], One, ConsumesArgument),
    def("executionpolicy", "ex", &["ep"], One, ConsumesArgument),
    def("inputformat", "in", &["if"], One, ConsumesArgument),
    def("outputformat", "o", &["of"], One, ConsumesArgument),
    def("settingsfile", "settings", &[], One, ConsumesArgument),
    def("windowstyle", "w", &[], One, ConsumesArgument),
    def("workingdirectory", "wo", &["wd"], One, ConsumesArgument),
    // === Switches that change nothing ===
    def("interactive", "i", &[], Zero, Benign),
    def("noexit", "noe", &[], Zero, Benign),
    def("nologo", "nol", &[], Zero, Benign),
    def("noninteractive", "noni", &[], Zero, Benign),
    def("noprofile", "nop", &[], Zero, Benign),
];

/// The complete, fixed parameter registry.
pub fn param_registry() -> &'static [ParamDef] {
    REGISTRY
}

impl ParamDef {
    /// Match a dash-stripped, lowercase key against this definition.
    fn match_key(&self, key: &str) -> Option<MatchStrength> {
        if self.aliases.iter().any(|a| *a == key) {
            return Some(MatchStrength::Alias);
        }
        if key.len() >= self.min_prefix.len() && self.name.starts_with(key) {
            return Some(MatchStrength::Prefix(self.min_prefix.len()));
        }
        None
    }

    /// Check if this definition accepts the given flag token (e.g. `-NoP`).
    pub fn matches(&self, token: &str) -> bool {
        flag_key(token).is_some_and(|key| self.match_key(&key).is_some())
    }
}

/// Strip the leading `-` (and an optional second one) and lowercase the rest.
///
/// Returns `None` for tokens that are not flag-shaped.
fn flag_key(token: &str) -> Option<String> {
    let rest = token.strip_prefix('-')?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    Some(rest.to_ascii_lowercase())
}

/// Resolve a flag token to the parameter it denotes.
///
/// Prefix sets overlap in a few places (`-in` is a prefix of both
/// `interactive` and `inputformat`); the definition with the longest
/// minimum prefix wins, and an exact alias beats any prefix match.
pub fn lookup(token: &str) -> Option<&'static ParamDef> {
    let key = flag_key(token)?;
    if key.is_empty() {
        return None;
    }
    REGISTRY
        .iter()
        .filter_map(|d| d.match_key(&key).map(|strength| (strength, d)))
        .max_by_key(|(strength, _)| *strength)
        .map(|(_, d)| d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_min_prefix_is_a_prefix_of_its_name() {
        for d in param_registry() {
            assert!(d.name.starts_with(d.min_prefix), "{}", d.name);
        }
    }

    #[test]
    fn arity_follows_disposition() {
        for d in param_registry() {
            let expected = match d.disposition {
                ConsumesArgument => One,
                Benign | TriggersLogin => Zero,
                DisqualifiesLogin if matches!(d.name, "file" | "command") => One,
                DisqualifiesLogin => Zero,
            };
            assert_eq!(d.arity, expected, "{}", d.name);
        }
    }

    #[test]
    fn every_accepted_form_resolves_to_its_own_definition() {
        for d in param_registry() {
            for end in d.min_prefix.len()..=d.name.len() {
                let token = format!("-{}", &d.name[..end]);
                let m = lookup(&token).expect(&token);
                // Only a more specific prefix rule may shadow a form.
                assert!(
                    m.name == d.name || m.min_prefix.len() > d.min_prefix.len(),
                    "{token} resolved to {}",
                    m.name
                );
            }
            for alias in d.aliases {
                let token = format!("-{alias}");
                assert_eq!(lookup(&token).map(|m| m.name), Some(d.name), "{token}");
            }
        }
    }
}

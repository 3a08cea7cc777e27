//! Parsing of `export` scripts printed by `brew shellenv` and `mise activate`.
//!
//! Those commands print shell code meant for `eval`. devboot cannot eval
//! shell code into its own process, so it extracts the `export NAME=value`
//! statements and expands the parameter references they contain.
//!
//! # Supported expansions
//!
//! - `$NAME` and `${NAME}`
//! - `${NAME-word}` and `${NAME:-word}` (default when unset / empty)
//! - `${NAME+word}` and `${NAME:+word}` (alternate when set / non-empty)
//!
//! `word` may itself hold one level of `${...}`, as in `${A:-${B}}`. Deeper
//! nesting is not matched.
//!
//! Statements other than `export` (conditionals, `fpath` edits) are ignored.
//!
//! # Example
//!
//! ```
//! use devboot::shell::parse_exports;
//!
//! let script = r#"export PATH="/opt/homebrew/bin${PATH+:$PATH}";"#;
//! let vars = parse_exports(script, |name| {
//!     (name == "PATH").then(|| "/usr/bin".to_string())
//! });
//! assert_eq!(vars, vec![("PATH".to_string(), "/opt/homebrew/bin:/usr/bin".to_string())]);
//! ```

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*export\s+([A-Za-z_][A-Za-z0-9_]*)=(.*?)\s*;?\s*$").unwrap()
});

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?:(:?[-+])((?:\$\{[^}]*\}|[^}])*))?\}|\$([A-Za-z_][A-Za-z0-9_]*)",
    )
    .unwrap()
});

/// Extract and expand every `export` statement in `script`.
///
/// `lookup` resolves variables from the current environment. Each export
/// is visible to the statements after it, as it would be under `eval`.
/// Returns `(name, value)` pairs in script order.
pub fn parse_exports<F>(script: &str, lookup: F) -> Vec<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let mut assigned: HashMap<String, String> = HashMap::new();
    let mut exports = Vec::new();

    for line in script.lines() {
        let Some(caps) = RE_EXPORT.captures(line) else {
            continue;
        };
        let name = caps[1].to_string();
        let raw = &caps[2];

        let resolve = |var: &str| assigned.get(var).cloned().or_else(|| lookup(var));
        let value = if let Some(literal) = strip_quotes(raw, '\'') {
            literal.to_string()
        } else {
            let inner = strip_quotes(raw, '"').unwrap_or(raw);
            expand(inner, &resolve)
        };

        assigned.insert(name.clone(), value.clone());
        exports.push((name, value));
    }

    exports
}

/// Expand parameter references in `input`.
pub fn expand<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    RE_PARAM
        .replace_all(input, |caps: &Captures<'_>| {
            if let Some(bare) = caps.get(4) {
                return lookup(bare.as_str()).unwrap_or_default();
            }

            let value = lookup(&caps[1]);
            let Some(op) = caps.get(2) else {
                return value.unwrap_or_default();
            };
            let word = caps.get(3).map_or("", |m| m.as_str());

            // With a leading colon, an empty value counts as unset
            let set = match (&value, op.as_str().starts_with(':')) {
                (Some(v), true) => !v.is_empty(),
                (Some(_), false) => true,
                (None, _) => false,
            };

            if op.as_str().ends_with('-') {
                if set {
                    value.unwrap_or_default()
                } else {
                    expand(word, lookup)
                }
            } else if set {
                expand(word, lookup)
            } else {
                String::new()
            }
        })
        .into_owned()
}

fn strip_quotes(s: &str, quote: char) -> Option<&str> {
    s.strip_prefix(quote)?.strip_suffix(quote)
}

//! Placeholder substitution for widget templates.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\{([\w.-]+)\}").expect("valid token pattern"));

/// Substitute `#{token}` placeholders in `template` from `vars`.
///
/// Unrecognized tokens expand to the empty string. Pure string
/// transformation with no widget coupling.
pub fn expand(template: &str, vars: &HashMap<&str, String>) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

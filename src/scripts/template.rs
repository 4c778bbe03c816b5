use std::{collections::BTreeMap, sync::OnceLock};

use regex::{Captures, Regex};
use snafu::{ensure, Snafu};

pub mod tokens {
    pub const PRINTER_NAME: &str = "PRINTER_NAME";
    pub const LOCATION: &str = "LOCATION";
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const PUBLISH: &str = "PUBLISH";
    pub const URI: &str = "URI";
    pub const PPD: &str = "PPD";
    pub const VERSION: &str = "VERSION";
    pub const ADD_OPTS: &str = "ADD_OPTS";

    #[cfg(test)]
    pub const ALL: [&str; 8] = [PRINTER_NAME, LOCATION, DESCRIPTION, PUBLISH, URI, PPD, VERSION, ADD_OPTS];
}

/// Matches `@TOKEN@` placeholders.
fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"@([A-Z][A-Z0-9_]*)@").unwrap())
}

/// Token name to replacement value.
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    values: BTreeMap<&'static str, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &'static str, value: impl Into<String>) {
        self.values.insert(token, value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(token, value)| (*token, value.as_str()))
    }
}

/// A script body with `@TOKEN@` placeholders.
///
/// Every placeholder in a template sits inside a single-quoted shell word, so
/// values are escaped for that context while rendering.
#[derive(Debug)]
pub struct ScriptTemplate {
    name: &'static str,
    body: &'static str,
}

impl ScriptTemplate {
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        ScriptTemplate { name, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Token names used by this template, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut found: Vec<&'static str> = Vec::new();
        for captures in placeholder_regex().captures_iter(self.body) {
            if let Some(token) = captures.get(1).map(|m| m.as_str()) {
                if !found.contains(&token) {
                    found.push(token);
                }
            }
        }
        found
    }

    /// Replaces every placeholder in a single pass.
    ///
    /// Replacement text is never scanned again, so a value that happens to
    /// contain `@SOME_TOKEN@` ends up in the output verbatim.
    pub fn render(&self, substitutions: &Substitutions) -> Result<String, RenderError> {
        for token in self.placeholders() {
            ensure!(substitutions.get(token).is_some(), MissingValueSnafu { template: self.name, token });
        }

        let rendered = placeholder_regex().replace_all(self.body, |captures: &Captures| {
            let token = &captures[1];
            // Presence was checked above.
            let value = substitutions.get(token).unwrap_or_default();
            escape_single_quoted(value)
        });
        Ok(rendered.into_owned())
    }
}

/// Escapes `value` for use between single quotes in a POSIX shell script.
fn escape_single_quoted(value: &str) -> String {
    value.replace('\'', r"'\''")
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum RenderError {
    #[snafu(display("Template {template} uses @{token}@ but no value was given for it"))]
    MissingValue { template: &'static str, token: String },
}

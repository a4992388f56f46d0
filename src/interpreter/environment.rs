//! Variable Environment
//!
//! A mapping from variable name to resolved string value, exclusively owned
//! by one runner and living for the duration of one script execution. Only
//! the `set` and `ask` builtins mutate it.
//!
//! A small set of synthetic names resolves without a lookup: `RESET` and the
//! `COLOR:` family. Malformed numeric arguments to those fall through to a
//! normal lookup of the literal name, so a user may define a variable
//! literally named `COLOR:foo`.

use std::collections::HashMap;

use crate::interpreter::colors;
use crate::interpreter::errors::RuntimeError;

#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, String>,
}

/// Variable names accepted by `set` and `ask`: ASCII alphanumerics and `_`,
/// non-empty. Synthetic names are read-only and fail this check.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a variable reference, synthetic names first.
    pub fn get(&self, name: &str) -> Result<String, RuntimeError> {
        if let Some(synthetic) = Self::synthetic(name) {
            return Ok(synthetic);
        }
        match self.variables.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::VariableNotFound {
                name: name.to_string(),
            }),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    fn synthetic(name: &str) -> Option<String> {
        if name == "RESET" {
            return Some(colors::reset().to_string());
        }
        if let Some(rest) = name.strip_prefix("COLOR:") {
            // u8 parsing rejects both non-numeric and out-of-range components.
            if let Ok(n) = rest.parse::<u8>() {
                return Some(colors::number(n));
            }
            let components: Vec<&str> = rest.split(':').collect();
            if let [r, g, b] = components[..] {
                if let (Ok(r), Ok(g), Ok(b)) = (r.parse::<u8>(), g.parse::<u8>(), b.parse::<u8>())
                {
                    return Some(colors::rgb(r, g, b));
                }
            }
        }
        None
    }
}

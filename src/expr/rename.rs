use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expr::Quoted;

/// Per-output name transform carried by `Expr::RenameAlias`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenameFunction {
    Suffix(String),
    Prefix(String),
    ToLowercase,
    ToUppercase,
    Replace { pattern: String, value: String, literal: bool },
}

impl RenameFunction {
    /// Apply the transform to an input name. `None` when a regex pattern
    /// does not compile.
    pub fn apply(&self, name: &str) -> Option<String> {
        match self {
            RenameFunction::Suffix(suffix) => Some(format!("{}{}", name, suffix)),
            RenameFunction::Prefix(prefix) => Some(format!("{}{}", prefix, name)),
            RenameFunction::ToLowercase => Some(name.to_lowercase()),
            RenameFunction::ToUppercase => Some(name.to_uppercase()),
            RenameFunction::Replace { pattern, value, literal: true } => Some(name.replace(pattern.as_str(), value)),
            RenameFunction::Replace { pattern, value, literal: false } => match Regex::new(pattern) {
                Ok(re) => Some(re.replace_all(name, value.as_str()).into_owned()),
                Err(err) => {
                    tracing::warn!(%pattern, error = %err, "rename pattern does not compile");
                    None
                }
            },
        }
    }
}

impl fmt::Display for RenameFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameFunction::Suffix(suffix) => write!(f, "suffix({})", Quoted(suffix)),
            RenameFunction::Prefix(prefix) => write!(f, "prefix({})", Quoted(prefix)),
            RenameFunction::ToLowercase => write!(f, "to_lowercase()"),
            RenameFunction::ToUppercase => write!(f, "to_uppercase()"),
            RenameFunction::Replace { pattern, value, literal } => {
                write!(f, "replace({}, {}, literal={})", Quoted(pattern), Quoted(value), literal)
            }
        }
    }
}

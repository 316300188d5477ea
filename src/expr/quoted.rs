use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Cow, fmt};

static QUOTE_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["\\]"#).expect("static pattern"));

/// Backslash-escape `"` and `\`.
pub fn escape_quotes(text: &str) -> Cow<'_, str> {
    QUOTE_ESCAPE.replace_all(text, "\\$0")
}

/// Displays a name as a double-quoted, escaped string literal.
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_quotes(self.0))
    }
}

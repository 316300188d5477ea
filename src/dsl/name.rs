use std::sync::Arc;

use crate::expr::{Expr, RenameFunction};

/// Builders for per-output renames, reached through `Expr::name`.
pub struct ExprNameNameSpace(pub(crate) Expr);

impl ExprNameNameSpace {
    fn rename(self, function: RenameFunction) -> Expr {
        Expr::RenameAlias {
            expr: Arc::new(self.0),
            function,
        }
    }

    /// Keep the name of the first column the expression reads.
    pub fn keep(self) -> Expr {
        Expr::KeepName(Arc::new(self.0))
    }

    pub fn suffix(self, suffix: impl Into<String>) -> Expr {
        self.rename(RenameFunction::Suffix(suffix.into()))
    }

    pub fn prefix(self, prefix: impl Into<String>) -> Expr {
        self.rename(RenameFunction::Prefix(prefix.into()))
    }

    pub fn to_lowercase(self) -> Expr {
        self.rename(RenameFunction::ToLowercase)
    }

    pub fn to_uppercase(self) -> Expr {
        self.rename(RenameFunction::ToUppercase)
    }

    /// Replace `pattern` in the output name. With `literal` unset the pattern
    /// is a regex and `value` may reference its groups.
    pub fn replace(self, pattern: impl Into<String>, value: impl Into<String>, literal: bool) -> Expr {
        self.rename(RenameFunction::Replace {
            pattern: pattern.into(),
            value: value.into(),
            literal,
        })
    }
}

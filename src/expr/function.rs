use serde::{Deserialize, Serialize};
use std::fmt;

use crate::expr::Quoted;

/// Scalar function tag. Inputs live on the owning `Expr::Function` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionExpr {
    Abs,
    Round { decimals: u32 },
    Sqrt,
    FillNull,
    Coalesce,
    IsIn,
    ConcatStr { separator: String },
    Uppercase,
    Lowercase,
    Hash { seed: u64 },
}

impl FunctionExpr {
    pub fn name(&self) -> &'static str {
        match self {
            FunctionExpr::Abs => "abs",
            FunctionExpr::Round { .. } => "round",
            FunctionExpr::Sqrt => "sqrt",
            FunctionExpr::FillNull => "fill_null",
            FunctionExpr::Coalesce => "coalesce",
            FunctionExpr::IsIn => "is_in",
            FunctionExpr::ConcatStr { .. } => "concat_str",
            FunctionExpr::Uppercase => "to_uppercase",
            FunctionExpr::Lowercase => "to_lowercase",
            FunctionExpr::Hash { .. } => "hash",
        }
    }

    /// Non-expression parameters rendered as `key=value`.
    pub fn params(&self) -> Option<String> {
        match self {
            FunctionExpr::Round { decimals } => Some(format!("decimals={}", decimals)),
            FunctionExpr::ConcatStr { separator } => Some(format!("separator={}", Quoted(separator))),
            FunctionExpr::Hash { seed } => Some(format!("seed={}", seed)),
            _ => None,
        }
    }
}

impl fmt::Display for FunctionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params() {
            Some(params) => write!(f, "{}({})", self.name(), params),
            None => write!(f, "{}", self.name()),
        }
    }
}

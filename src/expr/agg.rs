use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation applied over a single input expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggFunction {
    Min,
    Max,
    Median,
    NUnique,
    First,
    Last,
    Mean,
    Implode,
    Count { include_nulls: bool },
    Sum,
    Std { ddof: u8 },
    Var { ddof: u8 },
}

impl AggFunction {
    pub fn name(&self) -> &'static str {
        match self {
            AggFunction::Min => "min",
            AggFunction::Max => "max",
            AggFunction::Median => "median",
            AggFunction::NUnique => "n_unique",
            AggFunction::First => "first",
            AggFunction::Last => "last",
            AggFunction::Mean => "mean",
            AggFunction::Implode => "implode",
            AggFunction::Count { .. } => "count",
            AggFunction::Sum => "sum",
            AggFunction::Std { .. } => "std",
            AggFunction::Var { .. } => "var",
        }
    }

    pub fn params(&self) -> Option<String> {
        match self {
            AggFunction::Count { include_nulls: true } => Some("include_nulls=true".to_string()),
            AggFunction::Std { ddof } | AggFunction::Var { ddof } => Some(format!("ddof={}", ddof)),
            _ => None,
        }
    }
}

impl fmt::Display for AggFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params() {
            Some(params) => write!(f, "{}({})", self.name(), params),
            None => write!(f, "{}", self.name()),
        }
    }
}

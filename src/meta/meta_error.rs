use std::fmt::Display;

/// The only failure this crate reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// The output name could not be reduced to a single name. `expr` is the
    /// textual form of the sub-expression that blocked the resolution.
    NamingUndetermined { expr: String },
}

pub type MetaResult<T> = Result<T, MetaError>;

impl MetaError {
    pub fn naming_undetermined(expr: impl Display) -> Self {
        MetaError::NamingUndetermined { expr: expr.to_string() }
    }
}

impl Display for MetaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaError::NamingUndetermined { expr } => write!(
                f,
                "unable to find root column name for expr '{}' when calling 'output_name'",
                expr
            ),
        }
    }
}

impl std::error::Error for MetaError {}

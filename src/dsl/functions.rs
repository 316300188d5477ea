use std::sync::Arc;

use crate::expr::{DataType, Expr, FunctionExpr, LiteralValue, Scalar, SeriesLiteral};

/// Reference a column by name. Names of the form `^...$` are regex patterns.
pub fn col(name: impl Into<String>) -> Expr {
    Expr::Column(name.into())
}

/// Select several columns by name.
pub fn cols<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Expr {
    Expr::Columns(names.into_iter().map(Into::into).collect())
}

/// Select every column whose type is in `dtypes`.
pub fn dtype_cols(dtypes: impl IntoIterator<Item = DataType>) -> Expr {
    Expr::DtypeColumn(dtypes.into_iter().collect())
}

pub fn lit(value: impl Into<LiteralValue>) -> Expr {
    Expr::Literal(value.into())
}

pub fn series<T: Into<Scalar>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> SeriesLiteral {
    SeriesLiteral::new(name, values)
}

/// Number of rows in the context, named `len`.
pub fn len() -> Expr {
    Expr::Len
}

/// Every column; shorthand for `cs.all()`.
pub fn all() -> Expr {
    Expr::Selector(crate::expr::Selector::All)
}

pub fn nth(n: i64) -> Expr {
    Expr::Nth(n)
}

pub fn first() -> Expr {
    Expr::Nth(0)
}

pub fn last() -> Expr {
    Expr::Nth(-1)
}

/// Sum of a named column.
pub fn sum(name: impl Into<String>) -> Expr {
    col(name).sum()
}

pub fn coalesce(exprs: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Function {
        input: exprs.into_iter().collect(),
        function: FunctionExpr::Coalesce,
    }
}

pub fn concat_str(exprs: impl IntoIterator<Item = Expr>, separator: impl Into<String>) -> Expr {
    Expr::Function {
        input: exprs.into_iter().collect(),
        function: FunctionExpr::ConcatStr { separator: separator.into() },
    }
}

/// A node kind this crate has no rules for, as produced by an outside builder.
pub fn extension(name: impl Into<String>, input: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Extension {
        name: name.into(),
        input: input.into_iter().collect(),
    }
}

pub fn when(predicate: impl Into<Expr>) -> When {
    When { predicate: predicate.into() }
}

pub struct When {
    predicate: Expr,
}

impl When {
    pub fn then(self, truthy: impl Into<Expr>) -> Then {
        Then {
            predicate: self.predicate,
            truthy: truthy.into(),
        }
    }
}

pub struct Then {
    predicate: Expr,
    truthy: Expr,
}

impl Then {
    pub fn otherwise(self, falsy: impl Into<Expr>) -> Expr {
        Expr::Ternary {
            predicate: Arc::new(self.predicate),
            truthy: Arc::new(self.truthy),
            falsy: Arc::new(falsy.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_produce_expected_nodes() {
        assert_eq!(col("foo"), Expr::Column("foo".into()));
        assert_eq!(cols(["a", "b"]).to_string(), "cols([\"a\", \"b\"])");
        assert_eq!(all().to_string(), "cs.all()");
        assert_eq!(len().to_string(), "len()");
        assert_eq!(sum("foo").to_string(), "col(\"foo\").sum()");
    }

    #[test]
    fn when_then_otherwise_builds_ternary() {
        let expr = when(col("a").gt(lit(1))).then(col("b")).otherwise(lit(0));
        assert_eq!(
            expr.to_string(),
            "when((col(\"a\") > lit(1))).then(col(\"b\")).otherwise(lit(0))"
        );
    }
}

//! Column selectors, usually imported as `cs`.

use crate::expr::{DataType, Expr, Selector};

pub fn all() -> Expr {
    Expr::Selector(Selector::All)
}

pub fn numeric() -> Expr {
    Expr::Selector(Selector::Numeric)
}

pub fn temporal() -> Expr {
    Expr::Selector(Selector::Temporal)
}

pub fn string() -> Expr {
    Expr::Selector(Selector::String)
}

pub fn boolean() -> Expr {
    Expr::Selector(Selector::Boolean)
}

pub fn time() -> Expr {
    Expr::Selector(Selector::Time)
}

pub fn by_name<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Expr {
    Expr::Selector(Selector::ByName(names.into_iter().map(Into::into).collect()))
}

pub fn by_dtype(dtypes: impl IntoIterator<Item = DataType>) -> Expr {
    Expr::Selector(Selector::ByDtype(dtypes.into_iter().collect()))
}

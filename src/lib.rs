//! Static metadata for query expression trees: which columns an expression
//! reads, what its result is called, what shape it has, and how it looks as
//! text or as a graph. Nothing is evaluated.

pub mod expr;
pub use expr::{Expr, LiteralValue, Scalar, SeriesLiteral, Selector};

pub mod dsl;

pub mod meta;
pub use meta::{MetaError, MetaNameSpace, MetaResult};

pub mod format;
pub use format::{ExprGraph, FormatConfig, RankDir};

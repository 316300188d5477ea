pub mod expr;
pub use expr::*;

pub mod expr_iter;
pub use expr_iter::*;

pub mod literal;
pub use literal::*;

pub mod operator;
pub use operator::*;

pub mod agg;
pub use agg::*;

pub mod function;
pub use function::*;

pub mod data_type;
pub use data_type::*;

pub mod selector;
pub use selector::*;

pub mod rename;
pub use rename::*;

pub mod quoted;
pub use quoted::*;

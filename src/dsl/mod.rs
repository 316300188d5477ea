//! Expression construction helpers.

pub mod functions;
pub use functions::*;

pub mod expr_dsl;

pub mod name;
pub use name::*;

pub mod selectors;

pub mod meta_error;
pub use meta_error::*;

pub mod name_resolver;
pub use name_resolver::*;

pub mod classifier;
pub use classifier::*;

pub mod meta_namespace;
pub use meta_namespace::*;

#[cfg(test)]
mod _tests;

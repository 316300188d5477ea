pub mod format_config;
pub use format_config::*;

pub mod node_label;
pub use node_label::*;

pub mod tree_formatter;
pub use tree_formatter::*;

pub mod graph_builder;
pub use graph_builder::*;

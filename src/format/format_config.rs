use std::fmt;

/// Graph layout direction handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TopBottom,
    LeftRight,
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::TopBottom => write!(f, "TB"),
            RankDir::LeftRight => write!(f, "LR"),
        }
    }
}

/// Formatting options for the tree and graph views.
///
/// - `indent_width` spaces per tree level.
/// - `show_arity` appends ` [n]` to nodes with children.
/// - `graph_name` and `rank_dir` only affect the DOT output.
///
/// Golden fixtures are written against `FormatConfig::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    pub indent_width: usize,
    pub show_arity: bool,
    pub graph_name: String,
    pub rank_dir: RankDir,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_arity: true,
            graph_name: "expr".to_string(),
            rank_dir: RankDir::default(),
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(indent_width: usize, show_arity: bool) -> Self {
        Self {
            indent_width,
            show_arity,
            ..Self::default()
        }
    }

    /// One space per level, no arity.
    pub fn compact() -> Self {
        Self::from(1, false)
    }

    pub fn with_graph_name(mut self, graph_name: &str) -> Self {
        self.graph_name = graph_name.to_string();
        self
    }

    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = rank_dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FormatConfig::new();
        assert_eq!(config.indent_width, 2);
        assert!(config.show_arity);
        assert_eq!(config.graph_name, "expr");
        assert_eq!(config.rank_dir.to_string(), "TB");
    }

    #[test]
    fn builders_override_single_fields() {
        let config = FormatConfig::compact().with_graph_name("g").with_rank_dir(RankDir::LeftRight);
        assert_eq!(config.indent_width, 1);
        assert!(!config.show_arity);
        assert_eq!(config.graph_name, "g");
        assert_eq!(config.rank_dir, RankDir::LeftRight);
    }
}

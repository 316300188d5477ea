use serde::{Deserialize, Serialize};
use std::{fmt::Write as _, io};

use crate::{
    expr::{Expr, escape_quotes},
    format::{FormatConfig, NodeLabel},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
}

/// Vertex/edge description of an expression tree. Vertices are numbered in
/// pre-order, so the root is always `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ExprGraph {
    pub fn build(expr: &Expr) -> Self {
        let mut graph = ExprGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        graph.visit(expr, None);
        tracing::trace!(nodes = graph.nodes.len(), edges = graph.edges.len(), "expression graph built");
        graph
    }

    fn visit(&mut self, expr: &Expr, parent: Option<usize>) {
        let id = self.nodes.len();
        self.nodes.push(GraphNode {
            id,
            label: NodeLabel::of(expr),
        });
        if let Some(from) = parent {
            self.edges.push(GraphEdge { from, to: id });
        }
        for child in expr.children() {
            self.visit(child, Some(id));
        }
    }

    fn escape(label: &str) -> String {
        escape_quotes(label).replace('\n', "\\n")
    }

    /// DOT source for a graph-layout renderer.
    pub fn to_dot(&self, config: &FormatConfig) -> String {
        let mut dot = String::new();
        // writing into a String cannot fail
        let _ = writeln!(dot, "digraph {} {{", config.graph_name);
        let _ = writeln!(dot, "  rankdir=\"{}\";", config.rank_dir);
        for node in &self.nodes {
            let _ = writeln!(dot, "  n{} [label=\"{}\"];", node.id, Self::escape(&node.label));
        }
        for edge in &self.edges {
            let _ = writeln!(dot, "  n{} -> n{};", edge.from, edge.to);
        }
        dot.push('}');
        dot
    }

    pub fn write_dot<W: io::Write>(&self, config: &FormatConfig, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_dot(config).as_bytes())?;
        writer.flush()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExprGraph, GraphEdge};
    use crate::dsl::{col, lit};
    use crate::format::FormatConfig;

    #[test]
    fn vertices_are_numbered_in_pre_order() {
        let expr = (col("a") + col("b")).alias("c");
        let graph = ExprGraph::build(&expr);

        let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["alias: c", "binary: +", "col: a", "col: b"]);
        assert_eq!(
            graph.edges,
            vec![
                GraphEdge { from: 0, to: 1 },
                GraphEdge { from: 1, to: 2 },
                GraphEdge { from: 1, to: 3 },
            ]
        );
    }

    #[test]
    fn dot_output_escapes_quotes() {
        let graph = ExprGraph::build(&lit("x"));
        let dot = graph.to_dot(&FormatConfig::default());
        assert_eq!(dot, "digraph expr {\n  rankdir=\"TB\";\n  n0 [label=\"lit: \\\"x\\\"\"];\n}");
    }

    #[test]
    fn dot_output_escapes_backslashes_in_names() {
        let graph = ExprGraph::build(&col(r"a\b"));
        let dot = graph.to_dot(&FormatConfig::default());
        assert!(dot.contains(r#"n0 [label="col: a\\b"];"#));
    }

    #[test]
    fn json_lists_nodes_and_edges() {
        let graph = ExprGraph::build(&col("a").sum());
        let json = graph.to_json().unwrap();
        let back: ExprGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
        assert!(json.contains("\"label\":\"agg: sum\""));
    }
}

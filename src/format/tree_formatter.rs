use crate::{
    expr::Expr,
    format::{FormatConfig, NodeLabel},
};

/// Indented, one-node-per-line rendering used for golden comparisons.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn format(expr: &Expr, config: &FormatConfig) -> String {
        let mut lines = Vec::new();
        Self::format_node(expr, 0, config, &mut lines);
        tracing::trace!(lines = lines.len(), "expression tree formatted");
        lines.join("\n")
    }

    fn format_node(expr: &Expr, depth: usize, config: &FormatConfig, lines: &mut Vec<String>) {
        let children = expr.children();

        let mut line = " ".repeat(depth * config.indent_width);
        line.push_str(&NodeLabel::of(expr).replace('\n', "\\n"));
        if config.show_arity && !children.is_empty() {
            line.push_str(&format!(" [{}]", children.len()));
        }
        lines.push(line.trim_end().to_string());

        for child in children {
            Self::format_node(child, depth + 1, config, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TreeFormatter;
    use crate::dsl::{col, lit};
    use crate::format::FormatConfig;

    #[test]
    fn children_are_indented_one_level() {
        let expr = (col("foo") * col("bar")).sum().over([col("ham")]) / lit(2);
        let expected = [
            "binary: / [2]",
            "  over [2]",
            "    agg: sum [1]",
            "      binary: * [2]",
            "        col: foo",
            "        col: bar",
            "    col: ham",
            "  lit: 2",
        ]
        .join("\n");

        assert_eq!(TreeFormatter::format(&expr, &FormatConfig::default()), expected);
    }

    #[test]
    fn compact_config_drops_arity() {
        let expr = col("a").alias("b");
        assert_eq!(TreeFormatter::format(&expr, &FormatConfig::compact()), "alias: b\n col: a");
    }

    #[test]
    fn newlines_in_names_stay_on_one_line() {
        let expr = col("a\nb");
        assert_eq!(TreeFormatter::format(&expr, &FormatConfig::default()), "col: a\\nb");
    }
}

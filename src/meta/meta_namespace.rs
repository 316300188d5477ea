use crate::{
    expr::Expr,
    format::{ExprGraph, FormatConfig, TreeFormatter},
    meta::{Classifier, MetaResult, NameResolver},
};

/// Static introspection over a borrowed expression; reached through
/// `Expr::meta`. Nothing here evaluates or mutates the tree.
pub struct MetaNameSpace<'a> {
    expr: &'a Expr,
}

impl Expr {
    pub fn meta(&self) -> MetaNameSpace<'_> {
        MetaNameSpace { expr: self }
    }
}

impl<'a> MetaNameSpace<'a> {
    /// Direct inputs of the root node.
    pub fn pop(&self) -> Vec<Expr> {
        self.expr.children().into_iter().cloned().collect()
    }

    pub fn root_names(&self) -> Vec<String> {
        NameResolver::root_names(self.expr)
    }

    /// Fails with `NamingUndetermined` for multi-output expressions.
    pub fn output_name(&self) -> MetaResult<String> {
        NameResolver::output_name(self.expr)
    }

    pub fn try_output_name(&self) -> Option<String> {
        NameResolver::resolve_output_name(self.expr).ok()
    }

    pub fn output_name_with(&self, raise_if_undetermined: bool) -> MetaResult<Option<String>> {
        NameResolver::output_name_with(self.expr, raise_if_undetermined)
    }

    pub fn undo_aliases(&self) -> Expr {
        NameResolver::undo_aliases(self.expr)
    }

    pub fn is_column(&self, allow_aliasing: bool) -> bool {
        Classifier::is_column(self.expr, allow_aliasing)
    }

    pub fn is_literal(&self, allow_aliasing: bool) -> bool {
        Classifier::is_literal(self.expr, allow_aliasing)
    }

    pub fn has_multiple_outputs(&self) -> bool {
        Classifier::has_multiple_outputs(self.expr)
    }

    pub fn is_regex_projection(&self) -> bool {
        Classifier::is_regex_projection(self.expr)
    }

    pub fn is_column_selection(&self, allow_aliasing: bool) -> bool {
        Classifier::is_column_selection(self.expr, allow_aliasing)
    }

    pub fn tree_format(&self) -> String {
        self.tree_format_with(&FormatConfig::default())
    }

    pub fn tree_format_with(&self, config: &FormatConfig) -> String {
        TreeFormatter::format(self.expr, config)
    }

    pub fn graph(&self) -> ExprGraph {
        ExprGraph::build(self.expr)
    }

    /// DOT description of the tree; rendering it is left to the caller.
    pub fn show_graph(&self) -> String {
        self.show_graph_with(&FormatConfig::default())
    }

    pub fn show_graph_with(&self, config: &FormatConfig) -> String {
        self.graph().to_dot(config)
    }
}

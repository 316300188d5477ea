use indexmap::IndexSet;
use std::sync::Arc;

use crate::{
    expr::{Expr, LEN_NAME},
    meta::{MetaError, MetaResult},
};

pub struct NameResolver;

impl NameResolver {
    /// Every column name the tree reads, in order of first appearance in a
    /// pre-order walk. Literals, selectors and positional columns add nothing.
    pub fn root_names(expr: &Expr) -> Vec<String> {
        let mut names: IndexSet<&str> = IndexSet::new();
        for node in expr {
            match node {
                Expr::Column(name) => {
                    names.insert(name);
                }
                Expr::Columns(cols) => names.extend(cols.iter().map(String::as_str)),
                _ => {}
            }
        }
        names.into_iter().map(str::to_string).collect()
    }

    /// Single traversal behind every output-name entry point. On failure the
    /// sub-expression that could not be reduced to one name is returned.
    pub fn resolve_output_name(expr: &Expr) -> Result<String, &Expr> {
        match expr {
            Expr::Alias(_, name) => Ok(name.clone()),
            Expr::Column(name) => Ok(name.clone()),
            Expr::Literal(value) => Ok(value.output_name().to_string()),
            Expr::Len => Ok(LEN_NAME.to_string()),
            Expr::Columns(_)
            | Expr::DtypeColumn(_)
            | Expr::Selector(_)
            | Expr::Nth(_)
            | Expr::Extension { .. } => Err(expr),
            Expr::BinaryExpr { left: primary, .. }
            | Expr::UnaryExpr { input: primary, .. }
            | Expr::Agg { input: primary, .. }
            | Expr::Cast { expr: primary, .. }
            | Expr::Sort { expr: primary, .. }
            | Expr::SortBy { expr: primary, .. }
            | Expr::Gather { expr: primary, .. }
            | Expr::Filter { input: primary, .. }
            | Expr::Explode { input: primary }
            | Expr::Window { function: primary, .. }
            | Expr::Slice { input: primary, .. }
            | Expr::Exclude(primary, _) => Self::resolve_output_name(primary),
            Expr::Ternary { truthy, .. } => Self::resolve_output_name(truthy),
            Expr::Function { input, .. } => match input.first() {
                Some(first) => Self::resolve_output_name(first),
                None => Err(expr),
            },
            Expr::KeepName(inner) => {
                Self::resolve_output_name(inner)?;
                Self::first_column_name(inner).map(str::to_string).ok_or(expr)
            }
            Expr::RenameAlias { expr: inner, function } => {
                let name = Self::resolve_output_name(inner)?;
                function.apply(&name).ok_or(expr)
            }
        }
    }

    /// Output name, failing with `NamingUndetermined` when there is none.
    pub fn output_name(expr: &Expr) -> MetaResult<String> {
        Self::resolve_output_name(expr).map_err(|blocker| {
            tracing::debug!(expr = %expr, blocker = %blocker, "output name undetermined");
            MetaError::naming_undetermined(blocker)
        })
    }

    /// Output name with the failure mode chosen by the caller: an error when
    /// `raise_if_undetermined` is set, `None` otherwise.
    pub fn output_name_with(expr: &Expr, raise_if_undetermined: bool) -> MetaResult<Option<String>> {
        match Self::output_name(expr) {
            Ok(name) => Ok(Some(name)),
            Err(err) if raise_if_undetermined => Err(err),
            Err(_) => Ok(None),
        }
    }

    fn first_column_name(expr: &Expr) -> Option<&str> {
        expr.iter().find_map(|node| match node {
            Expr::Column(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// New tree with every alias and rename node replaced by its input.
    pub fn undo_aliases(expr: &Expr) -> Expr {
        let mut removed = 0usize;
        let undone = expr.map_expr(&mut |node| match node {
            Expr::Alias(inner, _) | Expr::KeepName(inner) | Expr::RenameAlias { expr: inner, .. } => {
                removed += 1;
                Arc::unwrap_or_clone(inner)
            }
            node => node,
        });
        tracing::trace!(removed, "undo aliases");
        undone
    }
}

use crate::expr::Expr;

/// `^...$`; a pattern missing either anchor is a plain column name.
pub fn is_regex_pattern(name: &str) -> bool {
    name.len() > 1 && name.starts_with('^') && name.ends_with('$')
}

/// Shape predicates. None of them can fail.
pub struct Classifier;

impl Classifier {
    /// Peel every outermost alias or rename wrapper.
    pub fn strip_aliases(expr: &Expr) -> &Expr {
        let mut current = expr;
        while let Expr::Alias(inner, _) | Expr::KeepName(inner) | Expr::RenameAlias { expr: inner, .. } = current {
            current = inner.as_ref();
        }
        current
    }

    fn root(expr: &Expr, allow_aliasing: bool) -> &Expr {
        match allow_aliasing {
            true => Self::strip_aliases(expr),
            false => expr,
        }
    }

    /// A single, non-regex column reference.
    pub fn is_column(expr: &Expr, allow_aliasing: bool) -> bool {
        matches!(Self::root(expr, allow_aliasing), Expr::Column(name) if !is_regex_pattern(name))
    }

    pub fn is_literal(expr: &Expr, allow_aliasing: bool) -> bool {
        matches!(Self::root(expr, allow_aliasing), Expr::Literal(_))
    }

    /// Whether the expression statically projects more than one column.
    /// A bare regex column does not count; a rename fanning out over one does.
    pub fn has_multiple_outputs(expr: &Expr) -> bool {
        match expr {
            Expr::Columns(names) => names.len() > 1,
            Expr::DtypeColumn(_) | Expr::Selector(_) | Expr::Extension { .. } => true,
            Expr::Column(_) | Expr::Nth(_) | Expr::Literal(_) | Expr::Len => false,
            Expr::KeepName(inner) | Expr::RenameAlias { expr: inner, .. } => {
                Self::has_multiple_outputs(inner)
                    || inner.iter().any(|node| matches!(node, Expr::Column(name) if is_regex_pattern(name)))
            }
            _ => expr.children().into_iter().any(Self::has_multiple_outputs),
        }
    }

    /// Whether the alias-stripped root is a regex column.
    pub fn is_regex_projection(expr: &Expr) -> bool {
        matches!(Self::strip_aliases(expr), Expr::Column(name) if is_regex_pattern(name))
    }

    /// Pure projection: columns, column sets, selectors and exclusions over
    /// them. Renames are accepted only with `allow_aliasing`.
    pub fn is_column_selection(expr: &Expr, allow_aliasing: bool) -> bool {
        match expr {
            Expr::Column(_) | Expr::Columns(_) | Expr::DtypeColumn(_) | Expr::Selector(_) | Expr::Nth(_) => true,
            Expr::Exclude(inner, _) => Self::is_column_selection(inner, allow_aliasing),
            Expr::Alias(inner, _) | Expr::KeepName(inner) | Expr::RenameAlias { expr: inner, .. } => {
                allow_aliasing && Self::is_column_selection(inner, allow_aliasing)
            }
            _ => false,
        }
    }
}

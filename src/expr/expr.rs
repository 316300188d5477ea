use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::expr::{
    AggFunction, DataType, ExprIter, FunctionExpr, LiteralValue, Operator, Quoted, RenameFunction, Selector, UnaryOp,
};

/// Output name of `len()`.
pub const LEN_NAME: &str = "len";

/// Immutable expression tree. Single children are `Arc`-shared so cloning a
/// tree never deep-copies it.
///
/// The node set is closed, but `Extension` stands for any node kind produced
/// by an external builder that this crate has no rules for. Every analysis
/// treats it conservatively: multi-output, not a selection, undetermined name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A single column, or a `^...$` regex matching several.
    Column(String),
    Columns(Vec<String>),
    DtypeColumn(Vec<DataType>),
    Selector(Selector),
    /// Positional column; negative values count from the end.
    Nth(i64),
    Literal(LiteralValue),
    Len,
    BinaryExpr {
        left: Arc<Expr>,
        op: Operator,
        right: Arc<Expr>,
    },
    UnaryExpr {
        op: UnaryOp,
        input: Arc<Expr>,
    },
    Function {
        input: Vec<Expr>,
        function: FunctionExpr,
    },
    Agg {
        function: AggFunction,
        input: Arc<Expr>,
    },
    Cast {
        expr: Arc<Expr>,
        dtype: DataType,
    },
    Sort {
        expr: Arc<Expr>,
        descending: bool,
    },
    SortBy {
        expr: Arc<Expr>,
        by: Vec<Expr>,
    },
    Gather {
        expr: Arc<Expr>,
        idx: Arc<Expr>,
    },
    Filter {
        input: Arc<Expr>,
        by: Arc<Expr>,
    },
    Ternary {
        predicate: Arc<Expr>,
        truthy: Arc<Expr>,
        falsy: Arc<Expr>,
    },
    Explode {
        input: Arc<Expr>,
    },
    Window {
        function: Arc<Expr>,
        partition_by: Vec<Expr>,
        order_by: Option<Arc<Expr>>,
    },
    Slice {
        input: Arc<Expr>,
        offset: Arc<Expr>,
        length: Arc<Expr>,
    },
    Alias(Arc<Expr>, String),
    KeepName(Arc<Expr>),
    RenameAlias {
        expr: Arc<Expr>,
        function: RenameFunction,
    },
    Exclude(Arc<Expr>, Vec<String>),
    Extension {
        name: String,
        input: Vec<Expr>,
    },
}

impl Expr {
    /// Direct children in structural order; empty for leaves.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Column(_)
            | Expr::Columns(_)
            | Expr::DtypeColumn(_)
            | Expr::Selector(_)
            | Expr::Nth(_)
            | Expr::Literal(_)
            | Expr::Len => vec![],
            Expr::BinaryExpr { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expr::UnaryExpr { input, .. }
            | Expr::Agg { input, .. }
            | Expr::Explode { input }
            | Expr::Cast { expr: input, .. }
            | Expr::Sort { expr: input, .. }
            | Expr::Alias(input, _)
            | Expr::KeepName(input)
            | Expr::RenameAlias { expr: input, .. }
            | Expr::Exclude(input, _) => vec![input.as_ref()],
            Expr::Function { input, .. } | Expr::Extension { input, .. } => input.iter().collect(),
            Expr::SortBy { expr, by } => std::iter::once(expr.as_ref()).chain(by.iter()).collect(),
            Expr::Gather { expr, idx } => vec![expr.as_ref(), idx.as_ref()],
            Expr::Filter { input, by } => vec![input.as_ref(), by.as_ref()],
            Expr::Ternary { predicate, truthy, falsy } => vec![predicate.as_ref(), truthy.as_ref(), falsy.as_ref()],
            Expr::Window { function, partition_by, order_by } => std::iter::once(function.as_ref())
                .chain(partition_by.iter())
                .chain(order_by.iter().map(|e| e.as_ref()))
                .collect(),
            Expr::Slice { input, offset, length } => vec![input.as_ref(), offset.as_ref(), length.as_ref()],
        }
    }

    /// Depth-first, pre-order, left-to-right walk over every node.
    pub fn iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Rebuild this node with every direct child replaced by `f(child)`.
    /// Leaves are returned as clones.
    pub fn map_children(&self, mut f: impl FnMut(&Expr) -> Expr) -> Expr {
        let mut arc = |e: &Arc<Expr>| Arc::new(f(e.as_ref()));
        match self {
            Expr::Column(_)
            | Expr::Columns(_)
            | Expr::DtypeColumn(_)
            | Expr::Selector(_)
            | Expr::Nth(_)
            | Expr::Literal(_)
            | Expr::Len => self.clone(),
            Expr::BinaryExpr { left, op, right } => Expr::BinaryExpr { left: arc(left), op: *op, right: arc(right) },
            Expr::UnaryExpr { op, input } => Expr::UnaryExpr { op: *op, input: arc(input) },
            Expr::Function { input, function } => Expr::Function {
                input: input.iter().map(|e| f(e)).collect(),
                function: function.clone(),
            },
            Expr::Agg { function, input } => Expr::Agg { function: *function, input: arc(input) },
            Expr::Cast { expr, dtype } => Expr::Cast { expr: arc(expr), dtype: dtype.clone() },
            Expr::Sort { expr, descending } => Expr::Sort { expr: arc(expr), descending: *descending },
            Expr::SortBy { expr, by } => {
                let expr = arc(expr);
                Expr::SortBy { expr, by: by.iter().map(|e| f(e)).collect() }
            }
            Expr::Gather { expr, idx } => Expr::Gather { expr: arc(expr), idx: arc(idx) },
            Expr::Filter { input, by } => Expr::Filter { input: arc(input), by: arc(by) },
            Expr::Ternary { predicate, truthy, falsy } => Expr::Ternary {
                predicate: arc(predicate),
                truthy: arc(truthy),
                falsy: arc(falsy),
            },
            Expr::Explode { input } => Expr::Explode { input: arc(input) },
            Expr::Window { function, partition_by, order_by } => {
                let function = arc(function);
                let partition_by = partition_by.iter().map(|e| f(e)).collect();
                let order_by = order_by.as_ref().map(|e| Arc::new(f(e.as_ref())));
                Expr::Window { function, partition_by, order_by }
            }
            Expr::Slice { input, offset, length } => Expr::Slice {
                input: arc(input),
                offset: arc(offset),
                length: arc(length),
            },
            Expr::Alias(expr, name) => Expr::Alias(arc(expr), name.clone()),
            Expr::KeepName(expr) => Expr::KeepName(arc(expr)),
            Expr::RenameAlias { expr, function } => Expr::RenameAlias { expr: arc(expr), function: function.clone() },
            Expr::Exclude(expr, names) => Expr::Exclude(arc(expr), names.clone()),
            Expr::Extension { name, input } => Expr::Extension {
                name: name.clone(),
                input: input.iter().map(|e| f(e)).collect(),
            },
        }
    }

    /// Bottom-up rewrite: children are rewritten first, then `f` is applied to
    /// the rebuilt node. Returns a new tree; `self` is untouched.
    pub fn map_expr<F: FnMut(Expr) -> Expr>(&self, f: &mut F) -> Expr {
        let rebuilt = self.map_children(|child| child.map_expr(&mut *f));
        f(rebuilt)
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_quoted(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    write!(f, "[")?;
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", Quoted(name))?;
    }
    write!(f, "]")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(name) => write!(f, "col({})", Quoted(name)),
            Expr::Columns(names) => {
                write!(f, "cols(")?;
                write_quoted(f, names)?;
                write!(f, ")")
            }
            Expr::DtypeColumn(dtypes) => {
                write!(f, "dtype_cols([")?;
                write_joined(f, dtypes)?;
                write!(f, "])")
            }
            Expr::Selector(selector) => write!(f, "{}", selector),
            Expr::Nth(0) => write!(f, "first()"),
            Expr::Nth(-1) => write!(f, "last()"),
            Expr::Nth(n) => write!(f, "nth({})", n),
            Expr::Literal(value) => write!(f, "lit({})", value),
            Expr::Len => write!(f, "len()"),
            Expr::BinaryExpr { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expr::UnaryExpr { op, input } => write!(f, "{}.{}()", input, op),
            Expr::Function { input, function } => {
                write!(f, "{}(", function.name())?;
                write_joined(f, input)?;
                if let Some(params) = function.params() {
                    if !input.is_empty() {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", params)?;
                }
                write!(f, ")")
            }
            Expr::Agg { function, input } => {
                write!(f, "{}.{}({})", input, function.name(), function.params().unwrap_or_default())
            }
            Expr::Cast { expr, dtype } => write!(f, "{}.cast({})", expr, dtype),
            Expr::Sort { expr, descending: false } => write!(f, "{}.sort()", expr),
            Expr::Sort { expr, descending: true } => write!(f, "{}.sort(descending=true)", expr),
            Expr::SortBy { expr, by } => {
                write!(f, "{}.sort_by([", expr)?;
                write_joined(f, by)?;
                write!(f, "])")
            }
            Expr::Gather { expr, idx } => write!(f, "{}.gather({})", expr, idx),
            Expr::Filter { input, by } => write!(f, "{}.filter({})", input, by),
            Expr::Ternary { predicate, truthy, falsy } => {
                write!(f, "when({}).then({}).otherwise({})", predicate, truthy, falsy)
            }
            Expr::Explode { input } => write!(f, "{}.explode()", input),
            Expr::Window { function, partition_by, order_by } => {
                write!(f, "{}.over([", function)?;
                write_joined(f, partition_by)?;
                write!(f, "]")?;
                if let Some(order_by) = order_by {
                    write!(f, ", order_by={}", order_by)?;
                }
                write!(f, ")")
            }
            Expr::Slice { input, offset, length } => write!(f, "{}.slice({}, {})", input, offset, length),
            Expr::Alias(expr, name) => write!(f, "{}.alias({})", expr, Quoted(name)),
            Expr::KeepName(expr) => write!(f, "{}.name.keep()", expr),
            Expr::RenameAlias { expr, function } => write!(f, "{}.name.{}", expr, function),
            Expr::Exclude(expr, names) => {
                write!(f, "{}.exclude(", expr)?;
                write_quoted(f, names)?;
                write!(f, ")")
            }
            Expr::Extension { name, input } => {
                write!(f, "{}(", name)?;
                write_joined(f, input)?;
                write!(f, ")")
            }
        }
    }
}

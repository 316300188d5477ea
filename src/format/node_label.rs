use crate::expr::Expr;

/// Per-node text shared by the tree formatter and the graph builder. Only the
/// node itself is described, never its children.
pub struct NodeLabel;

impl NodeLabel {
    pub fn of(expr: &Expr) -> String {
        match expr {
            Expr::Column(name) => format!("col: {}", name),
            Expr::Columns(names) => format!("cols: {}", names.join(", ")),
            Expr::DtypeColumn(dtypes) => {
                let dtypes: Vec<String> = dtypes.iter().map(|d| d.to_string()).collect();
                format!("dtype_cols: {}", dtypes.join(", "))
            }
            Expr::Selector(selector) => selector.to_string(),
            Expr::Nth(0) => "first".to_string(),
            Expr::Nth(-1) => "last".to_string(),
            Expr::Nth(n) => format!("nth: {}", n),
            Expr::Literal(value) => format!("lit: {}", value),
            Expr::Len => "len".to_string(),
            Expr::BinaryExpr { op, .. } => format!("binary: {}", op),
            Expr::UnaryExpr { op, .. } => format!("unary: {}", op),
            Expr::Function { function, .. } => format!("function: {}", function),
            Expr::Agg { function, .. } => format!("agg: {}", function),
            Expr::Cast { dtype, .. } => format!("cast: {}", dtype),
            Expr::Sort { descending: false, .. } => "sort: asc".to_string(),
            Expr::Sort { descending: true, .. } => "sort: desc".to_string(),
            Expr::SortBy { .. } => "sort_by".to_string(),
            Expr::Gather { .. } => "gather".to_string(),
            Expr::Filter { .. } => "filter".to_string(),
            Expr::Ternary { .. } => "ternary".to_string(),
            Expr::Explode { .. } => "explode".to_string(),
            Expr::Window { .. } => "over".to_string(),
            Expr::Slice { .. } => "slice".to_string(),
            Expr::Alias(_, name) => format!("alias: {}", name),
            Expr::KeepName(_) => "name: keep".to_string(),
            Expr::RenameAlias { function, .. } => format!("name: {}", function),
            Expr::Exclude(_, names) => format!("exclude: {}", names.join(", ")),
            Expr::Extension { name, .. } => format!("ext: {}", name),
        }
    }
}

use std::{ops, sync::Arc};

use crate::{
    dsl::ExprNameNameSpace,
    expr::{AggFunction, DataType, Expr, FunctionExpr, LiteralValue, Operator, Selector, UnaryOp},
};

impl Expr {
    fn binary(self, op: Operator, rhs: Expr) -> Expr {
        Expr::BinaryExpr {
            left: Arc::new(self),
            op,
            right: Arc::new(rhs),
        }
    }

    fn agg(self, function: AggFunction) -> Expr {
        Expr::Agg {
            function,
            input: Arc::new(self),
        }
    }

    fn unary(self, op: UnaryOp) -> Expr {
        Expr::UnaryExpr { op, input: Arc::new(self) }
    }

    fn function(self, function: FunctionExpr, others: Vec<Expr>) -> Expr {
        let mut input = Vec::with_capacity(others.len() + 1);
        input.push(self);
        input.extend(others);
        Expr::Function { input, function }
    }

    pub fn alias(self, name: impl Into<String>) -> Expr {
        Expr::Alias(Arc::new(self), name.into())
    }

    /// Per-output renaming operations.
    pub fn name(self) -> ExprNameNameSpace {
        ExprNameNameSpace(self)
    }

    // Aggregations

    pub fn sum(self) -> Expr {
        self.agg(AggFunction::Sum)
    }

    pub fn mean(self) -> Expr {
        self.agg(AggFunction::Mean)
    }

    pub fn min(self) -> Expr {
        self.agg(AggFunction::Min)
    }

    pub fn max(self) -> Expr {
        self.agg(AggFunction::Max)
    }

    pub fn median(self) -> Expr {
        self.agg(AggFunction::Median)
    }

    pub fn n_unique(self) -> Expr {
        self.agg(AggFunction::NUnique)
    }

    pub fn first(self) -> Expr {
        self.agg(AggFunction::First)
    }

    pub fn last(self) -> Expr {
        self.agg(AggFunction::Last)
    }

    pub fn implode(self) -> Expr {
        self.agg(AggFunction::Implode)
    }

    pub fn count(self) -> Expr {
        self.agg(AggFunction::Count { include_nulls: false })
    }

    pub fn std(self, ddof: u8) -> Expr {
        self.agg(AggFunction::Std { ddof })
    }

    pub fn var(self, ddof: u8) -> Expr {
        self.agg(AggFunction::Var { ddof })
    }

    // Comparison and logic

    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::Eq, other.into())
    }

    pub fn neq(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::NotEq, other.into())
    }

    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::Lt, other.into())
    }

    pub fn lt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::LtEq, other.into())
    }

    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::Gt, other.into())
    }

    pub fn gt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::GtEq, other.into())
    }

    pub fn and(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::And, other.into())
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::Or, other.into())
    }

    pub fn xor(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::Xor, other.into())
    }

    pub fn floor_div(self, other: impl Into<Expr>) -> Expr {
        self.binary(Operator::FloorDivide, other.into())
    }

    pub fn not(self) -> Expr {
        self.unary(UnaryOp::Not)
    }

    pub fn is_null(self) -> Expr {
        self.unary(UnaryOp::IsNull)
    }

    pub fn is_not_null(self) -> Expr {
        self.unary(UnaryOp::IsNotNull)
    }

    // Functions

    pub fn abs(self) -> Expr {
        self.function(FunctionExpr::Abs, vec![])
    }

    pub fn round(self, decimals: u32) -> Expr {
        self.function(FunctionExpr::Round { decimals }, vec![])
    }

    pub fn sqrt(self) -> Expr {
        self.function(FunctionExpr::Sqrt, vec![])
    }

    pub fn fill_null(self, value: impl Into<Expr>) -> Expr {
        self.function(FunctionExpr::FillNull, vec![value.into()])
    }

    pub fn is_in(self, other: impl Into<Expr>) -> Expr {
        self.function(FunctionExpr::IsIn, vec![other.into()])
    }

    pub fn hash(self, seed: u64) -> Expr {
        self.function(FunctionExpr::Hash { seed }, vec![])
    }

    pub fn to_uppercase(self) -> Expr {
        self.function(FunctionExpr::Uppercase, vec![])
    }

    pub fn to_lowercase(self) -> Expr {
        self.function(FunctionExpr::Lowercase, vec![])
    }

    // Shape

    pub fn cast(self, dtype: DataType) -> Expr {
        Expr::Cast { expr: Arc::new(self), dtype }
    }

    pub fn sort(self, descending: bool) -> Expr {
        Expr::Sort { expr: Arc::new(self), descending }
    }

    pub fn sort_by(self, by: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::SortBy {
            expr: Arc::new(self),
            by: by.into_iter().collect(),
        }
    }

    pub fn gather(self, idx: impl Into<Expr>) -> Expr {
        Expr::Gather {
            expr: Arc::new(self),
            idx: Arc::new(idx.into()),
        }
    }

    pub fn filter(self, predicate: impl Into<Expr>) -> Expr {
        Expr::Filter {
            input: Arc::new(self),
            by: Arc::new(predicate.into()),
        }
    }

    pub fn explode(self) -> Expr {
        Expr::Explode { input: Arc::new(self) }
    }

    /// Window over `partition_by`.
    pub fn over(self, partition_by: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Window {
            function: Arc::new(self),
            partition_by: partition_by.into_iter().collect(),
            order_by: None,
        }
    }

    pub fn over_ordered(self, partition_by: impl IntoIterator<Item = Expr>, order_by: Expr) -> Expr {
        Expr::Window {
            function: Arc::new(self),
            partition_by: partition_by.into_iter().collect(),
            order_by: Some(Arc::new(order_by)),
        }
    }

    pub fn slice(self, offset: impl Into<Expr>, length: impl Into<Expr>) -> Expr {
        Expr::Slice {
            input: Arc::new(self),
            offset: Arc::new(offset.into()),
            length: Arc::new(length.into()),
        }
    }

    pub fn exclude<S: Into<String>>(self, names: impl IntoIterator<Item = S>) -> Expr {
        Expr::Exclude(Arc::new(self), names.into_iter().map(Into::into).collect())
    }
}

impl From<LiteralValue> for Expr {
    fn from(value: LiteralValue) -> Self {
        Expr::Literal(value)
    }
}

impl From<Selector> for Expr {
    fn from(selector: Selector) -> Self {
        Expr::Selector(selector)
    }
}

macro_rules! expr_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Expr::Literal(value.into())
                }
            }
        )*
    };
}

expr_from_literal!(bool, i32, i64, f64);

macro_rules! binary_ops {
    ($($trait:ident, $method:ident, $op:expr);* $(;)?) => {
        $(
            impl<T: Into<Expr>> ops::$trait<T> for Expr {
                type Output = Expr;

                fn $method(self, rhs: T) -> Expr {
                    self.binary($op, rhs.into())
                }
            }
        )*
    };
}

binary_ops!(
    Add, add, Operator::Plus;
    Mul, mul, Operator::Multiply;
    Div, div, Operator::Divide;
    Rem, rem, Operator::Modulus;
);

// Set operations between two selectors stay selectors.

impl<T: Into<Expr>> ops::Sub<T> for Expr {
    type Output = Expr;

    fn sub(self, rhs: T) -> Expr {
        match (self, rhs.into()) {
            (Expr::Selector(l), Expr::Selector(r)) => Expr::Selector(l - r),
            (l, r) => l.binary(Operator::Minus, r),
        }
    }
}

impl<T: Into<Expr>> ops::BitOr<T> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: T) -> Expr {
        match (self, rhs.into()) {
            (Expr::Selector(l), Expr::Selector(r)) => Expr::Selector(l | r),
            (l, r) => l.binary(Operator::Or, r),
        }
    }
}

impl<T: Into<Expr>> ops::BitAnd<T> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: T) -> Expr {
        match (self, rhs.into()) {
            (Expr::Selector(l), Expr::Selector(r)) => Expr::Selector(l & r),
            (l, r) => l.binary(Operator::And, r),
        }
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.unary(UnaryOp::Neg)
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        self.unary(UnaryOp::Not)
    }
}

use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use crate::expr::{DataType, Quoted};

/// Schema-dependent column selection. Selectors are opaque here: they are
/// never resolved against a schema, only displayed and classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    All,
    Numeric,
    Temporal,
    String,
    Boolean,
    Time,
    ByName(Vec<String>),
    ByDtype(Vec<DataType>),
    Union(Box<Selector>, Box<Selector>),
    Difference(Box<Selector>, Box<Selector>),
    Intersection(Box<Selector>, Box<Selector>),
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], quoted: bool) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        if quoted {
            write!(f, "{}", Quoted(&item.to_string()))?;
        } else {
            write!(f, "{}", item)?;
        }
    }
    write!(f, "]")
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "cs.all()"),
            Selector::Numeric => write!(f, "cs.numeric()"),
            Selector::Temporal => write!(f, "cs.temporal()"),
            Selector::String => write!(f, "cs.string()"),
            Selector::Boolean => write!(f, "cs.boolean()"),
            Selector::Time => write!(f, "cs.time()"),
            Selector::ByName(names) => {
                write!(f, "cs.by_name(")?;
                write_list(f, names, true)?;
                write!(f, ")")
            }
            Selector::ByDtype(dtypes) => {
                write!(f, "cs.by_dtype(")?;
                write_list(f, dtypes, false)?;
                write!(f, ")")
            }
            Selector::Union(l, r) => write!(f, "({} | {})", l, r),
            Selector::Difference(l, r) => write!(f, "({} - {})", l, r),
            Selector::Intersection(l, r) => write!(f, "({} & {})", l, r),
        }
    }
}

impl ops::BitOr for Selector {
    type Output = Selector;

    fn bitor(self, rhs: Selector) -> Selector {
        Selector::Union(Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Selector {
    type Output = Selector;

    fn sub(self, rhs: Selector) -> Selector {
        Selector::Difference(Box::new(self), Box::new(rhs))
    }
}

impl ops::BitAnd for Selector {
    type Output = Selector;

    fn bitand(self, rhs: Selector) -> Selector {
        Selector::Intersection(Box::new(self), Box::new(rhs))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical column type, only used to describe dtype-based column selections
/// and casts. Nothing here is evaluated against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
    Date,
    Datetime,
    Duration,
    Time,
    List(Box<DataType>),
}

impl DataType {
    pub fn is_numeric(&self) -> bool {
        use DataType::*;
        matches!(
            self,
            Int8 | Int16 | Int32 | Int64 | UInt8 | UInt16 | UInt32 | UInt64 | Float32 | Float64
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, DataType::Date | DataType::Datetime | DataType::Duration | DataType::Time)
    }

    /// Every numeric type, in a fixed order.
    pub fn numeric() -> Vec<DataType> {
        use DataType::*;
        vec![Int8, Int16, Int32, Int64, UInt8, UInt16, UInt32, UInt64, Float32, Float64]
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Null => write!(f, "null"),
            DataType::Boolean => write!(f, "bool"),
            DataType::Int8 => write!(f, "i8"),
            DataType::Int16 => write!(f, "i16"),
            DataType::Int32 => write!(f, "i32"),
            DataType::Int64 => write!(f, "i64"),
            DataType::UInt8 => write!(f, "u8"),
            DataType::UInt16 => write!(f, "u16"),
            DataType::UInt32 => write!(f, "u32"),
            DataType::UInt64 => write!(f, "u64"),
            DataType::Float32 => write!(f, "f32"),
            DataType::Float64 => write!(f, "f64"),
            DataType::String => write!(f, "str"),
            DataType::Date => write!(f, "date"),
            DataType::Datetime => write!(f, "datetime"),
            DataType::Duration => write!(f, "duration"),
            DataType::Time => write!(f, "time"),
            DataType::List(inner) => write!(f, "list[{}]", inner),
        }
    }
}

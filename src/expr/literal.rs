use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::expr::Quoted;

/// Output name every scalar literal carries.
pub const LITERAL_NAME: &str = "literal";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Boolean(bool),
    Int(i64),
    Float(#[serde(with = "float_repr")] OrderedFloat<f64>),
    String(String),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    Time(NaiveTime),
    /// microseconds
    Duration(i64),
    List(Vec<Scalar>),
}

/// JSON has no non-finite numbers, so `inf`, `-inf` and `NaN` travel as strings.
mod float_repr {
    use ordered_float::OrderedFloat;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &OrderedFloat<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value.into_inner() {
            v if v.is_finite() => serializer.serialize_f64(v),
            v if v.is_nan() => serializer.serialize_str("NaN"),
            v if v > 0.0 => serializer.serialize_str("inf"),
            _ => serializer.serialize_str("-inf"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OrderedFloat<f64>, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(OrderedFloat(v)),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(OrderedFloat(f64::INFINITY)),
                "-inf" => Ok(OrderedFloat(f64::NEG_INFINITY)),
                "NaN" => Ok(OrderedFloat(f64::NAN)),
                other => Err(D::Error::custom(format!("invalid float literal '{}'", other))),
            },
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Boolean(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(n) => write!(f, "{:?}", n.into_inner()),
            Scalar::String(s) => write!(f, "{}", Quoted(s)),
            Scalar::Date(d) => write!(f, "{}", d),
            Scalar::Datetime(dt) => write!(f, "{}", dt),
            Scalar::Time(t) => write!(f, "{}", t),
            Scalar::Duration(us) => write!(f, "{}us", us),
            Scalar::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// A whole series embedded in the tree as a literal. The empty name means the
/// series was built without one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesLiteral {
    pub name: String,
    pub values: Vec<Scalar>,
}

impl SeriesLiteral {
    pub fn new<T: Into<Scalar>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn unnamed<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::new("", values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Display for SeriesLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series({}, len={})", Quoted(&self.name), self.values.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralValue {
    Scalar(Scalar),
    Series(SeriesLiteral),
}

impl LiteralValue {
    pub fn null() -> Self {
        LiteralValue::Scalar(Scalar::Null)
    }

    /// Name the literal's column carries once materialized.
    pub fn output_name(&self) -> &str {
        match self {
            LiteralValue::Scalar(_) => LITERAL_NAME,
            LiteralValue::Series(series) => &series.name,
        }
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Scalar(s) => write!(f, "{}", s),
            LiteralValue::Series(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(OrderedFloat(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(value: NaiveDate) -> Self {
        Scalar::Date(value)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(value: NaiveDateTime) -> Self {
        Scalar::Datetime(value)
    }
}

impl From<NaiveTime> for Scalar {
    fn from(value: NaiveTime) -> Self {
        Scalar::Time(value)
    }
}

impl From<TimeDelta> for Scalar {
    fn from(value: TimeDelta) -> Self {
        // out of range only for deltas beyond ~292k years
        let saturated = if value < TimeDelta::zero() { i64::MIN } else { i64::MAX };
        Scalar::Duration(value.num_microseconds().unwrap_or(saturated))
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Scalar {
    fn from(values: Vec<T>) -> Self {
        Scalar::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Scalar> for LiteralValue {
    fn from(value: Scalar) -> Self {
        LiteralValue::Scalar(value)
    }
}

impl From<SeriesLiteral> for LiteralValue {
    fn from(value: SeriesLiteral) -> Self {
        LiteralValue::Series(value)
    }
}

macro_rules! literal_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LiteralValue {
                fn from(value: $ty) -> Self {
                    LiteralValue::Scalar(value.into())
                }
            }
        )*
    };
}

literal_from_scalar!(bool, i32, i64, f64, &str, String, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta);

impl<T: Into<Scalar>> From<Option<T>> for LiteralValue {
    fn from(value: Option<T>) -> Self {
        LiteralValue::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for LiteralValue {
    fn from(values: Vec<T>) -> Self {
        LiteralValue::Scalar(values.into())
    }
}

// Author: Dustin Pilgrim
// License: MIT

use chrono::{DateTime, Utc};

use crate::value::{Kind, Value, ValueType};

/// Rust types a stored [`Value`] can be read back as.
///
/// Conversions are exact: an `i64` is only produced from an integer option,
/// never from a float one.
pub trait FromValue: Sized {
    /// Tag a value must carry to convert to `Self`.
    const TYPE: ValueType;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value {
    ($ty:ty, $variant:ident, $type:expr) => {
        impl FromValue for $ty {
            const TYPE: ValueType = $type;

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }
        }
    };
}

from_value!(bool, Bool, ValueType::scalar(Kind::Bool));
from_value!(i64, Int, ValueType::scalar(Kind::Int));
from_value!(f64, Float, ValueType::scalar(Kind::Float));
from_value!(DateTime<Utc>, Date, ValueType::scalar(Kind::Date));
from_value!(String, String, ValueType::scalar(Kind::String));

from_value!(Vec<bool>, BoolArray, ValueType::array(Kind::Bool));
from_value!(Vec<i64>, IntArray, ValueType::array(Kind::Int));
from_value!(Vec<f64>, FloatArray, ValueType::array(Kind::Float));
from_value!(Vec<DateTime<Utc>>, DateArray, ValueType::array(Kind::Date));
from_value!(Vec<String>, StringArray, ValueType::array(Kind::String));

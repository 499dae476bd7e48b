//! Uniform value representation for batch resolution.
//!
//! Typed resolution returns whatever the validator produces. Batch operations mix
//! validators with different result types in one ordered list, so their results
//! are converted into [`Value`].
//!
//! Scalars keep their shape (`u16` becomes `Integer`, `Vec<bool>` becomes an
//! `Array` of `Bool`). Richer types with a canonical text form, such as IP
//! addresses, URLs and timestamps, are stored as that text.

use std::collections::BTreeMap;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A resolved value in a type-agnostic form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// A JSON object, keys sorted.
    Table(BTreeMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            Value::Integer(n) => Some(n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, Value>> {
        if let Value::Table(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// Take the string out, if this is one.
    pub fn into_string(self) -> Option<String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

/// Renders the value the way it would be written in an environment variable:
/// strings bare, arrays comma-separated, tables as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Table(_) => write!(f, "{}", serde_json::Value::from(self.clone())),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident via $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant($conv(v))
                }
            }
        )*
    };
}

value_from! {
    bool => Bool via std::convert::identity,
    i64 => Integer via std::convert::identity,
    i32 => Integer via i64::from,
    u16 => Integer via i64::from,
    u32 => Integer via i64::from,
    f64 => Float via std::convert::identity,
    String => String via std::convert::identity,
    &str => String via str::to_string,
    Ipv4Addr => String via |a: Ipv4Addr| a.to_string(),
    Ipv6Addr => String via |a: Ipv6Addr| a.to_string(),
}

#[cfg(feature = "url")]
value_from! { url::Url => String via String::from }

#[cfg(feature = "chrono")]
value_from! {
    chrono::DateTime<chrono::Utc> => String via |dt: chrono::DateTime<chrono::Utc>| dt.to_rfc3339(),
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Table(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or_default(),
            Json::String(s) => Value::String(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect::<Vec<_>>().into(),
            Json::Object(map) => Value::Table(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Integer(n) => Json::from(n),
            Value::Float(x) => serde_json::Number::from_f64(x).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Table(entries) => {
                Json::Object(entries.into_iter().map(|(k, v)| (k, Json::from(v))).collect())
            }
        }
    }
}

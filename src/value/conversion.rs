// Author: Tantowi Mustofa
// License: MIT

use super::*;

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from_float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from_float(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<Value> for i64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_integer()
    }
}

impl TryFrom<Value> for f64 {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_float()
    }
}

impl TryFrom<Value> for bool {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_boolean()
    }
}

impl TryFrom<Value> for String {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(JsonError::type_mismatch(Kind::String, other.kind())),
        }
    }
}

impl TryFrom<Value> for Array {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(a) => Ok(a),
            other => Err(JsonError::type_mismatch(Kind::Array, other.kind())),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(m) => Ok(m),
            other => Err(JsonError::type_mismatch(Kind::Map, other.kind())),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = JsonError>,
{
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Array::try_from(value)?
            .into_iter()
            .map(T::try_from)
            .collect()
    }
}

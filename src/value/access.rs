use super::*;

/// Typed accessors. Each one fails with [`JsonError::TypeMismatch`] when the
/// stored variant differs; none of them coerce between kinds.
impl Value {
    pub fn as_integer(&self) -> Result<i64, JsonError> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(JsonError::type_mismatch(Kind::Integer, other.kind())),
        }
    }

    pub fn as_float(&self) -> Result<f64, JsonError> {
        match self {
            Value::Float(n) => Ok(*n),
            other => Err(JsonError::type_mismatch(Kind::Float, other.kind())),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, JsonError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(JsonError::type_mismatch(Kind::Boolean, other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str, JsonError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(JsonError::type_mismatch(Kind::String, other.kind())),
        }
    }

    pub fn as_array(&self) -> Result<&Array, JsonError> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(JsonError::type_mismatch(Kind::Array, other.kind())),
        }
    }

    pub fn as_map(&self) -> Result<&Map, JsonError> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(JsonError::type_mismatch(Kind::Map, other.kind())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array, JsonError> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(JsonError::type_mismatch(Kind::Array, other.kind())),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut Map, JsonError> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(JsonError::type_mismatch(Kind::Map, other.kind())),
        }
    }
}

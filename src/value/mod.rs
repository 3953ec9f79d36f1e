// Author: Tantowi Mustofa
// License: MIT

use std::fmt;
use std::str::FromStr;

use crate::array::Array;
use crate::kind::Kind;
use crate::map::Map;
use crate::options::{ParseOptions, RenderOptions};
use crate::{parser, render, JsonError};

mod access;
mod conversion;

/// A JSON datum.
///
/// `Float` never holds NaN or an infinity when built through
/// [`Value::from_float`] or `From<f64>`: those become `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Array(Array),
    Map(Map),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn from_integer(value: i64) -> Self {
        Value::Integer(value)
    }

    /// Wraps a float, normalizing NaN and infinities to `Null`.
    pub fn from_float(value: f64) -> Self {
        if value.is_finite() {
            Value::Float(value)
        } else {
            Value::Null
        }
    }

    pub fn from_boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn from_string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    pub fn from_array(array: Array) -> Self {
        Value::Array(array)
    }

    pub fn from_map(map: Map) -> Self {
        Value::Map(map)
    }

    /// Parse JSON text with the default (lenient) options.
    ///
    /// # Examples
    /// ```
    /// use tantowi_json::Value;
    ///
    /// let value = Value::parse(r#"{"umur":52}"#).unwrap();
    /// assert_eq!(value.as_map().unwrap().get_integer("umur").unwrap(), 52);
    /// ```
    pub fn parse(text: &str) -> Result<Value, JsonError> {
        parser::Parser::new(text).parse()
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value, JsonError> {
        parser::Parser::with_options(text, *options).parse()
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Serialize to compact JSON text.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        render::write_value(&mut out, self, options);
        out
    }

    /// Append the compact JSON text of this value to `out`.
    pub fn render_into(&self, out: &mut String) {
        render::write_value(out, self, &RenderOptions::default());
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::parse(s)
    }
}

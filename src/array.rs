// Author: Tantowi Mustofa
// License: MIT

use std::fmt;

use crate::map::Map;
use crate::options::RenderOptions;
use crate::{render, JsonError, Value};

/// An ordered, growable sequence of [`Value`]s.
///
/// Values are appended one at a time and read by index; an index outside
/// `[0, len)` is an error rather than being clamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append a value. Anything convertible into a [`Value`] is accepted, so
    /// `push(52)`, `push("radio")` and `push(Map::new())` all work.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn push_null(&mut self) {
        self.items.push(Value::Null);
    }

    pub fn get(&self, index: usize) -> Result<&Value, JsonError> {
        self.items
            .get(index)
            .ok_or_else(|| JsonError::index_out_of_range(index, self.items.len()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value, JsonError> {
        let length = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| JsonError::index_out_of_range(index, length))
    }

    pub fn get_string(&self, index: usize) -> Result<&str, JsonError> {
        self.get(index)?.as_str()
    }

    pub fn get_integer(&self, index: usize) -> Result<i64, JsonError> {
        self.get(index)?.as_integer()
    }

    pub fn get_float(&self, index: usize) -> Result<f64, JsonError> {
        self.get(index)?.as_float()
    }

    pub fn get_boolean(&self, index: usize) -> Result<bool, JsonError> {
        self.get(index)?.as_boolean()
    }

    pub fn get_array(&self, index: usize) -> Result<&Array, JsonError> {
        self.get(index)?.as_array()
    }

    pub fn get_map(&self, index: usize) -> Result<&Map, JsonError> {
        self.get(index)?.as_map()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append `[`, the comma-separated elements, then `]` to `out`.
    pub fn render_into(&self, out: &mut String) {
        render::write_array(out, self, &RenderOptions::default());
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn test_push_sugar_wraps_scalars() {
        let mut array = Array::new();
        array.push(52);
        array.push(1.5);
        array.push(true);
        array.push("radio");
        array.push(Map::new());
        array.push(Array::new());
        array.push_null();

        assert_eq!(array.len(), 7);
        assert_eq!(array.get_integer(0).unwrap(), 52);
        assert_eq!(array.get_float(1).unwrap(), 1.5);
        assert!(array.get_boolean(2).unwrap());
        assert_eq!(array.get_string(3).unwrap(), "radio");
        assert!(array.get_map(4).unwrap().is_empty());
        assert!(array.get_array(5).unwrap().is_empty());
        assert!(array.get(6).unwrap().is_null());
    }

    #[test]
    fn test_get_out_of_range() {
        let mut array = Array::new();
        array.push(1);

        match array.get(1) {
            Err(JsonError::IndexOutOfRange { index, length, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(length, 1);
            }
            other => panic!("Expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_getter_propagates_mismatch() {
        let mut array = Array::new();
        array.push("not a number");

        let err = array.get_integer(0).unwrap_err();
        assert!(matches!(
            err,
            JsonError::TypeMismatch { expected: Kind::Integer, actual: Kind::String, .. }
        ));
        assert!(matches!(array.get_integer(5), Err(JsonError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_render() {
        assert_eq!(Array::new().render(), "[]");

        let mut array = Array::new();
        array.push(1);
        array.push("two");
        array.push_null();
        assert_eq!(array.render(), r#"[1,"two",null]"#);
        assert_eq!(array.to_string(), array.render());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let array: Array = vec![Value::from(3), Value::from(1), Value::from(3)]
            .into_iter()
            .collect();
        let ints: Vec<i64> = array.iter().map(|v| v.as_integer().unwrap()).collect();
        assert_eq!(ints, vec![3, 1, 3]);
    }

    #[test]
    fn test_get_mut_mutates_nested_container() {
        let mut array = Array::new();
        array.push(Array::new());
        array.get_mut(0).unwrap().as_array_mut().unwrap().push(7);
        assert_eq!(array.render(), "[[7]]");
    }
}

// Author: Tantowi Mustofa
// License: MIT

use std::fmt;

use indexmap::IndexMap;

use crate::array::Array;
use crate::options::{DuplicateKeys, RenderOptions};
use crate::{render, JsonError, Value};

/// An insertion-ordered mapping from string keys to [`Value`]s.
///
/// Keys are trimmed of surrounding whitespace before they are stored or looked
/// up, and must be unique: `put` on an existing key fails with
/// [`JsonError::DuplicateKey`] instead of overwriting. Looking up an absent key
/// fails with [`JsonError::KeyNotFound`]; a key that is present with a null
/// value returns `Value::Null`.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a value under `key` (trimmed). Anything convertible into a
    /// [`Value`] is accepted.
    ///
    /// # Examples
    /// ```
    /// use tantowi_json::{JsonError, Map};
    ///
    /// let mut map = Map::new();
    /// map.put("nama", "Tantowi").unwrap();
    /// assert!(matches!(map.put(" nama ", "Mustofa"), Err(JsonError::DuplicateKey { .. })));
    /// ```
    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> Result<(), JsonError> {
        let key = key.trim();
        if self.entries.contains_key(key) {
            return Err(JsonError::duplicate_key(key));
        }
        self.entries.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn put_null(&mut self, key: &str) -> Result<(), JsonError> {
        self.put(key, Value::Null)
    }

    /// Insert following a duplicate-key policy. Used by the parser.
    pub(crate) fn put_with(
        &mut self,
        key: &str,
        value: Value,
        policy: DuplicateKeys,
    ) -> Result<(), JsonError> {
        match policy {
            DuplicateKeys::Reject => self.put(key, value),
            DuplicateKeys::KeepFirst => {
                let key = key.trim();
                if !self.entries.contains_key(key) {
                    self.entries.insert(key.to_string(), value);
                }
                Ok(())
            }
            DuplicateKeys::KeepLast => {
                // IndexMap::insert keeps the original slot of an existing key.
                self.entries.insert(key.trim().to_string(), value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<&Value, JsonError> {
        let key = key.trim();
        self.entries
            .get(key)
            .ok_or_else(|| JsonError::key_not_found(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, JsonError> {
        let key = key.trim();
        self.entries
            .get_mut(key)
            .ok_or_else(|| JsonError::key_not_found(key))
    }

    pub fn get_string(&self, key: &str) -> Result<&str, JsonError> {
        self.get(key)?.as_str()
    }

    pub fn get_integer(&self, key: &str) -> Result<i64, JsonError> {
        self.get(key)?.as_integer()
    }

    pub fn get_float(&self, key: &str) -> Result<f64, JsonError> {
        self.get(key)?.as_float()
    }

    pub fn get_boolean(&self, key: &str) -> Result<bool, JsonError> {
        self.get(key)?.as_boolean()
    }

    pub fn get_array(&self, key: &str) -> Result<&Array, JsonError> {
        self.get(key)?.as_array()
    }

    pub fn get_map(&self, key: &str) -> Result<&Map, JsonError> {
        self.get(key)?.as_map()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key.trim())
    }

    /// Remove `key`, keeping the remaining keys in insertion order.
    pub fn remove(&mut self, key: &str) -> Result<Value, JsonError> {
        let key = key.trim();
        self.entries
            .shift_remove(key)
            .ok_or_else(|| JsonError::key_not_found(key))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Append `{`, the comma-separated `"key":value` pairs, then `}` to `out`.
    pub fn render_into(&self, out: &mut String) {
        render::write_map(out, self, &RenderOptions::default());
    }
}

/// Maps are equal when they hold equal values under the same keys in the
/// same order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;

    #[test]
    fn test_put_and_get_typed() {
        let mut map = Map::new();
        map.put("nama", "Tantowi\rMustofa").unwrap();
        map.put("umur", 52).unwrap();
        map.put("active", true).unwrap();
        map.put("ratio", 0.25).unwrap();
        map.put("tags", Array::new()).unwrap();
        map.put("nested", Map::new()).unwrap();
        map.put_null("spouse").unwrap();

        assert_eq!(map.len(), 7);
        assert_eq!(map.get_string("nama").unwrap(), "Tantowi\rMustofa");
        assert_eq!(map.get_integer("umur").unwrap(), 52);
        assert!(map.get_boolean("active").unwrap());
        assert_eq!(map.get_float("ratio").unwrap(), 0.25);
        assert!(map.get_array("tags").unwrap().is_empty());
        assert!(map.get_map("nested").unwrap().is_empty());
        assert!(map.get("spouse").unwrap().is_null());
    }

    #[test]
    fn test_keys_are_trimmed() {
        let mut map = Map::new();
        map.put("  nama\t", "x").unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["nama"]);
        assert!(map.contains_key("nama"));
        assert_eq!(map.get_string(" nama ").unwrap(), "x");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut map = Map::new();
        map.put("a", 1).unwrap();
        let err = map.put("a", 2).unwrap_err();
        assert!(matches!(err, JsonError::DuplicateKey { ref key, .. } if key == "a"));
        assert!(matches!(map.put(" a", 3), Err(JsonError::DuplicateKey { .. })));
        assert_eq!(map.get_integer("a").unwrap(), 1);
    }

    #[test]
    fn test_absent_key_is_error_not_null() {
        let mut map = Map::new();
        map.put_null("present").unwrap();

        assert!(map.get("present").unwrap().is_null());
        match map.get("absent") {
            Err(JsonError::KeyNotFound { key, .. }) => assert_eq!(key, "absent"),
            other => panic!("Expected KeyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_getter_mismatch() {
        let mut map = Map::new();
        map.put("nama", "Tantowi").unwrap();
        assert!(matches!(
            map.get_boolean("nama"),
            Err(JsonError::TypeMismatch { expected: Kind::Boolean, actual: Kind::String, .. })
        ));
    }

    #[test]
    fn test_keys_in_insertion_order() {
        let mut map = Map::new();
        map.put("zeta", 1).unwrap();
        map.put("alpha", 2).unwrap();
        map.put("mid", 3).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = Map::new();
        map.put("a", 1).unwrap();
        map.put("b", 2).unwrap();
        map.put("c", 3).unwrap();

        assert_eq!(map.remove("b").unwrap(), Value::Integer(2));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(matches!(map.remove("b"), Err(JsonError::KeyNotFound { .. })));

        map.put("b", 4).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_put_with_policies() {
        let mut map = Map::new();
        map.put("a", 1).unwrap();
        map.put("b", 2).unwrap();

        map.put_with("a", Value::from(10), DuplicateKeys::KeepFirst).unwrap();
        assert_eq!(map.get_integer("a").unwrap(), 1);

        map.put_with("a", Value::from(20), DuplicateKeys::KeepLast).unwrap();
        assert_eq!(map.get_integer("a").unwrap(), 20);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        assert!(map.put_with("a", Value::Null, DuplicateKeys::Reject).is_err());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut left = Map::new();
        left.put("a", 1).unwrap();
        left.put("b", 2).unwrap();

        let mut right = Map::new();
        right.put("b", 2).unwrap();
        right.put("a", 1).unwrap();

        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn test_render() {
        assert_eq!(Map::new().render(), "{}");

        let mut map = Map::new();
        map.put("nama", "Tantowi\rMustofa").unwrap();
        map.put("umur", 52).unwrap();
        map.put("active", true).unwrap();
        map.put("windows", "d:\\data\\radio").unwrap();
        map.put("linux", "/var/data/radio").unwrap();

        assert_eq!(
            map.to_string(),
            r#"{"nama":"Tantowi\rMustofa","umur":52,"active":true,"windows":"d:\\data\\radio","linux":"/var/data/radio"}"#
        );
    }
}

// Author: Tantowi Mustofa
// License: MIT

//! A small JSON document model with a forgiving parser.
//!
//! ```
//! use tantowi_json::{Map, Value};
//!
//! let value = tantowi_json::parse(r#"{"nama":"Tantowi","umur":52,"hobi":["radio"]}"#)?;
//! let map = value.as_map()?;
//! assert_eq!(map.get_integer("umur")?, 52);
//!
//! let mut out = Map::new();
//! out.put("ok", true)?;
//! assert_eq!(Value::from(out).render(), r#"{"ok":true}"#);
//! # Ok::<(), tantowi_json::JsonError>(())
//! ```

pub mod array;
pub mod error;
pub mod export;
pub mod file;
pub mod kind;
pub mod map;
pub mod options;
pub mod parser;
pub mod render;
pub mod value;

pub use array::Array;
pub use error::JsonError;
pub use file::{read_file, read_file_with, write_file};
pub use kind::Kind;
pub use map::Map;
pub use options::{DuplicateKeys, ParseMode, ParseOptions, RenderOptions};
pub use parser::Parser;
pub use render::escape_str;
pub use value::Value;

/// Parse `text` with the default (lenient) options.
pub fn parse(text: &str) -> Result<Value, JsonError> {
    Value::parse(text)
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value, JsonError> {
    Value::parse_with(text, options)
}

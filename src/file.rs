// Author: Tantowi Mustofa
// License: MIT

use std::fs;
use std::path::Path;

use crate::options::ParseOptions;
use crate::parser::Parser;
use crate::{JsonError, Value};

/// Read and parse a JSON file with the default (lenient) options.
///
/// # Example
/// ```no_run
/// let value = tantowi_json::read_file("settings.json")?;
/// # Ok::<(), tantowi_json::JsonError>(())
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Value, JsonError> {
    read_file_with(path, &ParseOptions::default())
}

pub fn read_file_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Value, JsonError> {
    let content = fs::read_to_string(&path).map_err(|e| JsonError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable UTF-8".into()),
        code: Some(301),
    })?;

    Parser::with_options(&content, *options).parse()
}

/// Render `value` compactly and write it to `path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(path: P, value: &Value) -> Result<(), JsonError> {
    fs::write(&path, value.render()).map_err(|e| JsonError::FileError {
        message: format!("Failed to write file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the parent directory exists and is writable".into()),
        code: Some(302),
    })
}

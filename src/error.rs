use std::fmt;

use crate::kind::Kind;

/// The error type for JSON parsing, value access, and file I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonError {
    /// A typed accessor was called on a value holding a different variant.
    TypeMismatch {
        expected: Kind,
        actual: Kind,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A map lookup named a key that is not present.
    KeyNotFound {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// An array lookup used an index outside `[0, length)`.
    IndexOutOfRange {
        index: usize,
        length: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A map insert named a key (after trimming) that is already present.
    DuplicateKey {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl JsonError {
    pub(crate) fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        JsonError::TypeMismatch {
            expected,
            actual,
            hint: Some(format!("Check the value with `is_{}` before reading it", expected)),
            code: Some(401),
        }
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        JsonError::KeyNotFound {
            key: key.to_string(),
            hint: Some("Use `contains_key` to test for optional keys".into()),
            code: Some(402),
        }
    }

    pub(crate) fn index_out_of_range(index: usize, length: usize) -> Self {
        JsonError::IndexOutOfRange {
            index,
            length,
            hint: None,
            code: Some(403),
        }
    }

    pub(crate) fn duplicate_key(key: &str) -> Self {
        JsonError::DuplicateKey {
            key: key.to_string(),
            hint: Some("Keys are trimmed before insertion and must be unique".into()),
            code: Some(404),
        }
    }

    /// The numeric code attached to this error, if any.
    pub fn code(&self) -> Option<u32> {
        match self {
            JsonError::TypeMismatch { code, .. }
            | JsonError::KeyNotFound { code, .. }
            | JsonError::IndexOutOfRange { code, .. }
            | JsonError::DuplicateKey { code, .. }
            | JsonError::SyntaxError { code, .. }
            | JsonError::UnexpectedEof { code, .. }
            | JsonError::FileError { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonError::TypeMismatch { expected, actual, hint, code } =>
                write!(f, "[JSON] Type Mismatch: expected {}, found {}{}",
                    expected, actual, suffix(hint, code)),
            JsonError::KeyNotFound { key, hint, code } =>
                write!(f, "[JSON] Key Not Found: '{}'{}", key, suffix(hint, code)),
            JsonError::IndexOutOfRange { index, length, hint, code } =>
                write!(f, "[JSON] Index Out Of Range: {} (length {}){}",
                    index, length, suffix(hint, code)),
            JsonError::DuplicateKey { key, hint, code } =>
                write!(f, "[JSON] Duplicate Key: '{}'{}", key, suffix(hint, code)),
            JsonError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[JSON] Syntax Error at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            JsonError::UnexpectedEof { message, line, column, hint, code } =>
                write!(f, "[JSON] Unexpected EOF at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            JsonError::FileError { message, path, hint, code } =>
                write!(f, "[JSON] File Error '{}': {}{}", path, message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for JsonError {}

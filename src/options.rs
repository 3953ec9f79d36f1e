// Author: Tantowi Mustofa
// License: MIT

use serde::{Deserialize, Serialize};

/// How the parser treats input it cannot read cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Recover locally: malformed literals become `null`, stray separators are
    /// skipped, and unterminated containers or strings end at end of input.
    #[default]
    Lenient,
    /// Report every recovery case as a syntax error.
    Strict,
}

/// What to do when an object repeats a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// Abort the parse with [`JsonError::DuplicateKey`](crate::JsonError::DuplicateKey).
    #[default]
    Reject,
    KeepFirst,
    /// Replace the earlier value; the key keeps its original position.
    KeepLast,
}

/// Parser configuration.
///
/// Derives serde so it can be read from a settings file:
/// ```
/// use tantowi_json::{DuplicateKeys, ParseMode, ParseOptions};
///
/// let options: ParseOptions =
///     serde_json::from_str(r#"{"mode":"strict","duplicate_keys":"keep_last"}"#).unwrap();
/// assert_eq!(options.mode, ParseMode::Strict);
/// assert_eq!(options.duplicate_keys, DuplicateKeys::KeepLast);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub mode: ParseMode,
    pub duplicate_keys: DuplicateKeys,
    /// Maximum nesting of arrays and objects. Exceeding it is an error in
    /// both modes.
    pub max_depth: usize,
}

pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            duplicate_keys: DuplicateKeys::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn lenient() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}

/// Serializer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit U+2000..=U+20FF (general punctuation, super/subscripts, currency
    /// symbols) as `\uXXXX` escapes.
    pub escape_punctuation_block: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_punctuation_block: true,
        }
    }
}

impl RenderOptions {
    pub fn with_escape_punctuation_block(mut self, escape: bool) -> Self {
        self.escape_punctuation_block = escape;
        self
    }
}

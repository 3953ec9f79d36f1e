// Author: Tantowi Mustofa
// License: MIT

use crate::options::ParseOptions;
use crate::{JsonError, Value};

mod container;
mod literal;
mod scanner;
mod string;
mod value;

use scanner::skip_whitespace;

/// Recursive-descent JSON parser over a materialized character buffer.
///
/// A parser holds a single cursor and is consumed by [`Parser::parse`], so an
/// instance performs exactly one parse.
pub struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &str, options: ParseOptions) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Parse the whole input into a single root value.
    ///
    /// Empty (or whitespace-only) input yields `Value::Null`.
    pub fn parse(mut self) -> Result<Value, JsonError> {
        skip_whitespace(&mut self);
        if self.is_at_end() {
            return Ok(Value::Null);
        }

        let root = value::parse_value(&mut self)?;

        skip_whitespace(&mut self);
        if !self.is_at_end() && self.is_strict() {
            return Err(self.syntax_error(
                "Unexpected characters after the root value",
                Some("A document holds exactly one value"),
                209,
            ));
        }
        Ok(root)
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let curr = self.peek();
        if curr.is_some() {
            self.pos += 1;
        }
        curr
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.options.is_strict()
    }

    pub(crate) fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// 1-based line and column of the cursor.
    pub(crate) fn location(&self) -> (usize, usize) {
        self.location_at(self.pos)
    }

    /// Computed on demand; only error paths need it.
    pub(crate) fn location_at(&self, pos: usize) -> (usize, usize) {
        let consumed = &self.chars[..pos.min(self.chars.len())];
        let line = 1 + consumed.iter().filter(|&&c| c == '\n').count();
        let column = 1 + consumed.iter().rev().take_while(|&&c| c != '\n').count();
        (line, column)
    }

    pub(crate) fn syntax_error(&self, message: &str, hint: Option<&str>, code: u32) -> JsonError {
        let (line, column) = self.location();
        JsonError::SyntaxError {
            message: message.to_string(),
            line,
            column,
            hint: hint.map(str::to_string),
            code: Some(code),
        }
    }

    pub(crate) fn eof_error(&self, message: &str) -> JsonError {
        let (line, column) = self.location();
        JsonError::UnexpectedEof {
            message: message.to_string(),
            line,
            column,
            hint: None,
            code: Some(201),
        }
    }

    pub(crate) fn enter(&mut self) -> Result<(), JsonError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.syntax_error(
                &format!("Nesting deeper than {} levels", self.options.max_depth),
                Some("Raise `max_depth` in ParseOptions for deeply nested documents"),
                210,
            ));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

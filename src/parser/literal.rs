use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use super::scanner::{is_delimiter, WHITESPACE};

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap()
});

// Strict mode only accepts the JSON number grammar: no sign prefix `+`, no
// leading zeros, and digits on both sides of the decimal point.
static STRICT_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").unwrap());

static STRICT_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap()
});

/// Scan a run of characters up to the next `, : ] }` (or end of input) and
/// classify it as null, boolean, integer, or float.
pub(super) fn parse_bare_token(parser: &mut Parser) -> Result<Value, JsonError> {
    let start = parser.pos;
    let mut token = String::new();
    while let Some(ch) = parser.peek() {
        if is_delimiter(ch) {
            break;
        }
        token.push(ch);
        parser.bump();
    }

    let token = token.trim_matches(WHITESPACE);
    match classify(token, parser.is_strict()) {
        Some(value) => Ok(value),
        None if parser.is_strict() => {
            if token.is_empty() && parser.is_at_end() {
                return Err(parser.eof_error("Expected a value"));
            }
            let (line, column) = parser.location_at(start);
            let (message, code) = if token.is_empty() {
                ("Expected a value".to_string(), 206)
            } else {
                (format!("Invalid literal '{}'", token), 207)
            };
            Err(JsonError::SyntaxError {
                message,
                line,
                column,
                hint: hint_for(token),
                code: Some(code),
            })
        }
        // Lenient: anything unrecognized reads as null.
        None => Ok(Value::Null),
    }
}

/// Classify a trimmed bare token. Conversion is locale-free: the decimal point
/// is always `.` and digit grouping is never accepted.
pub(crate) fn classify(token: &str, strict: bool) -> Option<Value> {
    let (integer, float) = if strict {
        (&*STRICT_INTEGER, &*STRICT_FLOAT)
    } else {
        (&*INTEGER, &*FLOAT)
    };

    match token {
        "null" => return Some(Value::Null),
        "true" => return Some(Value::Boolean(true)),
        "false" => return Some(Value::Boolean(false)),
        _ => {}
    }

    if token.contains(['.', 'e', 'E']) {
        if !float.is_match(token) {
            return None;
        }
        // Out-of-range exponents overflow to infinity, which normalizes to null.
        token.parse::<f64>().ok().map(Value::from_float)
    } else {
        if !integer.is_match(token) {
            return None;
        }
        token.parse::<i64>().ok().map(Value::Integer)
    }
}

fn hint_for(token: &str) -> Option<String> {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "null" | "true" | "false" => Some(format!("Literals are lowercase: '{}'", lower)),
        "nan" | "infinity" | "-infinity" | "inf" => {
            Some("JSON has no NaN or infinity; use null".into())
        }
        _ => None,
    }
}

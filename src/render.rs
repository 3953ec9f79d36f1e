// Author: Tantowi Mustofa
// License: MIT

use std::fmt::Write;

use crate::array::Array;
use crate::map::Map;
use crate::options::RenderOptions;
use crate::Value;

/// Quote and escape `text` the way string values and keys are rendered.
///
/// # Examples
/// ```
/// assert_eq!(tantowi_json::escape_str("a\"b\\c\r"), r#""a\"b\\c\r""#);
/// assert_eq!(tantowi_json::escape_str("\u{2022}"), r#""\u2022""#);
/// ```
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    write_escaped(&mut out, text, &RenderOptions::default());
    out
}

pub(crate) fn write_value(out: &mut String, value: &Value, options: &RenderOptions) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Integer(n) => out.push_str(itoa::Buffer::new().format(*n)),
        Value::Float(n) => write_float(out, *n),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::String(s) => write_escaped(out, s, options),
        Value::Array(a) => write_array(out, a, options),
        Value::Map(m) => write_map(out, m, options),
    }
}

pub(crate) fn write_array(out: &mut String, array: &Array, options: &RenderOptions) {
    out.push('[');
    for (i, item) in array.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(out, item, options);
    }
    out.push(']');
}

pub(crate) fn write_map(out: &mut String, map: &Map, options: &RenderOptions) {
    out.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_escaped(out, key, options);
        out.push(':');
        write_value(out, value, options);
    }
    out.push('}');
}

/// Shortest decimal that reads back to the same `f64`, always carrying a `.`
/// or an exponent so it re-parses as a float. Non-finite values render as
/// `null`.
fn write_float(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
        return;
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-5..1e16).contains(&magnitude) {
        let _ = write!(out, "{:e}", n);
        return;
    }

    let start = out.len();
    let _ = write!(out, "{}", n);
    if !out[start..].contains('.') {
        out.push_str(".0");
    }
}

fn write_escaped(out: &mut String, text: &str, options: &RenderOptions) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{00}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => write_unicode_escape(out, ch),
            '\u{2000}'..='\u{20FF}' if options.escape_punctuation_block => {
                write_unicode_escape(out, ch)
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn write_unicode_escape(out: &mut String, ch: char) {
    let _ = write!(out, "\\u{:04X}", ch as u32);
}

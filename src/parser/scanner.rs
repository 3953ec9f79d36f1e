use super::*;

/// JSON whitespace (space, tab, carriage return, line feed)
pub(super) const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Skip JSON whitespace
pub(super) fn skip_whitespace(parser: &mut Parser) {
    while parser.peek().is_some_and(|c| WHITESPACE.contains(&c)) {
        parser.bump();
    }
}

/// Characters that end a bare token
pub(super) fn is_delimiter(ch: char) -> bool {
    matches!(ch, ',' | ':' | ']' | '}')
}

/// Consume the separator after an array element or object member.
///
/// Returns `true` when the closing character was consumed (or input ran out
/// in lenient mode) and the container is complete.
pub(super) fn finish_member(parser: &mut Parser, close: char, what: &str) -> Result<bool, JsonError> {
    skip_whitespace(parser);
    match parser.peek() {
        Some(ch) if ch == close => {
            parser.bump();
            Ok(true)
        }
        Some(',') => {
            parser.bump();
            if parser.is_strict() {
                skip_whitespace(parser);
                if parser.peek() == Some(close) {
                    return Err(parser.syntax_error(
                        &format!("Trailing comma before '{}' in {}", close, what),
                        Some("Remove the comma after the last member"),
                        203,
                    ));
                }
            }
            Ok(false)
        }
        None if parser.is_strict() => Err(parser.eof_error(&format!("Unterminated {}", what))),
        None => Ok(true),
        Some(ch) if parser.is_strict() => Err(parser.syntax_error(
            &format!("Expected ',' or '{}' in {}, found '{}'", close, what, ch),
            None,
            203,
        )),
        Some(_) => {
            // Lenient: any single character stands in for the separator.
            parser.bump();
            Ok(false)
        }
    }
}

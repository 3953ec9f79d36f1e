use super::*;
use super::scanner::finish_member;
use crate::array::Array;
use crate::map::Map;

pub(super) fn parse_array(parser: &mut Parser) -> Result<Array, JsonError> {
    parser.bump(); // consume [
    parser.enter()?;

    let mut array = Array::new();
    loop {
        skip_whitespace(parser);
        match parser.peek() {
            Some(']') => {
                parser.bump();
                break;
            }
            None if parser.is_strict() => return Err(parser.eof_error("Unterminated array")),
            None => break,
            _ => {}
        }

        array.push(value::parse_value(parser)?);
        if finish_member(parser, ']', "array")? {
            break;
        }
    }

    parser.leave();
    Ok(array)
}

pub(super) fn parse_map(parser: &mut Parser) -> Result<Map, JsonError> {
    parser.bump(); // consume {
    parser.enter()?;

    let mut map = Map::new();
    loop {
        skip_whitespace(parser);
        match parser.peek() {
            Some('}') => {
                parser.bump();
                break;
            }
            Some('"') => {}
            None if parser.is_strict() => return Err(parser.eof_error("Unterminated object")),
            None => break,
            Some(ch) => {
                return Err(parser.syntax_error(
                    &format!("Expected a quoted key, found '{}'", ch),
                    Some("Object keys must be double-quoted strings"),
                    204,
                ));
            }
        }

        let key = string::parse_string(parser)?;
        parse_colon(parser)?;
        let value = value::parse_value(parser)?;
        map.put_with(&key, value, parser.options().duplicate_keys)?;

        if finish_member(parser, '}', "object")? {
            break;
        }
    }

    parser.leave();
    Ok(map)
}

fn parse_colon(parser: &mut Parser) -> Result<(), JsonError> {
    skip_whitespace(parser);
    match parser.peek() {
        Some(':') => {
            parser.bump();
            Ok(())
        }
        _ if parser.is_strict() => Err(parser.syntax_error(
            "Expected ':' after object key",
            None,
            205,
        )),
        // Lenient: a missing colon is tolerated and the value follows directly.
        _ => Ok(()),
    }
}

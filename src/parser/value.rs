use super::*;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value, JsonError> {
    skip_whitespace(parser);
    match parser.peek() {
        Some('[') => container::parse_array(parser).map(Value::Array),
        Some('{') => container::parse_map(parser).map(Value::Map),
        Some('"') => string::parse_string(parser).map(Value::String),
        _ => literal::parse_bare_token(parser),
    }
}

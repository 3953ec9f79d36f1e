use super::*;

/// Parse a double-quoted string, decoding backslash escapes.
pub(super) fn parse_string(parser: &mut Parser) -> Result<String, JsonError> {
    parser.bump(); // consume opening quote

    let mut content = String::new();
    loop {
        match parser.bump() {
            Some('"') => break,
            Some('\\') => parse_escape(parser, &mut content)?,
            Some(ch) => content.push(ch),
            None if parser.is_strict() => return Err(parser.eof_error("Unterminated string")),
            None => break,
        }
    }
    Ok(content)
}

fn parse_escape(parser: &mut Parser, content: &mut String) -> Result<(), JsonError> {
    let Some(ch) = parser.bump() else {
        if parser.is_strict() {
            return Err(parser.eof_error("Unterminated escape sequence"));
        }
        return Ok(());
    };

    match ch {
        '"' => content.push('"'),
        '\\' => content.push('\\'),
        '/' => content.push('/'),
        'b' => content.push('\u{08}'),
        'f' => content.push('\u{0C}'),
        'n' => content.push('\n'),
        'r' => content.push('\r'),
        't' => content.push('\t'),
        'u' => parse_unicode_escape(parser, content)?,
        other if parser.is_strict() => {
            return Err(parser.syntax_error(
                &format!("Invalid escape sequence: \\{}", other),
                Some("Valid escapes are \\\" \\\\ \\/ \\b \\f \\n \\r \\t and \\uXXXX"),
                208,
            ));
        }
        _ => {} // unknown escapes are dropped
    }
    Ok(())
}

/// Decode the `XXXX` of a `\uXXXX` escape, joining a following low surrogate
/// escape when the first code unit is a high surrogate.
fn parse_unicode_escape(parser: &mut Parser, content: &mut String) -> Result<(), JsonError> {
    let Some(unit) = hex4_at(parser, 0) else {
        if parser.is_strict() {
            return Err(parser.syntax_error(
                "Invalid Unicode escape (should be a 4-character hex code)",
                None,
                208,
            ));
        }
        // Lenient: the four characters after `\u` are dropped whatever they hold.
        skip(parser, 4);
        return Ok(());
    };
    skip(parser, 4);

    let decoded = match unit {
        0xD800..=0xDBFF => {
            let low = match (parser.peek(), parser.peek_at(1)) {
                (Some('\\'), Some('u')) => hex4_at(parser, 2).filter(|u| (0xDC00..=0xDFFF).contains(u)),
                _ => None,
            };
            match low {
                Some(low) => {
                    skip(parser, 6);
                    char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                }
                None => None,
            }
        }
        0xDC00..=0xDFFF => None,
        _ => char::from_u32(unit),
    };

    match decoded {
        Some(ch) => content.push(ch),
        None if parser.is_strict() => {
            return Err(parser.syntax_error(
                &format!("Unpaired surrogate in Unicode escape: \\u{:04X}", unit),
                None,
                208,
            ));
        }
        None => {} // lone surrogates are dropped
    }
    Ok(())
}

/// Read four hex digits starting `offset` characters past the cursor,
/// without consuming them.
fn hex4_at(parser: &Parser, offset: usize) -> Option<u32> {
    (0..4).try_fold(0u32, |acc, i| {
        let digit = parser.peek_at(offset + i)?.to_digit(16)?;
        Some(acc * 16 + digit)
    })
}

fn skip(parser: &mut Parser, count: usize) {
    for _ in 0..count {
        parser.bump();
    }
}

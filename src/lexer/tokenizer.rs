use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use super::scanner::{
    Mark, bump, bump_if, bump_while, is_eol, mark, peek_second, rest, skip_whitespace_and_comments,
    slice_from,
};

// Zulu dates, e.g. 1979-05-27T07:32:00Z.
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z")
        .expect("date pattern is valid")
});

pub(super) fn next_token(lexer: &mut Lexer) -> Token {
    if let Some(failed) = &lexer.failed {
        return failed.clone();
    }

    skip_whitespace_and_comments(lexer);

    let token = match lexer.peek {
        Some(c) if c.is_alphabetic() || c == '_' => tokenize_identifier_or_bool(lexer),
        Some('"') => tokenize_string(lexer),
        Some(c) if c.is_ascii_digit() => match tokenize_date(lexer) {
            Some(token) => token,
            None => tokenize_number(lexer),
        },
        Some('-') | Some('+') => tokenize_number(lexer),
        Some('=') => tokenize_symbol(lexer, TokenKind::Equal),
        Some('[') => tokenize_symbol(lexer, TokenKind::LBracket),
        Some(']') => tokenize_symbol(lexer, TokenKind::RBracket),
        Some(',') => tokenize_symbol(lexer, TokenKind::Comma),
        Some('\n') => tokenize_symbol(lexer, TokenKind::Eol),
        Some(ch) => tokenize_unexpected_char(lexer, ch),
        None => token_at(mark(lexer), TokenKind::Eof),
    };

    if matches!(token.kind, TokenKind::Error(_)) {
        lexer.failed = Some(token.clone());
    }
    token
}

fn token_at(at: Mark, kind: TokenKind) -> Token {
    Token {
        kind,
        line: at.line,
        column: at.column,
    }
}

fn error_at(at: Mark, message: impl Into<String>) -> Token {
    token_at(at, TokenKind::Error(message.into()))
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind) -> Token {
    let start = mark(lexer);
    bump(lexer);
    token_at(start, kind)
}

fn tokenize_unexpected_char(lexer: &Lexer, ch: char) -> Token {
    let message = if !is_printable(ch) {
        format!("unexpected \\u{:04X} character", ch as u32)
    } else {
        format!("unexpected '{}' character", ch)
    };
    error_at(mark(lexer), message)
}

// Controls, line and paragraph separators and invisible format characters
// are echoed as escapes.
fn is_printable(ch: char) -> bool {
    !(ch.is_control()
        || (ch.is_whitespace() && ch != ' ')
        || matches!(
            ch,
            '\u{AD}'
                | '\u{200B}'..='\u{200F}'
                | '\u{2028}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{FEFF}'
        ))
}

fn tokenize_identifier_or_bool(lexer: &mut Lexer) -> Token {
    let start = mark(lexer);
    bump(lexer);
    bump_while(lexer, |ch| ch.is_alphanumeric() || ch == '_' || ch == '-');

    let kind = match slice_from(lexer, start) {
        "true" => TokenKind::Bool(true),
        "false" => TokenKind::Bool(false),
        ident => TokenKind::Ident(ident.to_string()),
    };
    token_at(start, kind)
}

/// Escapes are validated but kept verbatim; only the quotes are stripped.
fn tokenize_string(lexer: &mut Lexer) -> Token {
    let start = mark(lexer);
    bump(lexer); // consume opening '"'

    loop {
        let ch = match in_string(lexer) {
            Ok(ch) => ch,
            Err(error) => return error,
        };
        match ch {
            '"' => break,
            '\\' => {
                if let Err(error) = tokenize_escape(lexer) {
                    return error;
                }
            }
            _ => {
                bump(lexer);
            }
        }
    }

    bump(lexer); // consume closing '"'
    let quoted = slice_from(lexer, start);
    let content = &quoted[1..quoted.len() - 1];
    token_at(start, TokenKind::String(content.to_string()))
}

fn tokenize_escape(lexer: &mut Lexer) -> Result<(), Token> {
    // Errors about the whole sequence point at the backslash.
    let escape = mark(lexer);
    bump(lexer); // consume '\'

    match in_string(lexer)? {
        'b' | 't' | 'n' | 'f' | 'r' | '"' | '/' | '\\' => {
            bump(lexer);
        }
        'u' => {
            bump(lexer);
            for _ in 0..4 {
                match in_string(lexer)? {
                    c if c.is_ascii_hexdigit() => {
                        bump(lexer);
                    }
                    '"' => {
                        let message =
                            format!("malformed hex escape sequence {}", slice_from(lexer, escape));
                        return Err(Token {
                            kind: TokenKind::Error(message),
                            line: lexer.line,
                            column: escape.column,
                        });
                    }
                    c => {
                        return Err(error_at(
                            mark(lexer),
                            format!("non-hex character in escape sequence: {:?}", c),
                        ));
                    }
                }
            }
        }
        _ => {
            let at = mark(lexer);
            bump(lexer);
            let message = format!("unknown escape sequence: {}", slice_from(lexer, escape));
            return Err(error_at(at, message));
        }
    }
    Ok(())
}

/// The character under the cursor, unless the string runs into a line end or
/// the end of input.
fn in_string(lexer: &Lexer) -> Result<char, Token> {
    match lexer.peek {
        None => Err(error_at(mark(lexer), "end-of-file in string")),
        Some(c) if is_eol(c) => Err(error_at(mark(lexer), "newline in string")),
        Some(c) => Ok(c),
    }
}

/// Tries the fixed Zulu date pattern at the cursor. `None` means no match and
/// the caller falls through to numbers; a match that is not a valid date
/// yields the date parser's own diagnostic.
fn tokenize_date(lexer: &mut Lexer) -> Option<Token> {
    let start = mark(lexer);
    let text = DATE_RE.find(rest(lexer))?.as_str();

    let token = match DateTime::parse_from_rfc3339(text) {
        Ok(date) => {
            for _ in 0..text.len() {
                bump(lexer);
            }
            token_at(start, TokenKind::Date(date.with_timezone(&Utc)))
        }
        Err(e) => error_at(start, e.to_string()),
    };
    Some(token)
}

fn tokenize_number(lexer: &mut Lexer) -> Token {
    let start = mark(lexer);
    let sign = match lexer.peek {
        Some(c @ ('-' | '+')) => {
            bump(lexer);
            Some(c)
        }
        _ => None,
    };

    if lexer.peek == Some('0') && matches!(peek_second(lexer), Some('x' | 'X')) {
        bump(lexer); // '0'
        bump(lexer); // 'x' or 'X'
        let digits_at = mark(lexer);
        if bump_while(lexer, |c| c.is_ascii_hexdigit()) == 0 {
            return error_at(
                mark(lexer),
                format!("malformed hex constant {:?}", slice_from(lexer, start)),
            );
        }
        let digits = slice_from(lexer, digits_at);
        let literal = match sign {
            Some(s) => format!("{}{}", s, digits),
            None => digits.to_string(),
        };
        return match i64::from_str_radix(&literal, 16) {
            Ok(i) => token_at(start, TokenKind::Int(i)),
            Err(e) => error_at(mark(lexer), format!("{:?}: {}", literal, e)),
        };
    }

    let mut is_float = false;
    let digits_before_dot = bump_while(lexer, |c| c.is_ascii_digit()) > 0;
    if !digits_before_dot && lexer.peek != Some('.') {
        return error_at(
            mark(lexer),
            format!("malformed constant {:?}", slice_from(lexer, start)),
        );
    }

    if bump_if(lexer, ".") {
        is_float = true;
        if bump_while(lexer, |c| c.is_ascii_digit()) == 0 && !digits_before_dot {
            return error_at(
                mark(lexer),
                format!("malformed floating-point constant {:?}", slice_from(lexer, start)),
            );
        }
    }

    if bump_if(lexer, "eE") {
        is_float = true;
        bump_if(lexer, "+-");
        if bump_while(lexer, |c| c.is_ascii_digit()) == 0 {
            return error_at(start, "malformed floating-point constant exponent");
        }
    }

    let literal = slice_from(lexer, start);
    if is_float {
        match literal.parse::<f64>() {
            Ok(x) if x.is_finite() => token_at(start, TokenKind::Float(x)),
            Ok(_) => error_at(mark(lexer), format!("{:?}: value out of range", literal)),
            Err(e) => error_at(mark(lexer), format!("{:?}: {}", literal, e)),
        }
    } else {
        match literal.parse::<i64>() {
            Ok(i) => token_at(start, TokenKind::Int(i)),
            Err(e) => error_at(mark(lexer), format!("{:?}: {}", literal, e)),
        }
    }
}

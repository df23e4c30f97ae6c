#[cfg(test)]
use super::*;
use chrono::TimeZone;

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = matches!(tok.kind, TokenKind::Eof | TokenKind::Error(_));
        out.push(tok.kind);
        if done {
            return out;
        }
    }
}

fn first_error(input: &str) -> Token {
    let mut lexer = Lexer::new(input);
    loop {
        let tok = lexer.next_token();
        match tok.kind {
            TokenKind::Error(_) => return tok,
            TokenKind::Eof => panic!("expected a lexing error in {:?}", input),
            _ => {}
        }
    }
}

fn error_message(input: &str) -> String {
    match first_error(input).kind {
        TokenKind::Error(message) => message,
        _ => unreachable!(),
    }
}

#[test]
fn test_positions_and_values() {
    let input = "
iden_ti-fier true false \"abcd\" \"\\u123456\" 1234 +1 -210
0xAb -0xFFee 5. 1.2 -2.3456 1.5E5 -1.4e-4
# Comment
1979-05-27T07:32:00Z = [ ] ,";

    let date = Utc.with_ymd_and_hms(1979, 5, 27, 7, 32, 0).unwrap();
    let expected = vec![
        (TokenKind::Eol, 1, 1),
        (TokenKind::Ident("iden_ti-fier".into()), 2, 1),
        (TokenKind::Bool(true), 2, 14),
        (TokenKind::Bool(false), 2, 19),
        (TokenKind::String("abcd".into()), 2, 25),
        (TokenKind::String("\\u123456".into()), 2, 32),
        (TokenKind::Int(1234), 2, 43),
        (TokenKind::Int(1), 2, 48),
        (TokenKind::Int(-210), 2, 51),
        (TokenKind::Eol, 2, 55),
        (TokenKind::Int(171), 3, 1),
        (TokenKind::Int(-65518), 3, 6),
        (TokenKind::Float(5.0), 3, 14),
        (TokenKind::Float(1.2), 3, 17),
        (TokenKind::Float(-2.3456), 3, 21),
        (TokenKind::Float(1.5e5), 3, 29),
        (TokenKind::Float(-1.4e-4), 3, 35),
        (TokenKind::Eol, 3, 42),
        (TokenKind::Eol, 4, 10),
        (TokenKind::Date(date), 5, 1),
        (TokenKind::Equal, 5, 22),
        (TokenKind::LBracket, 5, 24),
        (TokenKind::RBracket, 5, 26),
        (TokenKind::Comma, 5, 28),
        (TokenKind::Eof, 5, 29),
    ];

    let mut lexer = Lexer::new(input);
    for (kind, line, column) in expected {
        let tok = lexer.next_token();
        assert_eq!(tok, Token { kind, line, column });
    }
}

#[test]
fn test_exponent_without_dot_is_float() {
    assert_eq!(kinds("1e3"), vec![TokenKind::Float(1000.0), TokenKind::Eof]);
    assert_eq!(kinds("-.5"), vec![TokenKind::Float(-0.5), TokenKind::Eof]);
}

#[test]
fn test_hyphen_and_underscore_identifiers() {
    assert_eq!(
        kinds("foo-bar _qux123"),
        vec![
            TokenKind::Ident("foo-bar".into()),
            TokenKind::Ident("_qux123".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comment_keeps_eol() {
    assert_eq!(
        kinds("a = 1 # trailing\nb"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::Equal,
            TokenKind::Int(1),
            TokenKind::Eol,
            TokenKind::Ident("b".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_escapes_are_kept_verbatim() {
    assert_eq!(
        kinds(r#""a\tb\"c\u00e9""#),
        vec![TokenKind::String(r#"a\tb\"c\u00e9"#.into()), TokenKind::Eof]
    );
}

#[test]
fn test_unexpected_characters() {
    assert_eq!(error_message("("), "unexpected '(' character");
    assert_eq!(error_message("\u{7}"), "unexpected \\u0007 character");
    assert_eq!(error_message("b = \u{200B}"), "unexpected \\u200B character");
    assert_eq!(error_message("\u{FEFF}a = 1"), "unexpected \\uFEFF character");
    assert_eq!(error_message("a = \u{2028}"), "unexpected \\u2028 character");
    assert_eq!(error_message("a = §"), "unexpected '§' character");

    let tok = first_error("a = *");
    assert_eq!((tok.line, tok.column), (1, 5));
}

#[test]
fn test_invalid_date_reports_date_error() {
    let tok = first_error("1979-05-27T99:32:00Z");
    assert_eq!((tok.line, tok.column), (1, 1));
    match tok.kind {
        TokenKind::Error(message) => assert!(message.contains("out of range"), "{}", message),
        other => panic!("unexpected token {:?}", other),
    }
}

#[test]
fn test_malformed_numbers() {
    assert_eq!(error_message("+"), "malformed constant \"+\"");
    assert_eq!(error_message("0Xz"), "malformed hex constant \"0X\"");
    assert_eq!(error_message("+."), "malformed floating-point constant \"+.\"");
    assert_eq!(error_message("+.1e"), "malformed floating-point constant exponent");
    assert_eq!(error_message("+9.1e+"), "malformed floating-point constant exponent");
    assert_eq!(
        error_message("0.123456789e123456789"),
        "\"0.123456789e123456789\": value out of range"
    );
    assert_eq!(
        error_message("99999999999999999999"),
        "\"99999999999999999999\": number too large to fit in target type"
    );
}

#[test]
fn test_malformed_exponent_points_at_literal_start() {
    let tok = first_error("x = 12.5e+");
    assert_eq!((tok.line, tok.column), (1, 5));
}

#[test]
fn test_unterminated_strings() {
    assert_eq!(error_message("\"abcd"), "end-of-file in string");
    assert_eq!(error_message("\"a\n"), "newline in string");
    assert_eq!(error_message("\"a\\u8"), "end-of-file in string");
    assert_eq!(error_message("\"a\\u8A\n"), "newline in string");
}

#[test]
fn test_malformed_escapes() {
    assert_eq!(error_message("\"a\\ "), "unknown escape sequence: \\ ");
    assert_eq!(error_message("\"a\\u0aby\""), "non-hex character in escape sequence: 'y'");

    let tok = first_error("\"a\\u0ab\"");
    assert_eq!(tok.kind, TokenKind::Error("malformed hex escape sequence \\u0ab".into()));
    assert_eq!((tok.line, tok.column), (1, 3));
}

#[test]
fn test_error_is_sticky() {
    let mut lexer = Lexer::new("( a");
    let first = lexer.next_token();
    let second = lexer.next_token();
    assert_eq!(first, second);
}

#[test]
fn test_token_dump() {
    let input = "\na true 1 2.3 2013-10-25T16:22:00Z \"foo\" = [ ] ,";
    let expected = [
        "eol        [  1:  1]",
        "identifier [  2:  1] \"a\"",
        "bool       [  2:  3] true",
        "int64      [  2:  8] 1",
        "float64    [  2: 10] 2.300000",
        "date       [  2: 14] 2013-10-25T16:22:00Z",
        "string     [  2: 35] \"foo\"",
        "equal      [  2: 41] '='",
        "lbracket   [  2: 43] '['",
        "rbracket   [  2: 45] ']'",
        "comma      [  2: 47] ','",
        "eof        [  2: 48]",
    ];

    let mut lexer = Lexer::new(input);
    for line in expected {
        assert_eq!(lexer.next_token().to_string(), line);
    }
}

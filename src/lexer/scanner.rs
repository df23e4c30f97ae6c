use super::*;

/// Position of the character under the cursor.
#[derive(Debug, Clone, Copy)]
pub(super) struct Mark {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

pub(super) fn mark(lexer: &Lexer) -> Mark {
    Mark {
        offset: lexer.offset,
        line: lexer.line,
        column: lexer.column,
    }
}

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += c.len_utf8();
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Character after `peek`, without consuming anything.
pub(super) fn peek_second(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Source text from `start` up to the cursor.
pub(super) fn slice_from<'a>(lexer: &Lexer<'a>, start: Mark) -> &'a str {
    &lexer.source[start.offset..lexer.offset]
}

/// Remaining source text, starting at the cursor.
pub(super) fn rest<'a>(lexer: &Lexer<'a>) -> &'a str {
    &lexer.source[lexer.offset..]
}

/// Consumes characters while `accept` holds; returns how many were taken.
pub(super) fn bump_while(lexer: &mut Lexer, accept: impl Fn(char) -> bool) -> usize {
    let mut count = 0;
    while lexer.peek.is_some_and(&accept) {
        bump(lexer);
        count += 1;
    }
    count
}

/// Consumes the cursor character if it is one of `valid`.
pub(super) fn bump_if(lexer: &mut Lexer, valid: &str) -> bool {
    match lexer.peek {
        Some(c) if valid.contains(c) => {
            bump(lexer);
            true
        }
        _ => false,
    }
}

pub(super) fn is_space(c: char) -> bool {
    matches!(c, '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{85}' | '\u{A0}')
}

pub(super) fn is_eol(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Skip whitespace and comments. The newline ending a comment is left in
/// place so it still produces an `Eol` token.
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            c if is_space(c) => {
                bump(lexer);
            }
            '#' => {
                bump_while(lexer, |ch| !is_eol(ch));
            }
            _ => break,
        }
    }
}

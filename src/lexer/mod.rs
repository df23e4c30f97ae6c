// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use chrono::{DateTime, Utc};

use crate::value::DATE_FORMAT;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // --- layout ---
    Eof,
    Eol,
    /// Terminal lexing failure; carries the diagnostic.
    Error(String),

    // --- literals ---
    Ident(String),
    Bool(bool),
    /// String contents without the enclosing quotes.
    String(String),
    Int(i64),
    Float(f64),
    Date(DateTime<Utc>),

    // --- structure ---
    Equal,
    LBracket,
    RBracket,
    Comma,
}

impl TokenKind {
    /// Short kind name, as used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Eol => "eol",
            TokenKind::Error(_) => "error",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Bool(_) => "bool",
            TokenKind::String(_) => "string",
            TokenKind::Int(_) => "int64",
            TokenKind::Float(_) => "float64",
            TokenKind::Date(_) => "date",
            TokenKind::Equal => "equal",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::Comma => "comma",
        }
    }

    /// Description used in `unexpected ...` parse errors, with the literal
    /// value rendered inline.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Eof => "end-of-file".into(),
            TokenKind::Eol => "end-of-line".into(),
            TokenKind::Error(message) => format!("error {}", message),
            TokenKind::Ident(name) => format!("identifier {}", name),
            TokenKind::Bool(b) => format!("boolean {}", b),
            TokenKind::String(s) => format!("string \"{}\"", s),
            TokenKind::Int(i) => format!("integer {}", i),
            TokenKind::Float(x) => format!("floating point number {:.6}", x),
            TokenKind::Date(d) => format!("date {}", d.format(DATE_FORMAT)),
            TokenKind::Equal => "character '='".into(),
            TokenKind::LBracket => "character '['".into(),
            TokenKind::RBracket => "character ']'".into(),
            TokenKind::Comma => "character ','".into(),
        }
    }
}

/// A positioned token. Lines and columns are 1-based; columns count bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} [{:>3}:{:>3}]", self.kind.name(), self.line, self.column)?;
        match &self.kind {
            TokenKind::Eof | TokenKind::Eol => Ok(()),
            TokenKind::Error(s) | TokenKind::Ident(s) | TokenKind::String(s) => {
                write!(f, " \"{}\"", s)
            }
            TokenKind::Bool(b) => write!(f, " {}", b),
            TokenKind::Int(i) => write!(f, " {}", i),
            TokenKind::Float(x) => write!(f, " {:.6}", x),
            TokenKind::Date(d) => write!(f, " {}", d.format(DATE_FORMAT)),
            TokenKind::Equal => f.write_str(" '='"),
            TokenKind::LBracket => f.write_str(" '['"),
            TokenKind::RBracket => f.write_str(" ']'"),
            TokenKind::Comma => f.write_str(" ','"),
        }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    input: Chars<'a>,
    peek: Option<char>,
    // Byte offset and position of `peek`; past the end once input is exhausted.
    offset: usize,
    line: usize,
    column: usize,
    failed: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Lexer {
            source,
            input: source.chars(),
            peek: None,
            offset: 0,
            line: 1,
            column: 1,
            failed: None,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Produces the next token. Newlines are significant and come back as
    /// `Eol`; a lexing failure comes back as an `Error` token, and the lexer
    /// keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> Token {
        tokenizer::next_token(self)
    }
}

#[cfg(test)]
mod tests;

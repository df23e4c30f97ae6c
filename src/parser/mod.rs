// Author: Dustin Pilgrim
// License: MIT

use tracing::debug;

use crate::config::Config;
use crate::error::ConfigError;
use crate::lexer::{Lexer, Token, TokenKind};

mod document;
mod value;

/// Recursive-descent parser writing straight into a [`Config`] store.
///
/// Parsing stops at the first error. Options written before the failure stay
/// in the store.
pub struct Parser<'a> {
    source_name: String,
    lexer: Lexer<'a>,
    token: Token,
    // Options created or updated so far; used to detect empty sections.
    option_count: usize,
}

impl<'a> Parser<'a> {
    /// `source_name` is the file path, or [`crate::STRING_SOURCE`] for text
    /// that did not come from a file.
    pub fn new(source_name: impl Into<String>, input: &'a str) -> Self {
        let lexer = Lexer::new(input);
        let token = Token {
            kind: TokenKind::Eof,
            line: lexer.line(),
            column: lexer.column(),
        };
        Self {
            source_name: source_name.into(),
            lexer,
            token,
            option_count: 0,
        }
    }

    pub fn parse(&mut self, config: &Config) -> Result<(), ConfigError> {
        self.bump()?;
        document::parse_document(self, config)?;
        debug!(
            source = %self.source_name,
            options = self.option_count,
            "parsed configuration"
        );
        Ok(())
    }

    /// Number of option declarations applied to the store so far.
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Moves to the next token. A lexing failure becomes a syntax error at
    /// the failing token's own position.
    pub(crate) fn bump(&mut self) -> Result<(), ConfigError> {
        self.token = self.lexer.next_token();
        if let TokenKind::Error(message) = &self.token.kind {
            return Err(self.error_at(&self.token, message.clone()));
        }
        Ok(())
    }

    pub(crate) fn peek(&self) -> &TokenKind {
        &self.token.kind
    }

    pub(crate) fn skip_eols(&mut self) -> Result<(), ConfigError> {
        while self.token.kind == TokenKind::Eol {
            self.bump()?;
        }
        Ok(())
    }

    pub(crate) fn error_at(&self, token: &Token, message: impl Into<String>) -> ConfigError {
        ConfigError::syntax(&self.source_name, token.line, token.column, message)
    }

    /// `unexpected <token>` at the current token.
    pub(crate) fn unexpected(&self) -> ConfigError {
        self.error_at(&self.token, format!("unexpected {}", self.token.kind.describe()))
    }
}

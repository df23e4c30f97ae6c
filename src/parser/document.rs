use tracing::trace;

use super::*;
use crate::config::option_path;

pub(super) fn parse_document(parser: &mut Parser, config: &Config) -> Result<(), ConfigError> {
    loop {
        parser.skip_eols()?;
        match parser.peek() {
            TokenKind::Eof => return Ok(()),
            TokenKind::LBracket => parse_section(parser, config)?,
            TokenKind::Ident(_) => parse_options(parser, config, "")?,
            _ => return Err(parser.unexpected()),
        }
    }
}

/// `[name] EOL` followed by the section's options. Sections never nest: the
/// body ends at the next `[` or at end of input.
fn parse_section(parser: &mut Parser, config: &Config) -> Result<(), ConfigError> {
    parser.bump()?; // consume '['

    let name = match parser.peek() {
        TokenKind::Ident(name) => name.clone(),
        _ => return Err(parser.unexpected()),
    };
    parser.bump()?;

    if parser.peek() != &TokenKind::RBracket {
        return Err(parser.unexpected());
    }
    // Empty-section errors point at the closing bracket.
    let header_end = parser.token.clone();
    parser.bump()?;

    if parser.peek() != &TokenKind::Eol {
        return Err(parser.unexpected());
    }
    parser.bump()?;
    trace!(section = %name, line = header_end.line, "section");

    let before = parser.option_count;
    parser.skip_eols()?;
    parse_options(parser, config, &name)?;
    if parser.option_count == before {
        return Err(parser.error_at(&header_end, format!("empty section {}", name)));
    }
    Ok(())
}

/// A run of `name = value` declarations, each ended by line breaks or end of
/// input.
fn parse_options(parser: &mut Parser, config: &Config, section: &str) -> Result<(), ConfigError> {
    while let TokenKind::Ident(name) = parser.peek() {
        let path = option_path(section, name);
        parser.bump()?;

        if parser.peek() != &TokenKind::Equal {
            return Err(parser.unexpected());
        }
        parser.bump()?;

        let value = if parser.peek() == &TokenKind::LBracket {
            value::parse_array(parser)?
        } else {
            value::parse_scalar(parser)?
        };
        config.set(&path, value);
        parser.option_count += 1;

        match parser.peek() {
            TokenKind::Eol => parser.skip_eols()?,
            TokenKind::Eof => {}
            _ => return Err(parser.unexpected()),
        }
    }
    Ok(())
}

use super::*;
use crate::value::{Kind, Value};

/// Converts the current literal token into a scalar value and consumes it.
pub(super) fn parse_scalar(parser: &mut Parser) -> Result<Value, ConfigError> {
    let value = scalar(parser.peek()).ok_or_else(|| parser.unexpected())?;
    parser.bump()?;
    Ok(value)
}

fn scalar(kind: &TokenKind) -> Option<Value> {
    let value = match kind {
        TokenKind::Bool(b) => Value::Bool(*b),
        TokenKind::Int(i) => Value::Int(*i),
        TokenKind::Float(x) => Value::Float(*x),
        TokenKind::Date(d) => Value::Date(*d),
        TokenKind::String(s) => Value::String(s.clone()),
        _ => return None,
    };
    Some(value)
}

/// `[ v, v, ... ]`, possibly spanning lines. The first element fixes the
/// element kind; later elements are coerced to it.
pub(super) fn parse_array(parser: &mut Parser) -> Result<Value, ConfigError> {
    parser.bump()?; // consume '['
    parser.skip_eols()?;

    let first = parse_scalar(parser)?;
    let kind = first.kind();
    let mut items = vec![first];

    loop {
        parser.skip_eols()?;
        match parser.peek() {
            TokenKind::Comma => {
                parser.bump()?;
                parser.skip_eols()?;
                let element = parser.token.clone();
                let value = parse_scalar(parser)?;
                let value = coerce(kind, value).map_err(|actual| {
                    parser.error_at(
                        &element,
                        format!("cannot use type {} as type {}", actual, kind),
                    )
                })?;
                items.push(value);
            }
            TokenKind::RBracket => {
                parser.bump()?;
                break;
            }
            _ => return Err(parser.unexpected()),
        }
    }

    // Every element was coerced to `kind` above.
    Value::array_of(kind, items).ok_or_else(|| parser.unexpected())
}

/// Normalizes `value` to `target`. Integers widen to floats, and floats
/// without a fractional part that fit an `i64` narrow to integers; everything
/// else must match exactly. On failure returns the offending kind.
pub(crate) fn coerce(target: Kind, value: Value) -> Result<Value, Kind> {
    match (target, value) {
        (Kind::Int, Value::Float(x)) if x.floor() == x && fits_i64(x) => {
            Ok(Value::Int(x as i64))
        }
        (Kind::Float, Value::Int(i)) => Ok(Value::Float(i as f64)),
        (target, value) if value.kind() == target => Ok(value),
        (_, value) => Err(value.kind()),
    }
}

// `as` saturates, so the bounds are checked first. 2^63 itself is out.
fn fits_i64(x: f64) -> bool {
    (-9.223372036854775808e18..9.223372036854775808e18).contains(&x)
}

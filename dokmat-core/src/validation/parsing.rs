//! Line-level parsing for the matrix text format
//!
//! Each function takes one already-trimmed line and its 1-based line
//! number, so errors always carry their position.

use crate::{ParseError, ParseErrorKind};
use alloc::string::ToString;
use core::num::IntErrorKind;

/// A syntactically valid `(row, col, value)` line
///
/// Coordinates are kept signed; bounds are checked by the caller.
/// Coordinates beyond the `i64` range saturate to `i64::MIN`/`i64::MAX`,
/// which no matrix can contain, so they are always out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLine {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

/// Parse a `key=<positive integer>` header line
pub fn parse_header(line: &str, key: &'static str, line_no: usize) -> Result<usize, ParseError> {
    let raw = line
        .strip_prefix(key)
        .ok_or(ParseError::new(
            line_no,
            ParseErrorKind::MissingHeaderPrefix { expected: key },
        ))?
        .trim();

    let value: i64 = raw.parse().map_err(|_| {
        ParseError::new(
            line_no,
            ParseErrorKind::InvalidHeaderValue {
                value: raw.to_string(),
            },
        )
    })?;

    if value <= 0 {
        return Err(ParseError::new(
            line_no,
            ParseErrorKind::NonPositiveDimension { value },
        ));
    }

    usize::try_from(value).map_err(|_| {
        ParseError::new(
            line_no,
            ParseErrorKind::InvalidHeaderValue {
                value: raw.to_string(),
            },
        )
    })
}

/// Parse a `(row, col, value)` element line
///
/// Whitespace around each field is ignored.
pub fn parse_element(line: &str, line_no: usize) -> Result<ElementLine, ParseError> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseError::new(line_no, ParseErrorKind::UnbracketedElement))?;

    let found = inner.split(',').count();
    if found != 3 {
        return Err(ParseError::new(
            line_no,
            ParseErrorKind::FieldCount { found },
        ));
    }

    let mut fields = [0i64; 3];
    for (i, (slot, field)) in fields.iter_mut().zip(inner.split(',')).enumerate() {
        let field = field.trim();
        let is_coordinate = i < 2;
        *slot = match field.parse::<i64>() {
            Ok(v) => v,
            Err(e) if is_coordinate && *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(e) if is_coordinate && *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
            Err(_) => {
                return Err(ParseError::new(
                    line_no,
                    ParseErrorKind::NonIntegerField {
                        field: field.to_string(),
                    },
                ))
            }
        };
    }

    let [row, col, value] = fields;
    Ok(ElementLine { row, col, value })
}

//! Error types for sparse matrix operations

use alloc::string::String;

/// Arithmetic operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

/// What went wrong on a line of matrix text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// First line is blank or the source is empty
    MissingRowsHeader,
    /// Second line is blank or absent
    MissingColsHeader,
    /// Header line does not start with the expected `rows=` / `cols=` prefix
    MissingHeaderPrefix { expected: &'static str },
    /// Header value is not an integer
    InvalidHeaderValue { value: String },
    /// Header value is zero or negative
    NonPositiveDimension { value: i64 },
    /// Element line is not wrapped in parentheses
    UnbracketedElement,
    /// Element line does not hold exactly three fields
    FieldCount { found: usize },
    /// Element field is not an integer
    NonIntegerField { field: String },
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseErrorKind::MissingRowsHeader => write!(f, "file is empty"),
            ParseErrorKind::MissingColsHeader => write!(f, "missing columns specification"),
            ParseErrorKind::MissingHeaderPrefix { expected } => {
                write!(f, "missing `{expected}` header")
            }
            ParseErrorKind::InvalidHeaderValue { value } => {
                write!(f, "invalid number format in header: `{value}`")
            }
            ParseErrorKind::NonPositiveDimension { value } => {
                write!(f, "invalid dimension {value} (must be positive)")
            }
            ParseErrorKind::UnbracketedElement => {
                write!(f, "invalid element format, expected `(row, col, value)`")
            }
            ParseErrorKind::FieldCount { found } => write!(
                f,
                "expected three comma-separated values `(row, col, value)`, found {found}"
            ),
            ParseErrorKind::NonIntegerField { field } => {
                write!(f, "all values must be integers, found `{field}`")
            }
        }
    }
}

/// Malformed matrix text, with the 1-based line it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl core::error::Error for ParseError {}

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Negative row or column count
    InvalidDimension { rows: i64, cols: i64 },
    /// Malformed matrix text
    Parse(ParseError),
    /// Coordinates outside `[0, rows) x [0, cols)`
    IndexOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Result value does not fit in an `i64`
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                write!(f, "matrix dimensions cannot be negative: {rows}x{cols}")
            }
            MatrixError::Parse(err) => write!(f, "parse error at {err}"),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "invalid indices ({row}, {col}) for a {rows}x{cols} matrix"
            ),
            MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                left,
                right,
            } => write!(
                f,
                "invalid dimensions for multiplication: left columns ({}) must equal right rows ({})",
                left.1, right.0
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "matrix dimensions must match for {operation}: ({}, {}) != ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::Overflow {
                operation,
                row,
                col,
            } => write!(f, "integer overflow during {operation} at ({row}, {col})"),
        }
    }
}

impl core::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MatrixError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for MatrixError {
    fn from(err: ParseError) -> Self {
        MatrixError::Parse(err)
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

//! Streaming parser and writer for the matrix text format

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::{COLS_KEY, ROWS_KEY};
use crate::validation::{parse_element, parse_header};
use crate::{ParseError, ParseErrorKind, Result, SparseMatrix};

/// Element line dropped because its coordinates fell outside the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedElement {
    /// 1-based line number, header lines included
    pub line: usize,
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

/// Outcome of a successful parse
///
/// `elements_loaded` counts accepted element lines, so repeated
/// coordinates or explicit zeros may leave fewer stored entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadReport {
    pub elements_loaded: usize,
    pub skipped: Vec<SkippedElement>,
}

impl LoadReport {
    /// Number of out-of-bounds elements that were skipped
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

enum State {
    Rows,
    Cols { rows: usize },
    Elements(SparseMatrix),
}

/// Line-at-a-time parser for matrix text
///
/// Feed lines with [`push_line`](Self::push_line) and collect the matrix
/// with [`finish`](Self::finish). After an error the parser should be
/// discarded.
pub struct TextParser {
    state: State,
    line: usize,
    report: LoadReport,
}

impl TextParser {
    pub fn new() -> Self {
        Self {
            state: State::Rows,
            line: 0,
            report: LoadReport::default(),
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Consume the next line (without its line terminator)
    pub fn push_line(&mut self, line: &str) -> core::result::Result<(), ParseError> {
        self.line += 1;
        let line_no = self.line;
        let line = line.trim();

        match &mut self.state {
            State::Rows => {
                if line.is_empty() {
                    return Err(ParseError::new(line_no, ParseErrorKind::MissingRowsHeader));
                }
                let rows = parse_header(line, ROWS_KEY, line_no)?;
                self.state = State::Cols { rows };
            }
            State::Cols { rows } => {
                let rows = *rows;
                if line.is_empty() {
                    return Err(ParseError::new(line_no, ParseErrorKind::MissingColsHeader));
                }
                let cols = parse_header(line, COLS_KEY, line_no)?;
                self.state = State::Elements(SparseMatrix::new(rows, cols));
            }
            State::Elements(_) if line.is_empty() => {}
            State::Elements(matrix) => {
                let element = parse_element(line, line_no)?;
                match matrix.validate_indices(element.row, element.col) {
                    Ok(key) => {
                        matrix.store(key, element.value);
                        self.report.elements_loaded += 1;
                    }
                    Err(_) => self.report.skipped.push(SkippedElement {
                        line: line_no,
                        row: element.row,
                        col: element.col,
                        value: element.value,
                    }),
                }
            }
        }
        Ok(())
    }

    /// Finish parsing, failing if either header line never arrived
    pub fn finish(self) -> core::result::Result<(SparseMatrix, LoadReport), ParseError> {
        match self.state {
            State::Rows => Err(ParseError::new(1, ParseErrorKind::MissingRowsHeader)),
            State::Cols { .. } => Err(ParseError::new(2, ParseErrorKind::MissingColsHeader)),
            State::Elements(matrix) => Ok((matrix, self.report)),
        }
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a complete matrix text
pub fn parse_str(source: &str) -> core::result::Result<(SparseMatrix, LoadReport), ParseError> {
    let mut parser = TextParser::new();
    for line in source.lines() {
        parser.push_line(line)?;
    }
    parser.finish()
}

/// Writes a matrix in the text format, entries in ascending `(row, col)`
pub struct TextDisplay<'a> {
    matrix: &'a SparseMatrix,
}

impl core::fmt::Display for TextDisplay<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{ROWS_KEY}{}", self.matrix.rows())?;
        writeln!(f, "{COLS_KEY}{}", self.matrix.cols())?;
        for entry in self.matrix.iter_sorted() {
            writeln!(f, "({}, {}, {})", entry.row, entry.col, entry.value)?;
        }
        Ok(())
    }
}

impl SparseMatrix {
    /// Parse matrix text, returning the matrix and what was skipped
    pub fn from_text(source: &str) -> Result<(SparseMatrix, LoadReport)> {
        Ok(parse_str(source)?)
    }

    /// Adapter that formats the matrix in the text format
    ///
    /// Headers must be positive when read back, so a matrix with a zero
    /// dimension serializes but does not parse again.
    pub fn text(&self) -> TextDisplay<'_> {
        TextDisplay { matrix: self }
    }

    /// Serialize the matrix to the text format
    ///
    /// Round-trips through [`from_text`](Self::from_text) for every matrix
    /// whose dimensions are both non-zero.
    pub fn to_text(&self) -> String {
        self.text().to_string()
    }
}

impl core::str::FromStr for SparseMatrix {
    type Err = crate::MatrixError;

    /// Parse matrix text, discarding the skipped-element report
    fn from_str(source: &str) -> Result<Self> {
        Self::from_text(source).map(|(matrix, _)| matrix)
    }
}

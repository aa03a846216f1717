//! Plain-text matrix format
//!
//! ```text
//! rows=<positive integer>
//! cols=<positive integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Parsing is line-at-a-time so callers can feed lines straight from a
//! reader. Elements outside the declared bounds are skipped and reported
//! in a [`LoadReport`] rather than failing the whole parse.

pub mod text;

pub use text::{parse_str, LoadReport, SkippedElement, TextDisplay, TextParser};

/// Prefix of the first header line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the second header line
pub const COLS_KEY: &str = "cols=";

//! dokmat - Sparse integer matrix files and arithmetic
//!
//! This crate adds file handling on top of [`dokmat_core`]:
//!
//! - **dokmat-core**: matrix storage, text format and arithmetic (no I/O)
//! - **dokmat**: path-based load/save, I/O-aware errors and the `dokmat` CLI
//!
//! ```rust,no_run
//! use dokmat::{MatrixFileExt, SparseMatrix};
//!
//! fn example() -> dokmat::Result<()> {
//!     let a = SparseMatrix::load("a.txt")?;
//!     let b = SparseMatrix::load("b.txt")?;
//!     let product = a.multiply(&b)?;
//!     println!("{product}");
//!     product.save("product.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export the core matrix API
pub use dokmat_core::{
    parse_str, Entry, LoadReport, MatrixError, MatrixStatistics, Operation, ParseError,
    ParseErrorKind, SkippedElement, SparseMatrix, TextParser,
};

pub mod error;
pub mod file_io;

pub use error::{Error, Result};
pub use file_io::{MatrixFile, MatrixFileExt};

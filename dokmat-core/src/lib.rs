#![no_std]

//! dokmat-core - Dictionary-of-keys sparse integer matrices
//!
//! This crate provides the sparse matrix type, its plain-text format and
//! sparse arithmetic. It performs no I/O and never logs; file handling
//! lives in the `dokmat` crate.
//!
//! ```
//! use dokmat_core::SparseMatrix;
//!
//! let (a, report) = SparseMatrix::from_text("rows=2\ncols=2\n(0,0,2)\n(0,1,3)\n").unwrap();
//! assert_eq!(report.skipped_count(), 0);
//!
//! let b: SparseMatrix = "rows=2\ncols=2\n(0,0,1)\n(1,0,4)\n".parse().unwrap();
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.get(0, 0), Ok(14));
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod stats;
pub mod validation;

#[cfg(test)]
mod proptests;

pub use error::*;
pub use format::{parse_str, LoadReport, SkippedElement, TextDisplay, TextParser};
pub use matrix::{Entry, SparseMatrix};
pub use stats::MatrixStatistics;

//! Dictionary-of-keys sparse matrix storage
//!
//! Only non-zero entries are stored, keyed by `(row, col)`. Dimensions are
//! fixed at construction and every stored key lies inside them.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::validation::{validate_dimensions, validate_index};
use crate::{MatrixError, Result};

/// A stored `(row, col, value)` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

/// Sparse integer matrix in dictionary-of-keys form
///
/// Two matrices are equal only when both their dimensions and their
/// stored entries match.
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an all-zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Create an all-zero matrix from signed dimensions
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if either is negative.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = validate_dimensions(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Square identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::new(n, n);
        matrix.entries.extend((0..n).map(|i| ((i, i), 1)));
        matrix
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Later triples overwrite earlier ones at the same coordinate and
    /// zero values clear it. Any out-of-bounds triple is an error.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that `(row, col)` lies inside the matrix and convert it to a key
    pub fn validate_indices(&self, row: i64, col: i64) -> Result<(usize, usize)> {
        match (validate_index(row, self.rows), validate_index(col, self.cols)) {
            (Some(r), Some(c)) => Ok((r, c)),
            _ => Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// Value at `(row, col)`, zero when nothing is stored there
    pub fn get(&self, row: i64, col: i64) -> Result<i64> {
        let key = self.validate_indices(row, col)?;
        Ok(self.value_at(key))
    }

    /// Write `value` at `(row, col)`; writing zero removes the entry
    pub fn set(&mut self, row: i64, col: i64, value: i64) -> Result<()> {
        let key = self.validate_indices(row, col)?;
        self.store(key, value);
        Ok(())
    }

    /// True when a non-zero entry is stored at `(row, col)`
    pub fn contains(&self, row: i64, col: i64) -> Result<bool> {
        let key = self.validate_indices(row, col)?;
        Ok(self.entries.contains_key(&key))
    }

    /// Stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Entry { row, col, value })
    }

    /// Stored entries in ascending `(row, col)` order
    pub fn iter_sorted(&self) -> impl Iterator<Item = Entry> {
        let mut entries: Vec<Entry> = self.iter().collect();
        entries.sort_unstable();
        entries.into_iter()
    }

    // Crate-internal accessors for keys that are already validated.

    pub(crate) fn value_at(&self, key: (usize, usize)) -> i64 {
        self.entries.get(&key).copied().unwrap_or(0)
    }

    pub(crate) fn store(&mut self, key: (usize, usize), value: i64) {
        debug_assert!(key.0 < self.rows && key.1 < self.cols);
        if value == 0 {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    pub(crate) fn raw_entries(&self) -> &HashMap<(usize, usize), i64> {
        &self.entries
    }
}

/// Human-readable summary: dimensions, non-zero count and density
impl core::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SparseMatrix({}x{}) with {} non-zero elements (density: {:.2}%)",
            self.rows,
            self.cols,
            self.nnz(),
            self.density() * 100.0
        )
    }
}

impl core::fmt::Debug for SparseMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct SortedEntries<'a>(&'a SparseMatrix);

        impl core::fmt::Debug for SortedEntries<'_> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_map()
                    .entries(self.0.iter_sorted().map(|e| ((e.row, e.col), e.value)))
                    .finish()
            }
        }

        f.debug_struct("SparseMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("entries", &SortedEntries(self))
            .finish()
    }
}

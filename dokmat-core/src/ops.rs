//! Sparse addition, subtraction and multiplication
//!
//! All operations leave their operands untouched and return a new matrix.
//! Work is proportional to the number of stored entries, never to the
//! full `rows x cols` area.

use hashbrown::HashMap;

use crate::{MatrixError, Operation, Result, SparseMatrix};

/// Non-zero values grouped by one axis: outer index -> (inner index -> value)
type AxisIndex = HashMap<usize, HashMap<usize, i64>>;

impl SparseMatrix {
    /// Entrywise sum of two equally shaped matrices
    ///
    /// Opposite values cancel and leave no entry behind.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Add, i64::checked_add)
    }

    /// Entrywise difference of two equally shaped matrices
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.combine(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`. Only rows of `self` and columns of
    /// `other` with at least one stored entry are visited, and each dot
    /// product walks the smaller of the two index sets.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, Operation::Multiply));
        }

        let left_rows = group_by_row(self);
        let right_cols = group_by_col(other);
        let mut result = SparseMatrix::new(self.rows(), other.cols());

        for (&i, row) in &left_rows {
            for (&j, col) in &right_cols {
                let sum = sparse_dot(row, col).ok_or(MatrixError::Overflow {
                    operation: Operation::Multiply,
                    row: i,
                    col: j,
                })?;
                if sum != 0 {
                    result.store((i, j), sum);
                }
            }
        }

        Ok(result)
    }

    fn combine(
        &self,
        other: &SparseMatrix,
        operation: Operation,
        apply: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(self.mismatch(other, operation));
        }

        let mut result = self.clone();
        for (&key, &value) in other.raw_entries() {
            let combined = apply(result.value_at(key), value).ok_or(MatrixError::Overflow {
                operation,
                row: key.0,
                col: key.1,
            })?;
            result.store(key, combined);
        }
        Ok(result)
    }

    fn mismatch(&self, other: &SparseMatrix, operation: Operation) -> MatrixError {
        MatrixError::DimensionMismatch {
            operation,
            left: self.dimensions(),
            right: other.dimensions(),
        }
    }
}

fn group_by_row(matrix: &SparseMatrix) -> AxisIndex {
    let mut index = AxisIndex::new();
    for (&(row, col), &value) in matrix.raw_entries() {
        index.entry(row).or_default().insert(col, value);
    }
    index
}

fn group_by_col(matrix: &SparseMatrix) -> AxisIndex {
    let mut index = AxisIndex::new();
    for (&(row, col), &value) in matrix.raw_entries() {
        index.entry(col).or_default().insert(row, value);
    }
    index
}

/// Sum of `a[k] * b[k]` over the keys present in both maps
///
/// Accumulates in `i128` so the result does not depend on iteration
/// order. Returns `None` if the final sum does not fit in an `i64`.
fn sparse_dot(a: &HashMap<usize, i64>, b: &HashMap<usize, i64>) -> Option<i64> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let sum = small.iter().try_fold(0i128, |acc, (k, &x)| match large.get(k) {
        Some(&y) => acc.checked_add(i128::from(x) * i128::from(y)),
        None => Some(acc),
    })?;
    i64::try_from(sum).ok()
}

//! Density and summary statistics

use crate::SparseMatrix;

/// Summary of a matrix's shape and stored values
///
/// `min_value` and `max_value` are `None` for a matrix with no stored
/// entries; an empty matrix has no extremes rather than an extreme of 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixStatistics {
    pub dimensions: (usize, usize),
    pub non_zero_elements: usize,
    pub density: f64,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    /// `rows * cols`, saturating at `u64::MAX`
    pub total_elements: u64,
}

impl SparseMatrix {
    /// Fraction of cells holding a non-zero value
    ///
    /// Zero for matrices with a zero dimension.
    pub fn density(&self) -> f64 {
        let (rows, cols) = self.dimensions();
        if rows == 0 || cols == 0 {
            return 0.0;
        }
        self.nnz() as f64 / (rows as f64 * cols as f64)
    }

    /// Dimensions, non-zero count, density, value range and capacity
    pub fn statistics(&self) -> MatrixStatistics {
        let (rows, cols) = self.dimensions();
        let values = self.raw_entries().values().copied();

        MatrixStatistics {
            dimensions: (rows, cols),
            non_zero_elements: self.nnz(),
            density: self.density(),
            min_value: values.clone().min(),
            max_value: values.max(),
            total_elements: (rows as u64).saturating_mul(cols as u64),
        }
    }
}

impl core::fmt::Display for MatrixStatistics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "dimensions: {}x{}", self.dimensions.0, self.dimensions.1)?;
        writeln!(f, "non-zero elements: {}", self.non_zero_elements)?;
        writeln!(f, "total elements: {}", self.total_elements)?;
        writeln!(f, "density: {:.2}%", self.density * 100.0)?;
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => write!(f, "value range: [{min}, {max}]"),
            _ => write!(f, "value range: none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density() {
        assert_eq!(SparseMatrix::new(0, 5).density(), 0.0);
        assert_eq!(SparseMatrix::new(5, 0).density(), 0.0);
        assert_eq!(SparseMatrix::new(4, 4).density(), 0.0);

        let m = SparseMatrix::from_triplets(2, 2, [(0, 0, 1), (1, 1, 1)]).unwrap();
        assert_eq!(m.density(), 0.5);
    }

    #[test]
    fn test_statistics_empty_has_no_extremes() {
        let stats = SparseMatrix::new(3, 4).statistics();
        assert_eq!(stats.dimensions, (3, 4));
        assert_eq!(stats.non_zero_elements, 0);
        assert_eq!(stats.density, 0.0);
        assert_eq!(stats.min_value, None);
        assert_eq!(stats.max_value, None);
        assert_eq!(stats.total_elements, 12);
    }

    #[test]
    fn test_statistics_value_range() {
        let m = SparseMatrix::from_triplets(2, 3, [(0, 0, 5), (1, 1, -3), (1, 2, 2)]).unwrap();
        let stats = m.statistics();
        assert_eq!(stats.non_zero_elements, 3);
        assert_eq!(stats.min_value, Some(-3));
        assert_eq!(stats.max_value, Some(5));
        assert_eq!(stats.density, 0.5);
    }
}

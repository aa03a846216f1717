//! Dimension and coordinate validation

use crate::MatrixError;

/// Validate a signed row/column count pair, rejecting negatives
pub fn validate_dimensions(rows: i64, cols: i64) -> Result<(usize, usize), MatrixError> {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(MatrixError::InvalidDimension { rows, cols }),
    }
}

/// Convert a signed index to `usize` if it lies in `[0, len)`
///
/// Returns `None` for negative or too-large indices.
pub fn validate_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(0, 0), Ok((0, 0)));
        assert_eq!(validate_dimensions(3, 7), Ok((3, 7)));
        assert_eq!(
            validate_dimensions(-1, 2),
            Err(MatrixError::InvalidDimension { rows: -1, cols: 2 })
        );
        assert_eq!(
            validate_dimensions(2, -5),
            Err(MatrixError::InvalidDimension { rows: 2, cols: -5 })
        );
    }

    #[test]
    fn test_validate_index() {
        assert_eq!(validate_index(0, 3), Some(0));
        assert_eq!(validate_index(2, 3), Some(2));
        assert_eq!(validate_index(3, 3), None);
        assert_eq!(validate_index(-1, 3), None);
        assert_eq!(validate_index(0, 0), None);
    }
}

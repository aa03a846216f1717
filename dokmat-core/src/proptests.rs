//! Property-based tests for sparse matrix arithmetic and the text format.

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use proptest::prelude::*;

    use crate::SparseMatrix;

    // Small values keep products far from i64 overflow
    fn small_value() -> impl Strategy<Value = i64> {
        -50i64..=50i64
    }

    fn triplets(rows: usize, cols: usize) -> impl Strategy<Value = Vec<(i64, i64, i64)>> {
        prop::collection::vec(
            (0..rows as i64, 0..cols as i64, small_value()),
            0..(rows * cols).min(24),
        )
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = SparseMatrix> {
        triplets(rows, cols).prop_map(move |t| SparseMatrix::from_triplets(rows, cols, t).unwrap())
    }

    fn shaped_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
        (1usize..8, 1usize..8).prop_flat_map(|(r, c)| (matrix(r, c), matrix(r, c)))
    }

    fn any_matrix() -> impl Strategy<Value = SparseMatrix> {
        (1usize..10, 1usize..10).prop_flat_map(|(r, c)| matrix(r, c))
    }

    proptest! {
        #[test]
        fn no_zero_entries_stored(m in any_matrix()) {
            prop_assert!(m.iter().all(|e| e.value != 0));
        }

        #[test]
        fn text_round_trip(m in any_matrix()) {
            let (parsed, report) = SparseMatrix::from_text(&m.to_text()).unwrap();
            prop_assert_eq!(report.skipped_count(), 0);
            prop_assert_eq!(report.elements_loaded, m.nnz());
            prop_assert_eq!(parsed, m);
        }

        #[test]
        fn add_commutative((a, b) in shaped_pair()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn add_zero_identity(m in any_matrix()) {
            let (rows, cols) = m.dimensions();
            prop_assert_eq!(m.add(&SparseMatrix::new(rows, cols)).unwrap(), m);
        }

        #[test]
        fn subtract_self_is_zero(m in any_matrix()) {
            prop_assert!(m.subtract(&m).unwrap().is_zero());
        }

        #[test]
        fn subtract_then_add_restores((a, b) in shaped_pair()) {
            prop_assert_eq!(a.subtract(&b).unwrap().add(&b).unwrap(), a);
        }

        #[test]
        fn multiply_identity(m in any_matrix()) {
            let (rows, cols) = m.dimensions();
            prop_assert_eq!(m.multiply(&SparseMatrix::identity(cols)).unwrap(), m.clone());
            prop_assert_eq!(SparseMatrix::identity(rows).multiply(&m).unwrap(), m);
        }

        #[test]
        fn multiply_matches_dense(
            (a, b) in (1usize..6, 1usize..6, 1usize..6)
                .prop_flat_map(|(n, k, p)| (matrix(n, k), matrix(k, p)))
        ) {
            let product = a.multiply(&b).unwrap();
            prop_assert_eq!(product.dimensions(), (a.rows(), b.cols()));
            for i in 0..a.rows() as i64 {
                for j in 0..b.cols() as i64 {
                    let mut expected = 0;
                    for k in 0..a.cols() as i64 {
                        expected += a.get(i, k).unwrap() * b.get(k, j).unwrap();
                    }
                    prop_assert_eq!(product.get(i, j).unwrap(), expected);
                }
            }
        }
    }
}

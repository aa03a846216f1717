use std::fs;

use dokmat::{Error, MatrixError, MatrixFile, MatrixFileExt, ParseErrorKind, SparseMatrix};

fn write_source(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");

    let matrix =
        SparseMatrix::from_triplets(5, 4, [(4, 3, 12), (0, 0, -1), (2, 1, 7), (2, 0, 3)]).unwrap();
    let written = matrix.save(&path).unwrap();
    assert_eq!(written, 4);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "rows=5\ncols=4\n(0, 0, -1)\n(2, 0, 3)\n(2, 1, 7)\n(4, 3, 12)\n"
    );

    let loaded = SparseMatrix::load(&path).unwrap();
    assert_eq!(loaded, matrix);
}

#[test]
fn load_reports_skipped_elements() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "skip.txt", "rows=2\ncols=2\n(5,5,1)\n(0,1,8)\n");

    let (matrix, report) = MatrixFile::read(&path).unwrap();
    assert_eq!(matrix.get(0, 1).unwrap(), 8);
    assert_eq!(report.elements_loaded, 1);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].line, 3);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    match SparseMatrix::load(&path) {
        Err(Error::Io { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn load_malformed_file_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "bad.txt", "rows=3\ncols=3\n(0,0,1)\n0,1,2\n");

    match SparseMatrix::load(&path) {
        Err(Error::Matrix(MatrixError::Parse(err))) => {
            assert_eq!(err.line, 4);
            assert_eq!(err.kind, ParseErrorKind::UnbracketedElement);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.txt");

    let err = SparseMatrix::identity(2).save(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn arithmetic_on_loaded_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_source(&dir, "a.txt", "rows=2\ncols=2\n(0,0,2)\n(0,1,3)\n");
    let b = write_source(&dir, "b.txt", "rows=2\ncols=2\n(0,0,1)\n(1,0,4)\n");

    let a = SparseMatrix::load(a).unwrap();
    let b = SparseMatrix::load(b).unwrap();

    let product = a.multiply(&b).unwrap();
    assert_eq!(product.get(0, 0).unwrap(), 14);
    assert_eq!(product.nnz(), 1);

    let out = dir.path().join("product.txt");
    assert_eq!(product.save(&out).unwrap(), 1);
    assert_eq!(
        fs::read_to_string(out).unwrap(),
        "rows=2\ncols=2\n(0, 0, 14)\n"
    );

    let mismatch = SparseMatrix::new(3, 2);
    let err: Error = a.add(&mismatch).unwrap_err().into();
    assert!(err.to_string().contains("must match for addition"));
}

#[cfg(feature = "serde")]
#[test]
fn statistics_serialize_to_json() {
    let matrix = SparseMatrix::from_triplets(2, 2, [(0, 0, 5), (1, 1, -3)]).unwrap();
    let json = serde_json::to_value(matrix.statistics()).unwrap();
    assert_eq!(json["non_zero_elements"], 2);
    assert_eq!(json["min_value"], -3);
    assert_eq!(json["max_value"], 5);
    assert_eq!(json["total_elements"], 4);

    let empty = serde_json::to_value(SparseMatrix::new(2, 2).statistics()).unwrap();
    assert!(empty["min_value"].is_null());
}

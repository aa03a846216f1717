//! Reading and writing matrix text files
//!
//! Files are read line by line through [`TextParser`], so a file is never
//! held in memory as a whole. Handles are scoped to each call and closed
//! on every exit path.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use dokmat_core::{LoadReport, SparseMatrix, TextParser};
use tracing::{info, warn};

use crate::{Error, Result};

/// File handle helpers for the matrix text format
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix file
    ///
    /// Out-of-bounds elements are skipped with a warning each and counted
    /// in the returned [`LoadReport`].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<(SparseMatrix, LoadReport)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Self::read_from(BufReader::new(file), path)
    }

    /// Load a matrix from any buffered reader; `origin` is used for errors
    /// and log events
    pub fn read_from<R: BufRead>(reader: R, origin: &Path) -> Result<(SparseMatrix, LoadReport)> {
        let mut parser = TextParser::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io(origin, e))?;
            parser.push_line(&line)?;
        }
        let (matrix, report) = parser.finish()?;

        for skipped in &report.skipped {
            warn!(
                path = %origin.display(),
                line = skipped.line,
                row = skipped.row,
                col = skipped.col,
                "skipping out-of-bounds element"
            );
        }
        info!(
            path = %origin.display(),
            loaded = report.elements_loaded,
            skipped = report.skipped_count(),
            "loaded matrix {}x{}",
            matrix.rows(),
            matrix.cols()
        );

        Ok((matrix, report))
    }

    /// Write a matrix file, returning the number of entries written
    ///
    /// A matrix with a zero dimension is written as-is but cannot be
    /// read back, since headers must be positive.
    pub fn write<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let written = Self::write_to(matrix, &mut writer).map_err(|e| Error::io(path, e))?;
        writer.flush().map_err(|e| Error::io(path, e))?;

        info!(path = %path.display(), entries = written, "saved matrix");
        Ok(written)
    }

    /// Write the text format to any writer
    pub fn write_to<W: Write>(matrix: &SparseMatrix, writer: &mut W) -> std::io::Result<usize> {
        write!(writer, "{}", matrix.text())?;
        Ok(matrix.nnz())
    }
}

/// Path-based constructors and savers on [`SparseMatrix`]
pub trait MatrixFileExt: Sized {
    /// Load from a matrix text file, discarding the skipped-element report
    fn load<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save to a matrix text file, returning the number of entries written
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize>;
}

impl MatrixFileExt for SparseMatrix {
    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        MatrixFile::read(path).map(|(matrix, _)| matrix)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        MatrixFile::write(self, path)
    }
}

//! Square adjacency matrices with CSV load/save.

use crate::error::{NetfiltError, Result};
use nalgebra::DMatrix;
use std::path::Path;

/// A square weighted adjacency matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    data: DMatrix<f64>,
}

impl AdjacencyMatrix {
    /// Wrap a dense matrix, validating squareness.
    pub fn new(data: DMatrix<f64>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(NetfiltError::DimensionMismatch {
                expected: data.nrows(),
                actual: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Load a matrix from a headerless CSV file.
    ///
    /// Every row must have the same number of fields as there are rows.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path.as_ref())?;

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            let mut row = Vec::with_capacity(record.len());
            for (col_idx, field) in record.iter().enumerate() {
                let value: f64 =
                    field
                        .trim()
                        .parse()
                        .map_err(|_| NetfiltError::InvalidCell {
                            value: field.to_string(),
                            row: row_idx,
                            col: col_idx,
                        })?;
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(NetfiltError::EmptyData(format!(
                "{} holds no matrix rows",
                path.as_ref().display()
            )));
        }

        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(NetfiltError::DimensionMismatch {
                    expected: n,
                    actual: row.len(),
                });
            }
        }

        let data = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Ok(Self { data })
    }

    /// Write the matrix to a CSV file, one row per record.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path.as_ref())?;
        for i in 0..self.n() {
            let row: Vec<String> = (0..self.n())
                .map(|j| format!("{}", self.data[(i, j)]))
                .collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    /// The underlying dense matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Mutable access to the underlying dense matrix.
    pub fn matrix_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.data
    }

    /// Tolerance-based symmetry test against the transpose, entrywise
    /// `|a - b| <= atol + rtol * |b|`.
    pub fn is_symmetric(&self, rtol: f64, atol: f64) -> bool {
        let n = self.n();
        for i in 0..n {
            for j in 0..n {
                let a = self.data[(i, j)];
                let b = self.data[(j, i)];
                if (a - b).abs() > atol + rtol * b.abs() {
                    return false;
                }
            }
        }
        true
    }
}

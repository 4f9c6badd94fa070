//! Storage selection for row normalisation: plain dense loops for small or
//! well filled matrices, a compressed sparse row walk for large sparse ones.
//! Both paths visit the stored entries of each row left to right, so they
//! produce identical results.

use ifn_core::errors::{ErrorInfo, IfnError};
use nalgebra::DMatrix;

/// Smallest dimension at which the sparse path is considered.
const SPARSE_MIN_DIM: usize = 64;
/// Largest nonzero fraction at which the sparse path is still worthwhile.
const SPARSE_MAX_FILL: f64 = 0.25;

/// Divides every row of `matrix` by its row total.
///
/// Rows with a zero total cannot be normalised and produce an
/// [`IfnError::DanglingNode`].
pub(crate) fn normalize_rows(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, IfnError> {
    if prefers_sparse(matrix) {
        CsrRows::from_dense(matrix).normalized()
    } else {
        normalize_dense(matrix)
    }
}

fn prefers_sparse(matrix: &DMatrix<f64>) -> bool {
    let (rows, cols) = matrix.shape();
    if rows.min(cols) < SPARSE_MIN_DIM {
        return false;
    }
    let stored = matrix.iter().filter(|value| **value != 0.0).count();
    (stored as f64) <= SPARSE_MAX_FILL * (rows * cols) as f64
}

fn normalize_dense(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, IfnError> {
    let (rows, cols) = matrix.shape();
    let mut result = DMatrix::<f64>::zeros(rows, cols);
    for row in 0..rows {
        let mut total = 0.0;
        for col in 0..cols {
            total += matrix[(row, col)];
        }
        if total == 0.0 {
            return Err(dangling_row(row));
        }
        for col in 0..cols {
            let value = matrix[(row, col)];
            if value != 0.0 {
                result[(row, col)] = value / total;
            }
        }
    }
    Ok(result)
}

/// Row-major list of the nonzero entries of a dense matrix.
struct CsrRows {
    rows: usize,
    cols: usize,
    offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<f64>,
}

impl CsrRows {
    fn from_dense(matrix: &DMatrix<f64>) -> Self {
        let (rows, cols) = matrix.shape();
        let mut offsets = Vec::with_capacity(rows + 1);
        let mut columns = Vec::new();
        let mut values = Vec::new();
        offsets.push(0);
        for row in 0..rows {
            for col in 0..cols {
                let value = matrix[(row, col)];
                if value != 0.0 {
                    columns.push(col);
                    values.push(value);
                }
            }
            offsets.push(values.len());
        }
        Self {
            rows,
            cols,
            offsets,
            columns,
            values,
        }
    }

    fn normalized(&self) -> Result<DMatrix<f64>, IfnError> {
        let mut result = DMatrix::<f64>::zeros(self.rows, self.cols);
        for row in 0..self.rows {
            let span = self.offsets[row]..self.offsets[row + 1];
            let total: f64 = self.values[span.clone()].iter().sum();
            if total == 0.0 {
                return Err(dangling_row(row));
            }
            for idx in span {
                result[(row, self.columns[idx])] = self.values[idx] / total;
            }
        }
        Ok(result)
    }
}

fn dangling_row(row: usize) -> IfnError {
    let info = ErrorInfo::new(
        "dangling-node",
        format!("row {row} has zero total outgoing weight and cannot be normalised"),
    )
    .with_context("row", row.to_string())
    .with_hint("add an outgoing link or restrict the network to its largest strongly connected component");
    IfnError::DanglingNode(info)
}

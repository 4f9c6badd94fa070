use ifn_core::errors::{ErrorInfo, IfnError};
use ifn_core::tolerance::premagic_tolerance;
use nalgebra::{DMatrix, DVector};

/// Returns true when the matrix has as many rows as columns.
pub fn is_square(matrix: &DMatrix<f64>) -> bool {
    matrix.nrows() == matrix.ncols()
}

/// Returns true when every entry is greater than or equal to zero.
pub fn is_non_negative(matrix: &DMatrix<f64>) -> bool {
    matrix.iter().all(|value| *value >= 0.0)
}

/// Returns true when every entry is strictly positive.
pub fn is_positive(matrix: &DMatrix<f64>) -> bool {
    matrix.iter().all(|value| *value > 0.0)
}

/// Returns the vector of row totals, i.e. the outflow of each node.
pub fn row_sums(matrix: &DMatrix<f64>) -> DVector<f64> {
    let mut sums = DVector::<f64>::zeros(matrix.nrows());
    for row in 0..matrix.nrows() {
        for col in 0..matrix.ncols() {
            sums[row] += matrix[(row, col)];
        }
    }
    sums
}

/// Returns the vector of column totals, i.e. the inflow of each node.
pub fn col_sums(matrix: &DMatrix<f64>) -> DVector<f64> {
    let mut sums = DVector::<f64>::zeros(matrix.ncols());
    for row in 0..matrix.nrows() {
        for col in 0..matrix.ncols() {
            sums[col] += matrix[(row, col)];
        }
    }
    sums
}

/// Returns true when inflow equals outflow at every node, i.e. the vector of
/// row totals matches the vector of column totals within the shared
/// tolerance policy. Non-square matrices are never premagic.
pub fn is_premagic(matrix: &DMatrix<f64>) -> bool {
    if !is_square(matrix) {
        return false;
    }
    let difference = row_sums(matrix) - col_sums(matrix);
    difference.norm() <= premagic_tolerance(matrix.nrows(), matrix.ncols())
}

/// Returns true when the network is strongly connected.
///
/// Uses the classic reachability criterion: `(I + M)^(n-1)` has no zero
/// entry exactly when every node reaches every other node. The power is
/// taken over the 0/1 pattern of the matrix with exponentiation by
/// squaring, so entry magnitudes cannot overflow or underflow no matter how
/// extreme the weights are. Matrices that are not square, are empty or
/// carry negative entries are never irreducible.
pub fn is_irreducible(matrix: &DMatrix<f64>) -> bool {
    if !is_square(matrix) || !is_non_negative(matrix) {
        return false;
    }
    let n = matrix.nrows();
    if n == 0 {
        return false;
    }
    full_reachability(matrix)
}

/// Returns true when the matrix is a valid ideal flow matrix: nonnegative,
/// strongly connected and conserving flow at every node.
pub fn is_ideal_flow(matrix: &DMatrix<f64>) -> bool {
    is_non_negative(matrix) && is_irreducible(matrix) && is_premagic(matrix)
}

pub(crate) fn require_square(matrix: &DMatrix<f64>, operation: &str) -> Result<usize, IfnError> {
    if !is_square(matrix) {
        let info = ErrorInfo::new("not-square", format!("{operation} requires a square matrix"))
            .with_context("rows", matrix.nrows().to_string())
            .with_context("cols", matrix.ncols().to_string());
        return Err(IfnError::Shape(info));
    }
    Ok(matrix.nrows())
}

pub(crate) fn require_same_shape(
    left: &DMatrix<f64>,
    right: &DMatrix<f64>,
    operation: &str,
) -> Result<(), IfnError> {
    if left.shape() != right.shape() {
        let info = ErrorInfo::new(
            "dimension-mismatch",
            format!("{operation} requires equally shaped operands"),
        )
        .with_context("left", format!("{}x{}", left.nrows(), left.ncols()))
        .with_context("right", format!("{}x{}", right.nrows(), right.ncols()));
        return Err(IfnError::Shape(info));
    }
    Ok(())
}

fn full_reachability(matrix: &DMatrix<f64>) -> bool {
    let n = matrix.nrows();
    let mut base = DMatrix::<f64>::from_fn(n, n, |row, col| {
        if row == col || matrix[(row, col)] > 0.0 {
            1.0
        } else {
            0.0
        }
    });
    let mut result = DMatrix::<f64>::identity(n, n);
    let mut exponent = n - 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = saturate(&result * &base);
        }
        base = saturate(&base * &base);
        exponent >>= 1;
    }
    is_positive(&result)
}

/// Clamps a product back to a 0/1 pattern so repeated squaring stays exact.
fn saturate(matrix: DMatrix<f64>) -> DMatrix<f64> {
    matrix.map(|value| if value > 0.0 { 1.0 } else { 0.0 })
}

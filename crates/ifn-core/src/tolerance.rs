//! Floating point tolerance policy shared by the algebra predicates.

/// Tolerance for comparing row sums against column sums of an
/// `rows x cols` matrix.
///
/// The bound scales with the number of entries because each sum accumulates
/// one rounding error per addition. The factor of 1000 leaves room for the
/// upstream normalisation and stationary solve.
pub fn premagic_tolerance(rows: usize, cols: usize) -> f64 {
    1000.0 * rows as f64 * cols as f64 * f64::EPSILON
}

/// Base tolerance for validating a stationary vector of an `n` node network
/// scaled to total flow `kappa`.
///
/// Residuals grow with both the system size and the magnitude of the
/// requested total, so the bound is proportional to `n` and to
/// `max(1, |kappa|)`.
pub fn steady_state_tolerance(n: usize, kappa: f64) -> f64 {
    1000.0 * n as f64 * f64::EPSILON * kappa.abs().max(1.0)
}

/// Singular value cutoff for the pseudoinverse of an `rows x cols` system.
///
/// Singular values at or below the cutoff are treated as zero. The bound
/// follows the usual rank-detection rule: the largest dimension times machine
/// epsilon times the largest singular value.
pub fn singular_value_cutoff(rows: usize, cols: usize, sigma_max: f64) -> f64 {
    rows.max(cols) as f64 * f64::EPSILON * sigma_max
}

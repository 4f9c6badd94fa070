use nalgebra::DMatrix;
use sha2::{Digest, Sha256};

/// Computes a canonical SHA-256 digest of a matrix.
///
/// The digest covers the dimensions followed by the entries in row-major
/// order as little endian bytes. Negative zero is folded into positive zero
/// first, so two matrices that compare equal entrywise hash identically.
/// The digest is suitable for artifact provenance and cache keys.
pub fn canonical_hash(matrix: &DMatrix<f64>) -> String {
    let mut hasher = Sha256::new();
    hasher.update((matrix.nrows() as u64).to_le_bytes());
    hasher.update((matrix.ncols() as u64).to_le_bytes());
    for row in 0..matrix.nrows() {
        for col in 0..matrix.ncols() {
            let value = matrix[(row, col)];
            let canonical = if value == 0.0 { 0.0f64 } else { value };
            hasher.update(canonical.to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

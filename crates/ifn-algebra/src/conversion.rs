use ifn_core::errors::IfnError;
use nalgebra::DMatrix;

use crate::backend;

/// Converts a capacity matrix into its 0/1 adjacency pattern. An entry is a
/// link exactly when it is strictly positive.
pub fn capacity_to_adjacency(capacity: &DMatrix<f64>) -> DMatrix<f64> {
    capacity.map(|value| if value > 0.0 { 1.0 } else { 0.0 })
}

/// Converts a capacity matrix into a row stochastic matrix by dividing each
/// row by its total outgoing capacity.
///
/// Every node must have at least one outgoing link; a zero row produces an
/// [`IfnError::DanglingNode`]. Entries are assumed nonnegative; run
/// [`crate::is_non_negative`] first when the input is untrusted.
pub fn capacity_to_stochastic(capacity: &DMatrix<f64>) -> Result<DMatrix<f64>, IfnError> {
    backend::normalize_rows(capacity)
}

/// Converts a 0/1 adjacency matrix into the row stochastic matrix that
/// splits each node's outflow equally across its links.
pub fn adjacency_to_stochastic(adjacency: &DMatrix<f64>) -> Result<DMatrix<f64>, IfnError> {
    backend::normalize_rows(adjacency)
}

/// Recovers the row stochastic matrix underlying an ideal flow matrix.
///
/// Dividing each row of the flow matrix by its node throughput undoes the
/// stationary weighting applied by [`crate::ideal_flow`].
pub fn stochastic_from_flow(flow: &DMatrix<f64>) -> Result<DMatrix<f64>, IfnError> {
    backend::normalize_rows(flow)
}

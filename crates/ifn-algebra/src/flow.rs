use ifn_core::errors::{ErrorInfo, IfnError};
use nalgebra::{DMatrix, DVector};

use crate::conversion::{adjacency_to_stochastic, capacity_to_stochastic};
use crate::markov::steady_state;
use crate::properties::require_same_shape;

/// Builds the ideal flow matrix from a stochastic matrix and its stationary
/// vector: the flow on link `(i, j)` is `pi[i] * S[i][j]`.
pub fn ideal_flow(stochastic: &DMatrix<f64>, pi: &DVector<f64>) -> Result<DMatrix<f64>, IfnError> {
    if pi.len() != stochastic.nrows() {
        let info = ErrorInfo::new(
            "stationary-length",
            "stationary vector length must match the number of rows",
        )
        .with_context("rows", stochastic.nrows().to_string())
        .with_context("len", pi.len().to_string());
        return Err(IfnError::Shape(info));
    }
    let mut flow = stochastic.clone();
    for row in 0..flow.nrows() {
        for col in 0..flow.ncols() {
            flow[(row, col)] *= pi[row];
        }
    }
    Ok(flow)
}

/// Computes the ideal flow matrix of a 0/1 adjacency matrix with total flow
/// `kappa`: equal outflow split, stationary solve, flow assembly.
///
/// `kappa = 1.0` is the conventional choice and makes the result a joint
/// probability matrix.
pub fn adjacency_to_ideal_flow(
    adjacency: &DMatrix<f64>,
    kappa: f64,
) -> Result<DMatrix<f64>, IfnError> {
    let stochastic = adjacency_to_stochastic(adjacency)?;
    let pi = steady_state(&stochastic, kappa)?;
    ideal_flow(&stochastic, &pi)
}

/// Computes the ideal flow matrix of a capacity matrix with total flow
/// `kappa`: proportional outflow split, stationary solve, flow assembly.
///
/// `kappa = 1.0` is the conventional choice and makes the result a joint
/// probability matrix.
pub fn capacity_to_ideal_flow(
    capacity: &DMatrix<f64>,
    kappa: f64,
) -> Result<DMatrix<f64>, IfnError> {
    let stochastic = capacity_to_stochastic(capacity)?;
    let pi = steady_state(&stochastic, kappa)?;
    ideal_flow(&stochastic, &pi)
}

/// Returns the total flow carried by the network, i.e. the sum of all link
/// flows. For an ideal flow matrix this recovers the `kappa` it was built
/// with.
pub fn total_flow(flow: &DMatrix<f64>) -> f64 {
    flow.sum()
}

/// Entrywise division that treats a zero divisor as producing zero rather
/// than infinity. `hadamard_division(flow, capacity)` yields the congestion
/// matrix of a loaded network: links with no capacity carry no flow and
/// report zero congestion.
pub fn hadamard_division(
    numerator: &DMatrix<f64>,
    divisor: &DMatrix<f64>,
) -> Result<DMatrix<f64>, IfnError> {
    require_same_shape(numerator, divisor, "hadamard division")?;
    let quotient = DMatrix::<f64>::from_fn(numerator.nrows(), numerator.ncols(), |row, col| {
        let denominator = divisor[(row, col)];
        if denominator == 0.0 {
            0.0
        } else {
            numerator[(row, col)] / denominator
        }
    });
    Ok(quotient)
}

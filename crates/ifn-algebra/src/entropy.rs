use ifn_core::errors::IfnError;
use nalgebra::DMatrix;

use crate::conversion::{adjacency_to_stochastic, capacity_to_adjacency};

/// Computes the network entropy of a stochastic matrix: the sum of
/// `-s * ln(s)` over all nonzero entries.
pub fn network_entropy(stochastic: &DMatrix<f64>) -> f64 {
    stochastic
        .iter()
        .copied()
        .filter(|value| *value != 0.0)
        .map(|value| -(value * value.ln()))
        .sum()
}

/// Computes the entropy ratio of a stochastic matrix: its entropy divided by
/// the entropy of the equal outflow split over the same links.
///
/// The ratio lies in `(0, 1]` and measures how evenly the network spreads
/// flow relative to what its topology allows. When the maximum entropy is
/// zero (every node has exactly one outgoing link) the allocation cannot
/// deviate from it, so the ratio is reported as 1.
pub fn entropy_ratio(stochastic: &DMatrix<f64>) -> Result<f64, IfnError> {
    let observed = network_entropy(stochastic);
    let adjacency = capacity_to_adjacency(stochastic);
    let equal_split = adjacency_to_stochastic(&adjacency)?;
    let maximum = network_entropy(&equal_split);
    if maximum == 0.0 {
        return Ok(1.0);
    }
    Ok(observed / maximum)
}

use ifn_core::errors::{ErrorInfo, IfnError};
use ifn_core::rng::RngHandle;
use nalgebra::DMatrix;
use rand::Rng;

/// Generates the capacity matrix of a strongly connected random network: a
/// directed cycle through every node plus `chords` extra random links.
///
/// Capacities are drawn uniformly from `1..=max_capacity`. The cycle
/// guarantees irreducibility regardless of where the chords land, and
/// chords may include self loops. Placement retries a bounded number of
/// times when it keeps hitting occupied slots, so dense requests may end up
/// with fewer chords than asked for.
pub fn gen_cycle_with_chords(
    n_nodes: usize,
    chords: usize,
    max_capacity: u32,
    rng: &mut RngHandle,
) -> Result<DMatrix<f64>, IfnError> {
    if n_nodes == 0 {
        let info = ErrorInfo::new("empty-network", "cannot generate a network with zero nodes");
        return Err(IfnError::Generator(info));
    }
    let max_capacity = max_capacity.max(1);
    let mut capacity = DMatrix::<f64>::zeros(n_nodes, n_nodes);
    for node in 0..n_nodes {
        let successor = (node + 1) % n_nodes;
        capacity[(node, successor)] = f64::from(rng.gen_range(1..=max_capacity));
    }

    let mut placed = 0;
    let mut attempts = 0;
    let max_attempts = 16 * (chords + 1);
    while placed < chords && attempts < max_attempts {
        attempts += 1;
        let from = rng.gen_range(0..n_nodes);
        let to = rng.gen_range(0..n_nodes);
        if capacity[(from, to)] != 0.0 {
            continue;
        }
        capacity[(from, to)] = f64::from(rng.gen_range(1..=max_capacity));
        placed += 1;
    }
    Ok(capacity)
}

/// Generates the capacity matrix of a complete network: every ordered pair
/// of distinct nodes gets a capacity drawn uniformly from
/// `1..=max_capacity`.
pub fn gen_complete(
    n_nodes: usize,
    max_capacity: u32,
    rng: &mut RngHandle,
) -> Result<DMatrix<f64>, IfnError> {
    if n_nodes < 2 {
        let info = ErrorInfo::new(
            "network-too-small",
            "a complete network needs at least two nodes",
        )
        .with_context("n_nodes", n_nodes.to_string());
        return Err(IfnError::Generator(info));
    }
    let max_capacity = max_capacity.max(1);
    let mut capacity = DMatrix::<f64>::zeros(n_nodes, n_nodes);
    for from in 0..n_nodes {
        for to in 0..n_nodes {
            if from != to {
                capacity[(from, to)] = f64::from(rng.gen_range(1..=max_capacity));
            }
        }
    }
    Ok(capacity)
}

#![deny(missing_docs)]
#![doc = "Ideal flow network algebra: capacity, stochastic, stationary and flow matrices with their validators, entropy measures and rescaling rules. See docs/algebra-api.md for the full contract."]

mod backend;

/// Capacity, adjacency and stochastic matrix conversions.
pub mod conversion;
/// Network entropy and entropy ratio measures.
pub mod entropy;
/// Ideal flow assembly, end-to-end pipelines and congestion.
pub mod flow;
/// Deterministic random network generators.
pub mod generators;
/// Canonical hashing of matrix artifacts.
pub mod hash;
/// Stationary vector solve for row stochastic matrices.
pub mod markov;
/// Structural and numerical matrix predicates.
pub mod properties;
/// Global rescaling rules, including the integer basis.
pub mod scaling;
/// Serde helpers for matrix artifacts.
pub mod serialization;

pub use conversion::{
    adjacency_to_stochastic, capacity_to_adjacency, capacity_to_stochastic, stochastic_from_flow,
};
pub use entropy::{entropy_ratio, network_entropy};
pub use flow::{
    adjacency_to_ideal_flow, capacity_to_ideal_flow, hadamard_division, ideal_flow, total_flow,
};
pub use generators::{gen_complete, gen_cycle_with_chords};
pub use hash::canonical_hash;
pub use markov::steady_state;
pub use properties::{
    col_sums, is_ideal_flow, is_irreducible, is_non_negative, is_positive, is_premagic, is_square,
    row_sums,
};
pub use scaling::{equivalent_ifn, global_scaling, ScalingMode};
pub use serialization::{matrix_from_bytes, matrix_from_json, matrix_to_bytes, matrix_to_json};

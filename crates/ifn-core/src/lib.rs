#![deny(missing_docs)]
#![doc = "Shared primitives for the ideal flow network engine: structured errors, the floating point tolerance policy, deterministic RNG handles and schema descriptors. See docs/core-api.md for the full contract."]

pub mod errors;
pub mod rng;
pub mod schema;
pub mod tolerance;

pub use errors::{ErrorInfo, IfnError};
pub use rng::{derive_substream_seed, RngHandle};
pub use schema::SchemaVersion;
pub use tolerance::{premagic_tolerance, singular_value_cutoff, steady_state_tolerance};

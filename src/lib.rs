#![warn(missing_docs)]

//! Rust library for simulating coalescent tree
//! topologies and recording them as Pruefer sequences.
//!
//! # Overview
//!
//! The work is split across two member crates,
//! re-exported here as a single surface:
//!
//! * `prufts-core` holds the deterministic half:
//!   node labels, topologies, the sequence codec,
//!   and sequence validation.
//! * `prufts-coalescent` draws random tree
//!   topologies from the standard coalescent.
//!
//! A typical round trip:
//!
//! ```
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(101);
//! let tree = prufts::simulate_coalescent(10, &mut rng).unwrap();
//! let sequence = prufts::encode(tree.topology()).unwrap();
//! assert!(prufts::validate(&sequence, 10).is_ok());
//! let decoded = prufts::decode(&sequence).unwrap();
//! assert_eq!(&decoded, tree.topology());
//! ```

pub use prufts_coalescent::*;
pub use prufts_core::*;

/// Get the prufts version number.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

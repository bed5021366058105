//! Coalescent tree topologies and their Pruefer-style
//! serializations.
//!
//! A tree over labels `1..=2n-1` round trips through an
//! integer sequence of length `2n-3`:
//!
//! * [`encode`] peels leaves smallest-first and records
//!   each removed leaf's neighbor.
//! * [`decode`] rebuilds the unique tree a valid sequence
//!   came from.
//! * [`validate`] checks the occurrence-count rules a
//!   sequence must satisfy to be decodable into a
//!   coalescent topology.
//!
//! Random topology generation lives in the companion
//! `prufts-coalescent` crate; everything here is
//! deterministic.

use thiserror::Error;

mod leaf_queue;
mod newtypes;
mod prufer;
mod topology;
mod validity;

pub use leaf_queue::LeafQueue;
pub use newtypes::NodeLabel;
pub use newtypes::Time;
pub use prufer::decode;
pub use prufer::encode;
pub use prufer::PruferSequence;
pub use topology::Edge;
pub use topology::Topology;
pub use topology::TopologyError;
pub use topology::TopologyResult;
pub use validity::implied_leaf_count;
pub use validity::roundtrip_error;
pub use validity::validate;
pub use validity::SequenceError;
pub use validity::SequenceResult;

/// Primary error type.
///
/// Some members of this enum implement `From`
/// in order to redirect other error types.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A redirection of a [`TopologyError`]
    #[error("{value:?}")]
    TopologyError {
        /// The redirected error
        #[from]
        value: TopologyError,
    },
    /// A redirection of a [`SequenceError`]
    #[error("{value:?}")]
    SequenceError {
        /// The redirected error
        #[from]
        value: SequenceError,
    },
}

//! Random coalescent tree topologies.
//!
//! Trees grow backward in time: starting from `n` sample
//! lineages, pairs merge at exponentially distributed
//! intervals until a single root remains.  The resulting
//! topologies follow the labeling convention that
//! `prufts-core` validates and serializes, and every
//! entry point threads an explicit [`rand::Rng`] so runs
//! are reproducible.

mod coalescent;

pub use coalescent::simulate_coalescent;
pub use coalescent::simulate_prufer;
pub use coalescent::AncestralTimes;
pub use coalescent::CoalescentError;
pub use coalescent::CoalescentModel;
pub use coalescent::CoalescentResult;
pub use coalescent::CoalescentTree;

//! Edge pruning for weighted networks.

pub mod prune;

pub use prune::{prune_network, select_edges, PruneOptions, PruneResult};

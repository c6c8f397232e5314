//! Configuration-driven filtering and normalization of weighted networks.
//!
//! Two independent batch pipelines share one JSON configuration:
//!
//! - **Network filtering**: load a compressed collection of weighted graphs,
//!   transform edge weights (absolute / positive / negative / layered), prune
//!   edges by zero-weight, threshold, and percentile rules, and save the
//!   filtered collection in the same exchange format.
//! - **Adjacency normalization**: expand an index manifest (sign-separated
//!   companions, null-model replicates) over a directory of adjacency-matrix
//!   CSV files and rewrite each as a normalized dense adjacency.
//!
//! The library is organized into composable modules:
//!
//! - **data**: Core data structures (Network, AdjacencyMatrix, manifests)
//! - **transform**: Edge weight transforms (value and selection arrays)
//! - **filter**: Edge pruning (threshold and percentile survival rules)
//! - **normalize**: Adjacency matrix normalization (sign handling)
//! - **pipeline**: Batch execution of both pipelines
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use netfilt::prelude::*;
//!
//! let config = RunConfig::from_file("config.json").unwrap();
//! if config.has_network_pipeline() {
//!     run_network_pipeline(&config, Path::new("output")).unwrap();
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod transform;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::RunConfig;
    pub use crate::data::{
        load_collection, load_labels, load_manifest, save_collection, save_labels, save_manifest,
        AdjacencyMatrix, Edge, FileJob, ManifestEntry, Network,
    };
    pub use crate::error::{NetfiltError, Result};
    pub use crate::filter::{prune_network, select_edges, PruneOptions, PruneResult};
    pub use crate::normalize::{normalize_adjacency, NormalizeOptions, NormalizedAdjacency, SignMode};
    pub use crate::pipeline::{
        run_adjacency_pipeline, run_network_pipeline, AdjacencyRunSummary, NetworkRunSummary,
    };
    pub use crate::transform::{selection_weights, value_weights, SelectionMode, TransformMode};
}

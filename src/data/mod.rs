//! Core data structures for networks, adjacency matrices, and manifests.

pub mod adjacency;
pub mod jgf;
pub mod manifest;
pub mod network;

pub use adjacency::AdjacencyMatrix;
pub use jgf::{load_collection, save_collection};
pub use manifest::{
    expand_entry, expand_manifest, load_labels, load_manifest, save_labels, save_manifest, FileJob,
    ManifestEntry,
};
pub use network::{Edge, Network};

//! Batch execution of the two pipelines.

mod runner;

pub use runner::{
    run_adjacency_pipeline, run_network_pipeline, AdjacencyRunSummary, NetworkRunSummary,
    CSV_SUBDIR, INDEX_OUTPUT, LABEL_OUTPUT, NETWORK_OUTPUT,
};

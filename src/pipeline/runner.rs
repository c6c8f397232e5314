//! Sequential batch runners for both pipelines.
//!
//! Each runner is a single pass over its inputs: networks are filtered one
//! at a time into a growing output collection; adjacency jobs are processed
//! independently in manifest order. The only cross-iteration state is the
//! output being accumulated.

use crate::config::RunConfig;
use crate::data::{
    expand_manifest, load_collection, load_labels, load_manifest, save_collection, save_labels,
    save_manifest, AdjacencyMatrix,
};
use crate::error::{NetfiltError, Result};
use crate::filter::prune_network;
use crate::normalize::{normalize_adjacency, NormalizeOptions, SignMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output filename of the filtered network collection.
pub const NETWORK_OUTPUT: &str = "network.json.gz";
/// Subdirectory for generated adjacency CSVs.
pub const CSV_SUBDIR: &str = "csv";
/// Output filename of the re-emitted index manifest. Downstream consumers
/// expect the literal comma; do not "fix" it.
pub const INDEX_OUTPUT: &str = "index,json";
/// Output filename of the re-emitted label manifest (comma as above).
pub const LABEL_OUTPUT: &str = "label,json";

/// Summary of a network-filtering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRunSummary {
    /// Networks in the collection.
    pub networks: usize,
    /// Networks that went through weight filtering (the rest passed through
    /// verbatim).
    pub filtered: usize,
    /// Total edges removed across the collection.
    pub edges_removed: usize,
}

impl std::fmt::Display for NetworkRunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Network Filtering Summary")?;
        writeln!(f, "  Networks:      {}", self.networks)?;
        writeln!(f, "  Filtered:      {}", self.filtered)?;
        writeln!(f, "  Edges removed: {}", self.edges_removed)?;
        Ok(())
    }
}

/// Summary of an adjacency-normalization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyRunSummary {
    /// Manifest entries processed.
    pub entries: usize,
    /// CSV files generated.
    pub files: usize,
}

impl std::fmt::Display for AdjacencyRunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Adjacency Normalization Summary")?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  Files:   {}", self.files)?;
        Ok(())
    }
}

/// Filter the configured network collection into
/// `<output_dir>/network.json.gz`.
///
/// Collection order is preserved; networks without edge weights pass through
/// unmodified.
pub fn run_network_pipeline(config: &RunConfig, output_dir: &Path) -> Result<NetworkRunSummary> {
    let input = config
        .network
        .as_ref()
        .ok_or_else(|| NetfiltError::MissingKey("network".to_string()))?;

    let mut networks = load_collection(input)?;
    fs::create_dir_all(output_dir)?;

    let mut filtered = 0;
    let mut edges_removed = 0;
    for network in &mut networks {
        if let Some(result) = prune_network(
            network,
            config.transform,
            config.selection,
            &config.pruning,
            config.retain_weights,
        )? {
            filtered += 1;
            edges_removed += result.edges_removed;
        }
    }

    save_collection(&networks, output_dir.join(NETWORK_OUTPUT))?;

    Ok(NetworkRunSummary {
        networks: networks.len(),
        filtered,
        edges_removed,
    })
}

/// Normalize every CSV file named by the configured index manifest into
/// `<output_dir>/csv/`, then re-emit the index and label manifests.
pub fn run_adjacency_pipeline(config: &RunConfig, output_dir: &Path) -> Result<AdjacencyRunSummary> {
    let index = config
        .index
        .as_ref()
        .ok_or_else(|| NetfiltError::MissingKey("index".to_string()))?;
    let csv_dir = config
        .csv
        .as_ref()
        .ok_or_else(|| NetfiltError::MissingKey("csv".to_string()))?;

    let entries = load_manifest(index)?;
    let labels = config.label.as_ref().map(load_labels).transpose()?;

    let separate = config.sign == SignMode::Separated;
    let (jobs, updated) = expand_manifest(&entries, separate);

    let csv_out = output_dir.join(CSV_SUBDIR);
    fs::create_dir_all(&csv_out)?;

    let options = NormalizeOptions {
        sign: config.sign,
        threshold: config.pruning.threshold,
        retain_weights: config.retain_weights,
    };

    for job in &jobs {
        let matrix = AdjacencyMatrix::from_csv(csv_dir.join(&job.input))?;
        let normalized = normalize_adjacency(&matrix, job.negate, job.separated, &options)?;
        normalized.matrix.to_csv(csv_out.join(&job.output))?;
    }

    save_manifest(&updated, output_dir.join(INDEX_OUTPUT))?;
    if let Some(labels) = labels {
        save_labels(&labels, output_dir.join(LABEL_OUTPUT))?;
    }

    Ok(AdjacencyRunSummary {
        entries: entries.len(),
        files: jobs.len(),
    })
}

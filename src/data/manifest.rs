//! Index manifests driving the adjacency pipeline.
//!
//! Each entry names one base CSV file and optionally a sign-separation flag
//! and a null-model replicate count. Expansion maps an entry to the concrete
//! (input, output) file jobs and produces the updated entry to re-emit,
//! instead of mutating the loaded manifest in place.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// One entry of the index manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Base CSV filename, relative to the input directory.
    pub filename: String,
    /// Whether this entry already has a `_negative` companion on disk.
    #[serde(
        rename = "separated-sign",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub separated_sign: Option<bool>,
    /// Number of null-model replicate files accompanying each half.
    #[serde(
        rename = "null-models",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub null_models: Option<u32>,
    /// Unknown fields, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One concrete file to process: where to read, where to write, and how the
/// matrix relates to its entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    /// Input filename, relative to the CSV directory.
    pub input: String,
    /// Output filename, relative to the output CSV directory.
    pub output: String,
    /// Negate the matrix first: this job synthesizes the negative half of a
    /// signed matrix.
    pub negate: bool,
    /// The owning entry is sign-separated, so non-positive entries are zeroed.
    pub separated: bool,
}

/// Load an index manifest from a JSON file.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<ManifestEntry>> {
    let file = File::open(path)?;
    let entries = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries)
}

/// Save an index manifest to a JSON file.
pub fn save_manifest<P: AsRef<Path>>(entries: &[ManifestEntry], path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), entries)?;
    Ok(())
}

/// Load a label manifest as opaque JSON.
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Value> {
    let file = File::open(path)?;
    let labels = serde_json::from_reader(BufReader::new(file))?;
    Ok(labels)
}

/// Save a label manifest.
pub fn save_labels<P: AsRef<Path>>(labels: &Value, path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), labels)?;
    Ok(())
}

/// `{stem}_negative{ext}` companion name for a base filename.
fn negative_name(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_negative.{}", stem, ext),
        None => format!("{}_negative", filename),
    }
}

/// `{stem}-null_{index}{ext}` replicate name for a base filename.
fn null_name(filename: &str, index: u32) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) => format!("{}-null_{}.{}", stem, index, ext),
        None => format!("{}-null_{}", filename, index),
    }
}

/// Expand one manifest entry into its file jobs and the entry to re-emit.
///
/// The base file always yields one job. A `_negative` companion is added
/// when the entry is already sign-separated (companion files exist on disk)
/// or when `separate` requests separation (companions are synthesized by
/// negating the signed input, and the re-emitted entry gains the
/// `separated-sign` flag). A `null-models` count of `k` multiplies every
/// file by its `k` replicates, processed after the file they replicate.
pub fn expand_entry(entry: &ManifestEntry, separate: bool) -> (Vec<FileJob>, ManifestEntry) {
    let already = entry.separated_sign.unwrap_or(false);
    let nulls = entry.null_models.unwrap_or(0);
    let separated = already || separate;
    let mut jobs = Vec::new();

    for name in std::iter::once(entry.filename.clone())
        .chain((0..nulls).map(|i| null_name(&entry.filename, i)))
    {
        jobs.push(FileJob {
            input: name.clone(),
            output: name,
            negate: false,
            separated,
        });
    }

    let mut updated = entry.clone();
    if already {
        // Companion files exist on disk; process them as-is.
        let companion = negative_name(&entry.filename);
        for name in
            std::iter::once(companion.clone()).chain((0..nulls).map(|i| null_name(&companion, i)))
        {
            jobs.push(FileJob {
                input: name.clone(),
                output: name,
                negate: false,
                separated,
            });
        }
    } else if separate {
        // Synthesize companions from the signed inputs.
        let companion = negative_name(&entry.filename);
        jobs.push(FileJob {
            input: entry.filename.clone(),
            output: companion.clone(),
            negate: true,
            separated,
        });
        for i in 0..nulls {
            jobs.push(FileJob {
                input: null_name(&entry.filename, i),
                output: null_name(&companion, i),
                negate: true,
                separated,
            });
        }
        updated.separated_sign = Some(true);
    }

    (jobs, updated)
}

/// Expand a whole manifest, preserving entry order.
pub fn expand_manifest(
    entries: &[ManifestEntry],
    separate: bool,
) -> (Vec<FileJob>, Vec<ManifestEntry>) {
    let mut jobs = Vec::new();
    let mut updated = Vec::with_capacity(entries.len());
    for entry in entries {
        let (entry_jobs, entry_updated) = expand_entry(entry, separate);
        jobs.extend(entry_jobs);
        updated.push(entry_updated);
    }
    (jobs, updated)
}

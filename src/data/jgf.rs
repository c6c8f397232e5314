//! Compressed load/save of network collections.
//!
//! Collections are gzip-compressed JSON documents of the form
//! `{"graphs": [...]}`; a single-graph `{"graph": {...}}` document is
//! accepted on load. Collection order is preserved.

use crate::data::network::Network;
use crate::error::{NetfiltError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Deserialize)]
struct CollectionDocument {
    #[serde(default)]
    graph: Option<Network>,
    #[serde(default)]
    graphs: Option<Vec<Network>>,
}

#[derive(Serialize)]
struct CollectionOutput<'a> {
    graphs: &'a [Network],
}

/// Load an ordered network collection from a gzip-compressed exchange file.
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Vec<Network>> {
    let file = File::open(path.as_ref())?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let document: CollectionDocument = serde_json::from_reader(decoder)?;
    match (document.graphs, document.graph) {
        (Some(graphs), _) => Ok(graphs),
        (None, Some(graph)) => Ok(vec![graph]),
        (None, None) => Err(NetfiltError::Network(format!(
            "{} contains neither \"graphs\" nor \"graph\"",
            path.as_ref().display()
        ))),
    }
}

/// Save a network collection as a gzip-compressed exchange file.
pub fn save_collection<P: AsRef<Path>>(networks: &[Network], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    serde_json::to_writer(&mut encoder, &CollectionOutput { graphs: networks })?;
    encoder.finish()?;
    Ok(())
}

//! Sign handling, thresholding, and re-serialization of adjacency matrices.
//!
//! Each CSV file passes through a fixed chain: optional negation (for a
//! synthesized negative half), sign-separation zeroing, absolute value,
//! threshold zeroing, symmetry detection, and finally reconstruction of the
//! dense adjacency from the resulting graph — undirected from the upper
//! triangle when the matrix is symmetric within tolerance, directed
//! otherwise.

use crate::data::adjacency::AdjacencyMatrix;
use crate::error::Result;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Relative tolerance for the symmetry test.
pub const SYMMETRY_RTOL: f64 = 1e-5;
/// Absolute tolerance for the symmetry test.
pub const SYMMETRY_ATOL: f64 = 1e-8;

/// Sign-handling mode for adjacency normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignMode {
    /// Leave entries as loaded.
    Raw,
    /// Absolute value of every entry.
    Absolute,
    /// Split signed matrices into positive and negated-negative halves.
    Separated,
}

impl SignMode {
    /// Parse a configuration string; unrecognized values fall back to `Raw`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "absolute" => Self::Absolute,
            "separated" | "separated-sign" => Self::Separated,
            _ => Self::Raw,
        }
    }
}

/// Options shared by every file of an adjacency run.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Sign-handling mode.
    pub sign: SignMode,
    /// Entries `<=` this value are zeroed; `None` disables thresholding.
    pub threshold: Option<f64>,
    /// Emit edge weights instead of a binary adjacency.
    pub retain_weights: bool,
}

/// Outcome of normalizing one adjacency matrix.
#[derive(Debug, Clone)]
pub struct NormalizedAdjacency {
    /// The re-serialized dense adjacency (weighted or binary).
    pub matrix: AdjacencyMatrix,
    /// Whether the graph came out directed (asymmetric input).
    pub directed: bool,
    /// Number of graph edges (upper-triangle entries when undirected).
    pub edge_count: usize,
}

/// Run one matrix through the normalization chain.
///
/// `negate` flips the sign of every entry first (the synthesized negative
/// half of a signed pair); `separated` zeroes non-positive entries (the
/// owning manifest entry is sign-separated). Graph edges are exactly the
/// strictly-positive entries of the transformed matrix.
pub fn normalize_adjacency(
    source: &AdjacencyMatrix,
    negate: bool,
    separated: bool,
    options: &NormalizeOptions,
) -> Result<NormalizedAdjacency> {
    let mut working = source.clone();
    {
        let m = working.matrix_mut();
        if negate {
            for v in m.iter_mut() {
                *v = -*v;
            }
        }
        if separated {
            for v in m.iter_mut() {
                if *v <= 0.0 {
                    *v = 0.0;
                }
            }
        }
        if options.sign == SignMode::Absolute {
            for v in m.iter_mut() {
                *v = v.abs();
            }
        }
        if let Some(threshold) = options.threshold {
            for v in m.iter_mut() {
                if *v <= threshold {
                    *v = 0.0;
                }
            }
        }
    }

    let symmetric = working.is_symmetric(SYMMETRY_RTOL, SYMMETRY_ATOL);
    let n = working.n();
    let mut out = DMatrix::zeros(n, n);
    let mut edge_count = 0;

    if symmetric {
        // Undirected graph from the upper triangle, diagonal included.
        for i in 0..n {
            for j in i..n {
                let weight = working.get(i, j);
                if weight > 0.0 {
                    edge_count += 1;
                    let value = if options.retain_weights { weight } else { 1.0 };
                    out[(i, j)] = value;
                    out[(j, i)] = value;
                }
            }
        }
    } else {
        for i in 0..n {
            for j in 0..n {
                let weight = working.get(i, j);
                if weight > 0.0 {
                    edge_count += 1;
                    out[(i, j)] = if options.retain_weights { weight } else { 1.0 };
                }
            }
        }
    }

    Ok(NormalizedAdjacency {
        matrix: AdjacencyMatrix::new(out)?,
        directed: !symmetric,
        edge_count,
    })
}

//! Edge survival rules: zero-weight base step, threshold, and percentile
//! filters, plus their application to a network.
//!
//! Survival is computed over two aligned weight arrays: the value weights
//! (retained on the surviving edges) and the selection weights (consulted by
//! the threshold and percentile filters). Each filter narrows the surviving
//! set; none can re-admit an edge a previous step excluded.

use crate::data::network::Network;
use crate::error::Result;
use crate::transform::{layer_of, selection_weights, value_weights, SelectionMode, TransformMode};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Options governing edge survival.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PruneOptions {
    /// Minimum selection weight; `None` disables the threshold filter.
    pub threshold: Option<f64>,
    /// Fraction of currently-kept edges to retain; `None` disables the
    /// percentile filter. Must lie in [0, 1].
    pub percentile: Option<f64>,
    /// Rank-position cutoff instead of an interpolated quantile cutoff.
    pub strict_percentile: bool,
    /// Skip the zero-weight base step, starting with every edge kept.
    pub keep_zero_weights: bool,
}

/// Summary of one network's pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneResult {
    /// Edge count before pruning.
    pub edges_before: usize,
    /// Edge count after pruning.
    pub edges_after: usize,
    /// Edges removed.
    pub edges_removed: usize,
}

/// Round half-to-even.
fn round_half_even(x: f64) -> usize {
    let floor = x.floor();
    let frac = x - floor;
    let rounded = match frac.partial_cmp(&0.5) {
        Some(Ordering::Less) => floor,
        Some(Ordering::Greater) => floor + 1.0,
        _ => {
            if (floor as u64) % 2 == 0 {
                floor
            } else {
                floor + 1.0
            }
        }
    };
    rounded.max(0.0) as usize
}

/// Linear-interpolation quantile of a non-empty value set.
fn quantile_linear(values: &[f64], q: f64) -> f64 {
    debug_assert!(!values.is_empty());
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let m = sorted.len();
    let h = q * (m - 1) as f64;
    let lo = (h.floor() as usize).min(m - 1);
    let hi = (lo + 1).min(m - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Compute the survival mask for aligned value and selection arrays.
///
/// Steps, in order:
/// 1. Base survival: an edge starts kept when its value or selection weight
///    is nonzero (skipped entirely under `keep_zero_weights`).
/// 2. Threshold: keep only edges whose selection weight is `>= threshold`.
/// 3. Percentile, when at least one edge is still kept, with `R` the
///    currently-kept count:
///    - strict: rank all edges by selection weight descending (stable, ties
///      by original index) and cut the ranking `round((1-p) * R)` positions
///      in, counted with half-to-even rounding; positions past the cut stay
///      eligible and the rest drop out.
///    - quantile: keep edges whose selection weight is `>=` the
///      linearly-interpolated `(1-p)`-quantile of the kept selection weights.
///
/// Every step intersects with the current mask; the result only narrows.
pub fn select_edges(values: &[f64], selection: &[f64], options: &PruneOptions) -> Vec<bool> {
    debug_assert_eq!(values.len(), selection.len());
    let n = values.len();

    let mut keep: Vec<bool> = if options.keep_zero_weights {
        vec![true; n]
    } else {
        values
            .iter()
            .zip(selection)
            .map(|(&v, &s)| v != 0.0 || s != 0.0)
            .collect()
    };

    if let Some(threshold) = options.threshold {
        for (kept, &s) in keep.iter_mut().zip(selection) {
            *kept = *kept && s >= threshold;
        }
    }

    if let Some(percentile) = options.percentile {
        let remaining = keep.iter().filter(|&&kept| kept).count();
        if remaining > 0 {
            if options.strict_percentile {
                let mut ranked: Vec<usize> = (0..n).collect();
                ranked.sort_by(|&a, &b| {
                    selection[b]
                        .partial_cmp(&selection[a])
                        .unwrap_or(Ordering::Equal)
                });
                let cut = round_half_even((1.0 - percentile) * remaining as f64).min(n);
                let mut eligible = vec![false; n];
                for &index in &ranked[cut..] {
                    eligible[index] = true;
                }
                for (kept, in_cut) in keep.iter_mut().zip(&eligible) {
                    *kept = *kept && *in_cut;
                }
            } else {
                let kept_selection: Vec<f64> = selection
                    .iter()
                    .zip(&keep)
                    .filter(|(_, &kept)| kept)
                    .map(|(&s, _)| s)
                    .collect();
                let cutoff = quantile_linear(&kept_selection, 1.0 - percentile);
                for (kept, &s) in keep.iter_mut().zip(selection) {
                    *kept = *kept && s >= cutoff;
                }
            }
        }
    }

    keep
}

/// Transform and prune one network in place.
///
/// Returns `Ok(None)` when the network has no edges or no edge weights; such
/// networks pass through unmodified. Otherwise the layered transform tags
/// every edge with its layer bit, weights are replaced by the value array or
/// stripped entirely, and non-surviving edges are removed.
pub fn prune_network(
    network: &mut Network,
    transform: TransformMode,
    selection_mode: SelectionMode,
    options: &PruneOptions,
    retain_weights: bool,
) -> Result<Option<PruneResult>> {
    let raw = match network.raw_weights()? {
        Some(raw) => raw,
        None => return Ok(None),
    };

    let values = value_weights(&raw, transform);
    let selection = selection_weights(&raw, selection_mode);
    let keep = select_edges(&values, &selection, options);

    if transform == TransformMode::Layered {
        for (edge, &value) in network.edges.iter_mut().zip(&values) {
            edge.set_layer(layer_of(value));
        }
    }

    if retain_weights {
        for (edge, &value) in network.edges.iter_mut().zip(&values) {
            edge.set_weight(value);
        }
    } else {
        for edge in &mut network.edges {
            edge.clear_weight();
        }
    }

    let edges_before = network.edge_count();
    network.retain_edges(&keep);
    let edges_after = network.edge_count();

    Ok(Some(PruneResult {
        edges_before,
        edges_after,
        edges_removed: edges_before - edges_after,
    }))
}

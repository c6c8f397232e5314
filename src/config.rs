//! Run configuration loaded from a JSON file.
//!
//! Numeric keys accept either a JSON number or a string parseable as a
//! finite float; anything else (including `"none"`) leaves the corresponding
//! feature disabled without raising an error. Mode strings that don't match
//! a known mode likewise fall back to the do-nothing mode. Which pipelines
//! run is decided by which paths are present.

use crate::error::{NetfiltError, Result};
use crate::filter::PruneOptions;
use crate::normalize::SignMode;
use crate::transform::{SelectionMode, TransformMode};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    network: Option<String>,
    transform: Option<String>,
    #[serde(rename = "selection-transform")]
    selection_transform: Option<String>,
    threshold: Option<Value>,
    percentile: Option<Value>,
    #[serde(rename = "strict-percentile")]
    strict_percentile: Option<bool>,
    #[serde(rename = "retain-weights")]
    retain_weights: Option<bool>,
    #[serde(rename = "keep-zero-weights")]
    keep_zero_weights: Option<bool>,
    index: Option<String>,
    label: Option<String>,
    csv: Option<String>,
}

/// Fully-parsed run configuration shared by both pipelines.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Compressed input network collection (network pipeline).
    pub network: Option<PathBuf>,
    /// Value-weight transform.
    pub transform: TransformMode,
    /// Selection-weight transform.
    pub selection: SelectionMode,
    /// Sign handling for the adjacency pipeline, parsed from the same
    /// `transform` key.
    pub sign: SignMode,
    /// Threshold / percentile / zero-weight survival options.
    pub pruning: PruneOptions,
    /// Keep transformed weights on the output instead of stripping them.
    pub retain_weights: bool,
    /// Index manifest path (adjacency pipeline).
    pub index: Option<PathBuf>,
    /// Label manifest path, passed through opaquely (adjacency pipeline).
    pub label: Option<PathBuf>,
    /// Input CSV directory (adjacency pipeline).
    pub csv: Option<PathBuf>,
}

/// A number or numeric string holding a finite float; everything else is
/// "feature disabled".
fn finite_float(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(number)) => number.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

impl RunConfig {
    /// Load from a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let transform = raw
            .transform
            .as_deref()
            .map(TransformMode::parse)
            .unwrap_or(TransformMode::None);
        let selection = raw
            .selection_transform
            .as_deref()
            .and_then(SelectionMode::parse)
            .unwrap_or_else(|| SelectionMode::default_for(transform));
        let sign = raw
            .transform
            .as_deref()
            .map(SignMode::parse)
            .unwrap_or(SignMode::Raw);

        let percentile = finite_float(raw.percentile.as_ref());
        if let Some(p) = percentile {
            if !(0.0..=1.0).contains(&p) {
                return Err(NetfiltError::InvalidParameter(format!(
                    "percentile must be between 0 and 1, got {}",
                    p
                )));
            }
        }

        let pruning = PruneOptions {
            threshold: finite_float(raw.threshold.as_ref()),
            percentile,
            strict_percentile: raw.strict_percentile.unwrap_or(false),
            keep_zero_weights: raw.keep_zero_weights.unwrap_or(false),
        };

        Ok(Self {
            network: raw.network.map(PathBuf::from),
            transform,
            selection,
            sign,
            pruning,
            retain_weights: raw.retain_weights.unwrap_or(false),
            index: raw.index.map(PathBuf::from),
            label: raw.label.map(PathBuf::from),
            csv: raw.csv.map(PathBuf::from),
        })
    }

    /// Whether the network-filtering pipeline is selected.
    pub fn has_network_pipeline(&self) -> bool {
        self.network.is_some()
    }

    /// Whether the adjacency-normalization pipeline is selected.
    pub fn has_adjacency_pipeline(&self) -> bool {
        self.index.is_some() && self.csv.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config.transform, TransformMode::None);
        assert_eq!(config.selection, SelectionMode::None);
        assert_eq!(config.sign, SignMode::Raw);
        assert_eq!(config.pruning.threshold, None);
        assert_eq!(config.pruning.percentile, None);
        assert!(!config.pruning.strict_percentile);
        assert!(!config.pruning.keep_zero_weights);
        assert!(!config.retain_weights);
        assert!(!config.has_network_pipeline());
        assert!(!config.has_adjacency_pipeline());
    }

    #[test]
    fn test_numeric_string_threshold() {
        let config = RunConfig::from_json(r#"{"threshold": "0.25"}"#).unwrap();
        assert_eq!(config.pruning.threshold, Some(0.25));

        let config = RunConfig::from_json(r#"{"threshold": 0.25}"#).unwrap();
        assert_eq!(config.pruning.threshold, Some(0.25));
    }

    #[test]
    fn test_malformed_numeric_disables() {
        // "none" and friends silently disable the feature.
        let config =
            RunConfig::from_json(r#"{"threshold": "none", "percentile": "nope"}"#).unwrap();
        assert_eq!(config.pruning.threshold, None);
        assert_eq!(config.pruning.percentile, None);

        let config = RunConfig::from_json(r#"{"threshold": null}"#).unwrap();
        assert_eq!(config.pruning.threshold, None);
    }

    #[test]
    fn test_non_finite_disables() {
        let config = RunConfig::from_json(r#"{"percentile": "inf"}"#).unwrap();
        assert_eq!(config.pruning.percentile, None);
    }

    #[test]
    fn test_percentile_out_of_range_is_rejected() {
        assert!(RunConfig::from_json(r#"{"percentile": 1.5}"#).is_err());
        assert!(RunConfig::from_json(r#"{"percentile": -0.1}"#).is_err());
        assert!(RunConfig::from_json(r#"{"percentile": 1.0}"#).is_ok());
    }

    #[test]
    fn test_selection_defaults_to_transform() {
        let config = RunConfig::from_json(r#"{"transform": "positive"}"#).unwrap();
        assert_eq!(config.selection, SelectionMode::Positive);
    }

    #[test]
    fn test_layered_defaults_selection_to_absolute() {
        let config = RunConfig::from_json(r#"{"transform": "layered"}"#).unwrap();
        assert_eq!(config.transform, TransformMode::Layered);
        assert_eq!(config.selection, SelectionMode::Absolute);
    }

    #[test]
    fn test_explicit_selection_overrides() {
        let config = RunConfig::from_json(
            r#"{"transform": "layered", "selection-transform": "negative"}"#,
        )
        .unwrap();
        assert_eq!(config.selection, SelectionMode::Negative);
    }

    #[test]
    fn test_separated_sign_mode() {
        let config = RunConfig::from_json(r#"{"transform": "separated"}"#).unwrap();
        assert_eq!(config.sign, SignMode::Separated);
        // The edge-weight transform has no "separated" mode.
        assert_eq!(config.transform, TransformMode::None);
    }

    #[test]
    fn test_pipeline_selection() {
        let config = RunConfig::from_json(r#"{"network": "data/network.json.gz"}"#).unwrap();
        assert!(config.has_network_pipeline());
        assert!(!config.has_adjacency_pipeline());

        let config = RunConfig::from_json(
            r#"{"index": "data/index.json", "label": "data/label.json", "csv": "data/csv"}"#,
        )
        .unwrap();
        assert!(config.has_adjacency_pipeline());
    }
}

//! Weight transforms mapping raw signed edge weights to value and selection
//! arrays.
//!
//! Each filtered network carries two derived weight arrays: the *value*
//! weights that end up stored on the surviving edges, and the *selection*
//! weights that only drive the survival decision. Both are computed
//! elementwise from the raw signed weights, under independently configured
//! modes.

use serde::{Deserialize, Serialize};

/// How a raw signed edge weight maps to the retained value weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Leave weights untouched.
    None,
    /// Absolute value.
    Absolute,
    /// Positive part: `max(w, 0)`.
    Positive,
    /// Negated negative part: `max(-w, 0)`.
    Negative,
    /// Weights untouched, plus a binary `layer` attribute derived from sign.
    Layered,
}

impl TransformMode {
    /// Parse a configuration string; unrecognized values fall back to `None`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "absolute" => Self::Absolute,
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "layered" => Self::Layered,
            _ => Self::None,
        }
    }

    /// The value weight for a raw weight `w`.
    pub fn value(self, w: f64) -> f64 {
        match self {
            Self::None | Self::Layered => w,
            Self::Absolute => w.abs(),
            Self::Positive => w.max(0.0),
            Self::Negative => (-w).max(0.0),
        }
    }
}

/// How a raw signed edge weight maps to the selection weight used only for
/// survival decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Leave weights untouched.
    None,
    /// Absolute value.
    Absolute,
    /// Positive part: `max(w, 0)`.
    Positive,
    /// Negated negative part: `max(-w, 0)`.
    Negative,
}

impl SelectionMode {
    /// Parse a configuration string; unrecognized values return `Option::None`
    /// so the caller can fall back to [`SelectionMode::default_for`].
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "absolute" => Some(Self::Absolute),
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            _ => Option::None,
        }
    }

    /// The default selection mode when none is configured: `Absolute` for a
    /// layered transform, otherwise the same formula as the transform itself.
    pub fn default_for(transform: TransformMode) -> Self {
        match transform {
            TransformMode::Layered | TransformMode::Absolute => Self::Absolute,
            TransformMode::Positive => Self::Positive,
            TransformMode::Negative => Self::Negative,
            TransformMode::None => Self::None,
        }
    }

    /// The selection weight for a raw weight `w`.
    pub fn select(self, w: f64) -> f64 {
        match self {
            Self::None => w,
            Self::Absolute => w.abs(),
            Self::Positive => w.max(0.0),
            Self::Negative => (-w).max(0.0),
        }
    }
}

/// Compute the value weight array for a slice of raw weights.
pub fn value_weights(raw: &[f64], mode: TransformMode) -> Vec<f64> {
    raw.iter().map(|&w| mode.value(w)).collect()
}

/// Compute the selection weight array for a slice of raw weights.
pub fn selection_weights(raw: &[f64], mode: SelectionMode) -> Vec<f64> {
    raw.iter().map(|&w| mode.select(w)).collect()
}

/// Layer bit for a value weight: 0 for strictly positive, 1 otherwise.
pub fn layer_of(value: f64) -> i64 {
    if value > 0.0 {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: [f64; 5] = [-2.0, -0.5, 0.0, 0.5, 3.0];

    #[test]
    fn test_value_formulas() {
        assert_eq!(value_weights(&RAW, TransformMode::None), RAW.to_vec());
        assert_eq!(value_weights(&RAW, TransformMode::Layered), RAW.to_vec());
        assert_eq!(
            value_weights(&RAW, TransformMode::Absolute),
            vec![2.0, 0.5, 0.0, 0.5, 3.0]
        );
        assert_eq!(
            value_weights(&RAW, TransformMode::Positive),
            vec![0.0, 0.0, 0.0, 0.5, 3.0]
        );
        assert_eq!(
            value_weights(&RAW, TransformMode::Negative),
            vec![2.0, 0.5, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_selection_formulas() {
        assert_eq!(selection_weights(&RAW, SelectionMode::None), RAW.to_vec());
        assert_eq!(
            selection_weights(&RAW, SelectionMode::Absolute),
            vec![2.0, 0.5, 0.0, 0.5, 3.0]
        );
        assert_eq!(
            selection_weights(&RAW, SelectionMode::Positive),
            vec![0.0, 0.0, 0.0, 0.5, 3.0]
        );
        assert_eq!(
            selection_weights(&RAW, SelectionMode::Negative),
            vec![2.0, 0.5, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_parse_transform() {
        assert_eq!(TransformMode::parse("Absolute"), TransformMode::Absolute);
        assert_eq!(TransformMode::parse("LAYERED"), TransformMode::Layered);
        assert_eq!(TransformMode::parse("positive"), TransformMode::Positive);
        assert_eq!(TransformMode::parse("negative"), TransformMode::Negative);
        // Unrecognized values disable the transform instead of erroring.
        assert_eq!(TransformMode::parse("sqrt"), TransformMode::None);
        assert_eq!(TransformMode::parse(""), TransformMode::None);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(SelectionMode::parse("none"), Some(SelectionMode::None));
        assert_eq!(
            SelectionMode::parse("Negative"),
            Some(SelectionMode::Negative)
        );
        assert_eq!(SelectionMode::parse("layered"), Option::None);
    }

    #[test]
    fn test_default_selection() {
        // Layered defaults to absolute; everything else mirrors the transform.
        assert_eq!(
            SelectionMode::default_for(TransformMode::Layered),
            SelectionMode::Absolute
        );
        assert_eq!(
            SelectionMode::default_for(TransformMode::Absolute),
            SelectionMode::Absolute
        );
        assert_eq!(
            SelectionMode::default_for(TransformMode::Positive),
            SelectionMode::Positive
        );
        assert_eq!(
            SelectionMode::default_for(TransformMode::Negative),
            SelectionMode::Negative
        );
        assert_eq!(
            SelectionMode::default_for(TransformMode::None),
            SelectionMode::None
        );
    }

    #[test]
    fn test_layer_bits() {
        assert_eq!(layer_of(3.0), 0);
        assert_eq!(layer_of(0.0), 1);
        assert_eq!(layer_of(-0.5), 1);
    }
}

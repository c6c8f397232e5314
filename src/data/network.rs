//! Networks in the JSON graph-exchange schema.
//!
//! Only the pieces the filter touches are typed: the edge list and each
//! edge's `metadata` object (where `weight` and `layer` live). Everything
//! else — graph label, graph metadata, the node table, edge endpoints — is
//! carried through untouched, so a filtered file differs from its input only
//! where filtering changed it.

use crate::error::{NetfiltError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single graph in the exchange collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Directedness flag from the exchange format, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    /// Edge list; may be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
    /// Every other graph-level field, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// An edge of a [`Network`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Edge attributes; `weight` and `layer` live here.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    /// Endpoints and any other edge-level fields, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Edge {
    /// The numeric `weight` attribute, if present.
    pub fn weight(&self) -> Option<f64> {
        self.metadata.get("weight").and_then(Value::as_f64)
    }

    /// Overwrite the `weight` attribute.
    pub fn set_weight(&mut self, weight: f64) {
        self.metadata.insert("weight".to_string(), Value::from(weight));
    }

    /// Delete the `weight` attribute.
    pub fn clear_weight(&mut self) {
        self.metadata.remove("weight");
    }

    /// The integer `layer` attribute, if present.
    pub fn layer(&self) -> Option<i64> {
        self.metadata.get("layer").and_then(Value::as_i64)
    }

    /// Overwrite the `layer` attribute.
    pub fn set_layer(&mut self, layer: i64) {
        self.metadata.insert("layer".to_string(), Value::from(layer));
    }
}

impl Network {
    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The raw weight array, aligned to edge order.
    ///
    /// Returns `Ok(None)` when the network has no edges or none of its edges
    /// carries a numeric `weight` — such networks pass through filtering
    /// unmodified. A network where only some edges carry weights is malformed
    /// and fails fast.
    pub fn raw_weights(&self) -> Result<Option<Vec<f64>>> {
        if self.edges.is_empty() {
            return Ok(None);
        }
        let weights: Vec<f64> = self.edges.iter().filter_map(Edge::weight).collect();
        if weights.is_empty() {
            return Ok(None);
        }
        if weights.len() < self.edges.len() {
            return Err(NetfiltError::Network(format!(
                "{} of {} edges are missing a numeric weight",
                self.edges.len() - weights.len(),
                self.edges.len()
            )));
        }
        Ok(Some(weights))
    }

    /// Retain only the edges whose `keep` flag is set.
    ///
    /// Edge indices are compacted; no index stability is promised.
    pub fn retain_edges(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.edges.len());
        let edges = std::mem::take(&mut self.edges);
        self.edges = edges
            .into_iter()
            .zip(keep)
            .filter(|(_, &kept)| kept)
            .map(|(edge, _)| edge)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn edge(source: u32, target: u32, weight: Option<f64>) -> Edge {
        let mut metadata = Map::new();
        if let Some(w) = weight {
            metadata.insert("weight".to_string(), json!(w));
        }
        let mut rest = Map::new();
        rest.insert("source".to_string(), json!(source.to_string()));
        rest.insert("target".to_string(), json!(target.to_string()));
        Edge { metadata, rest }
    }

    fn network(edges: Vec<Edge>) -> Network {
        Network {
            directed: Some(false),
            edges,
            rest: Map::new(),
        }
    }

    #[test]
    fn test_raw_weights() {
        let net = network(vec![edge(0, 1, Some(1.5)), edge(1, 2, Some(-2.0))]);
        assert_eq!(net.raw_weights().unwrap(), Some(vec![1.5, -2.0]));
    }

    #[test]
    fn test_no_weights_passes_through() {
        let net = network(vec![edge(0, 1, None), edge(1, 2, None)]);
        assert_eq!(net.raw_weights().unwrap(), None);

        let empty = network(vec![]);
        assert_eq!(empty.raw_weights().unwrap(), None);
    }

    #[test]
    fn test_mixed_weights_is_an_error() {
        let net = network(vec![edge(0, 1, Some(1.0)), edge(1, 2, None)]);
        assert!(net.raw_weights().is_err());
    }

    #[test]
    fn test_retain_edges() {
        let mut net = network(vec![
            edge(0, 1, Some(1.0)),
            edge(1, 2, Some(2.0)),
            edge(2, 3, Some(3.0)),
        ]);
        net.retain_edges(&[true, false, true]);
        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.edges[0].weight(), Some(1.0));
        assert_eq!(net.edges[1].weight(), Some(3.0));
    }

    #[test]
    fn test_weight_attribute_updates() {
        let mut e = edge(0, 1, Some(-4.0));
        e.set_weight(4.0);
        assert_eq!(e.weight(), Some(4.0));
        e.set_layer(1);
        assert_eq!(e.layer(), Some(1));
        e.clear_weight();
        assert_eq!(e.weight(), None);
        // Endpoints survive attribute edits.
        assert_eq!(e.rest.get("source"), Some(&json!("0")));
    }

    #[test]
    fn test_passthrough_fields_roundtrip() {
        let raw = json!({
            "label": "subject-1",
            "directed": false,
            "metadata": {"session": 2},
            "nodes": {"0": {"label": "a"}, "1": {"label": "b"}},
            "edges": [{"source": "0", "target": "1", "metadata": {"weight": 0.25}}]
        });
        let net: Network = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.edges[0].weight(), Some(0.25));
        let back = serde_json::to_value(&net).unwrap();
        assert_eq!(back["label"], raw["label"]);
        assert_eq!(back["nodes"], raw["nodes"]);
        assert_eq!(back["metadata"], raw["metadata"]);
    }
}

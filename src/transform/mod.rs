//! Edge weight transforms.

pub mod weight;

pub use weight::{layer_of, selection_weights, value_weights, SelectionMode, TransformMode};

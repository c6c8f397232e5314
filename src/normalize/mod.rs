//! Adjacency matrix normalization.

pub mod sign;

pub use sign::{
    normalize_adjacency, NormalizeOptions, NormalizedAdjacency, SignMode, SYMMETRY_ATOL,
    SYMMETRY_RTOL,
};

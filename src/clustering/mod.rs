// Module declarations
pub mod engine;
pub mod similarity;
#[cfg(test)]
mod tests;
pub mod types;

pub use engine::ClusteringEngine;
pub use similarity::jaccard;
pub use types::*;

/// Minimum Jaccard similarity for a title to join an existing cluster
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.33;

/// Number of most frequent tokens that stand in for a cluster
pub const DEFAULT_CENTROID_SIZE: usize = 25;

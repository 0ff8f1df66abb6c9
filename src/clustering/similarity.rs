use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity of two sets: `|a ∩ b| / |a ∪ b|`.
///
/// Returns 0.0 when either set is empty, so an empty title never matches.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}

use serde::Serialize;

/// Similarity of one reference interval set to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Name of the reference, e.g. its file name
    pub identifier: String,
    /// Intersection over union of covered bases, in [0, 1]
    pub jaccard: f64,
    /// Bases covered by both query and reference
    pub intersection: u128,
    /// Bases covered by either query or reference
    pub union: u128,
}

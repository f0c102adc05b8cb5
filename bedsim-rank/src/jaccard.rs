use bedsim_core::models::IntervalSet;

use crate::models::ComparisonResult;

///
/// Jaccard index of two interval sets over covered bases: intersection / union.
///
/// Two empty sets have no union; that case scores `0.0` (no similarity), so an
/// empty reference never ranks as identical to anything.
///
pub fn jaccard(query: &IntervalSet, reference: &IntervalSet) -> f64 {
    let intersection = query.intersect(reference);
    ratio(intersection, union_from(query, reference, intersection))
}

///
/// Compare one reference against the query, keeping the base-pair counts the
/// score was computed from.
///
pub fn compare(query: &IntervalSet, identifier: &str, reference: &IntervalSet) -> ComparisonResult {
    let intersection = query.intersect(reference);
    let union = union_from(query, reference, intersection);

    ComparisonResult {
        identifier: identifier.to_string(),
        jaccard: ratio(intersection, union),
        intersection,
        union,
    }
}

// union from the cached coverages, so the sweep runs once per pair
fn union_from(query: &IntervalSet, reference: &IntervalSet, intersection: u128) -> u128 {
    query.coverage_length() + reference.coverage_length() - intersection
}

fn ratio(intersection: u128, union: u128) -> f64 {
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

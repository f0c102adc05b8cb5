use bedsim_core::models::IntervalSet;
use rayon::prelude::*;

use crate::errors::{RankError, RankResult};
use crate::jaccard::compare;
use crate::models::ComparisonResult;

///
/// Rank references by Jaccard similarity to the query.
///
/// Every reference is scored independently on the rayon pool. Scores are
/// collected in input order before sorting, and the sort is stable, so
/// references with equal scores keep their input order regardless of which
/// comparison finished first.
///
/// # Arguments
/// - query: the interval set to match
/// - references: `(identifier, interval set)` pairs, in a fixed order
/// - top_n: number of results to keep; larger than `references.len()` keeps all
///
/// # Errors
/// [RankError::InvalidArgument] when `top_n` is zero.
///
pub fn rank<S>(
    query: &IntervalSet,
    references: &[(S, IntervalSet)],
    top_n: usize,
) -> RankResult<Vec<ComparisonResult>>
where
    S: AsRef<str> + Sync,
{
    if top_n == 0 {
        return Err(RankError::InvalidArgument(
            "top_n must be at least 1".to_string(),
        ));
    }

    let mut results: Vec<ComparisonResult> = references
        .par_iter()
        .map(|(identifier, reference)| compare(query, identifier.as_ref(), reference))
        .collect();

    log::debug!("Scored {} references against the query", results.len());

    // stable: ties keep input order
    results.sort_by(|a, b| b.jaccard.total_cmp(&a.jaccard));
    results.truncate(top_n);

    Ok(results)
}

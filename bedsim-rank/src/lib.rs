//! Jaccard similarity ranking of genomic interval sets.
//!
//! Scores each reference [IntervalSet](bedsim_core::models::IntervalSet) against a
//! query by the Jaccard index of their covered bases, then returns the best
//! matches in descending order.
//!
//! # Example
//!
//! ```
//! use bedsim_core::models::IntervalSet;
//! use bedsim_rank::rank;
//!
//! let query = IntervalSet::from_records([("chr1", "0", "100")]).unwrap();
//! let references = vec![
//!     ("r1", IntervalSet::from_records([("chr1", "50", "150")]).unwrap()),
//!     ("r2", IntervalSet::from_records([("chr1", "0", "100")]).unwrap()),
//! ];
//!
//! let top = rank(&query, &references, 1).unwrap();
//! assert_eq!(top[0].identifier, "r2");
//! ```

pub mod errors;
pub mod jaccard;
pub mod models;
pub mod ranker;

// re-exports
pub use errors::RankError;
pub use jaccard::{compare, jaccard};
pub use models::ComparisonResult;
pub use ranker::rank;

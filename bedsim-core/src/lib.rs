//! Genomic interval sets and coverage set algebra.
//!
//! An [IntervalSet] is built once from raw `(chromosome, start, end)` records, BED
//! text or a BED file. Construction validates every record and canonicalizes the
//! coverage per chromosome, so the algebra afterwards (`coverage_length`,
//! `intersect`, `union_length`) is total and runs as a linear sweep.
//!
//! # Example
//!
//! ```
//! use bedsim_core::models::IntervalSet;
//!
//! let a = IntervalSet::from_records([("chr1", "0", "100")]).unwrap();
//! let b = IntervalSet::from_records([("chr1", "50", "150")]).unwrap();
//!
//! assert_eq!(a.intersect(&b), 50);
//! assert_eq!(a.union_length(&b), 150);
//! ```

pub mod errors;
pub mod models;
pub mod sweep;
pub mod utils;

// re-exports
pub use errors::{BedReadError, IntervalSetError, ParseError};
pub use models::{Interval, IntervalSet, Span};

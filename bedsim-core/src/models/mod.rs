pub mod interval;
pub mod interval_set;
pub mod span;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::interval_set::IntervalSet;
pub use self::span::Span;

use std::cmp::Ordering;

/// Represent a range from [start, end) on a single chromosome.
/// Inclusive start, exclusive of end
///
/// Fields are public for cheap construction inside the sweep; callers are
/// expected to keep `start < end`. Spans taken from an
/// [Interval](crate::models::Interval) always do. A span that breaks it is
/// treated as empty: [Span::width] and [Span::intersect] return 0.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Ord for Span {
    #[inline]
    fn cmp(&self, other: &Span) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl PartialOrd for Span {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Span {
    #[inline]
    pub fn width(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Number of bases shared by the two spans.
    #[inline]
    pub fn intersect(&self, other: &Span) -> u64 {
        std::cmp::min(self.end, other.end).saturating_sub(std::cmp::max(self.start, other.start))
    }

    /// Check if two spans overlap
    #[inline]
    pub fn overlap(&self, start: u64, end: u64) -> bool {
        self.start < end && self.end > start
    }
}

use std::fmt::{self, Display};
use std::io::{BufRead, ErrorKind};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use fxhash::FxHashMap as HashMap;

use crate::errors::{BedReadError, IntervalSetError, ParseError};
use crate::models::{Interval, Span};
use crate::sweep::{covered_length, intersect_length, reduce};
use crate::utils::{get_dynamic_reader, is_bed_header};

///
/// IntervalSet struct, the representation of an interval file such as a bed file.
///
/// Keeps two views of the same data: the raw intervals in input order, and the
/// merged coverage, one sorted list of maximal non-overlapping spans per
/// chromosome. Overlapping or abutting intervals are merged, so `chr1 0 10` and
/// `chr1 10 20` count as a single 20 bp block. The set never changes after
/// construction.
///
#[derive(Clone, Debug)]
pub struct IntervalSet {
    raw: Vec<Interval>,
    merged: HashMap<String, Vec<Span>>,
    coverage: u128,
}

pub struct IntervalSetIterator<'a> {
    interval_set: &'a IntervalSet,
    index: usize,
}

impl IntervalSet {
    ///
    /// Create a new [IntervalSet] from validated intervals.
    ///
    pub fn new(intervals: Vec<Interval>) -> Self {
        let mut by_chr: HashMap<String, Vec<Span>> = HashMap::default();
        for interval in &intervals {
            by_chr
                .entry(interval.chr().to_string())
                .or_default()
                .push(interval.span());
        }

        let merged: HashMap<String, Vec<Span>> = by_chr
            .into_iter()
            .map(|(chr, spans)| (chr, reduce(spans)))
            .collect();

        let coverage = merged.values().map(|spans| covered_length(spans)).sum();

        IntervalSet {
            raw: intervals,
            merged,
            coverage,
        }
    }

    ///
    /// Create a new [IntervalSet] from raw `(chromosome, start, end)` triples.
    ///
    /// Fails on the first malformed triple; an empty input gives an empty set.
    ///
    pub fn from_records<'a, I>(records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let intervals = records
            .into_iter()
            .map(Interval::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntervalSet::new(intervals))
    }

    ///
    /// Read BED records from any buffered reader.
    ///
    /// A line that is not UTF-8 is a [ParseError::InvalidEncoding] at that line,
    /// not an I/O failure.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BedReadError> {
        let mut intervals: Vec<Interval> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(ParseError::InvalidEncoding.at_line(idx + 1).into());
                }
                Err(e) => return Err(e.into()),
            };
            if let Some(interval) = parse_bed_line(idx, &line)? {
                intervals.push(interval);
            }
        }

        Ok(IntervalSet::new(intervals))
    }

    ///
    /// Number of raw intervals, as parsed.
    ///
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    ///
    /// Raw intervals in input order. May overlap or repeat.
    ///
    pub fn raw(&self) -> &[Interval] {
        &self.raw
    }

    ///
    /// Number of intervals in the merged coverage.
    ///
    pub fn merged_len(&self) -> usize {
        self.merged.values().map(Vec::len).sum()
    }

    ///
    /// Chromosome names, sorted lexicographically.
    ///
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut chroms: Vec<&str> = self.merged.keys().map(String::as_str).collect();
        chroms.sort_unstable();
        chroms
    }

    ///
    /// Merged coverage of one chromosome (empty when absent).
    ///
    pub fn chr_spans(&self, chr: &str) -> &[Span] {
        self.merged.get(chr).map(Vec::as_slice).unwrap_or(&[])
    }

    ///
    /// Iterate the merged coverage, chromosomes in lexicographic order and
    /// spans by start.
    ///
    pub fn iter_merged(&self) -> impl Iterator<Item = (&str, Span)> + '_ {
        self.chromosomes()
            .into_iter()
            .flat_map(move |chr| self.chr_spans(chr).iter().map(move |s| (chr, *s)))
    }

    ///
    /// Total bases covered by the set, overlaps counted once.
    ///
    /// Set-level lengths are `u128`: a single chromosome fits in `u64`, but the
    /// sum over chromosomes (or over two sets) may not.
    ///
    pub fn coverage_length(&self) -> u128 {
        self.coverage
    }

    ///
    /// Bases covered on one chromosome.
    ///
    pub fn chr_coverage_length(&self, chr: &str) -> u128 {
        covered_length(self.chr_spans(chr))
    }

    ///
    /// Bases covered by both sets. Chromosomes present in only one set add nothing.
    ///
    pub fn intersect(&self, other: &IntervalSet) -> u128 {
        // walk the smaller map, look up in the larger one
        let (small, large) = if self.merged.len() <= other.merged.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .merged
            .iter()
            .filter_map(|(chr, spans)| {
                large
                    .merged
                    .get(chr)
                    .map(|other_spans| intersect_length(spans, other_spans))
            })
            .sum()
    }

    ///
    /// Bases covered by either set.
    ///
    pub fn union_length(&self, other: &IntervalSet) -> u128 {
        self.coverage + other.coverage - self.intersect(other)
    }
}

/// Parse one BED line; header, comment and blank lines give `None`.
fn parse_bed_line(idx: usize, line: &str) -> Result<Option<Interval>, ParseError> {
    if is_bed_header(line) {
        return Ok(None);
    }
    line.parse::<Interval>()
        .map(Some)
        .map_err(|e| e.at_line(idx + 1))
}

impl FromStr for IntervalSet {
    type Err = ParseError;

    ///
    /// Parse BED text. Header, comment and blank lines are skipped.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut intervals: Vec<Interval> = Vec::new();

        for (idx, line) in s.lines().enumerate() {
            if let Some(interval) = parse_bed_line(idx, line)? {
                intervals.push(interval);
            }
        }

        Ok(IntervalSet::new(intervals))
    }
}

impl TryFrom<&Path> for IntervalSet {
    type Error = IntervalSetError;

    ///
    /// Create a new [IntervalSet] from a bed file.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk, optionally gzip'd.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value).map_err(|source| IntervalSetError::Io {
            path: value.to_path_buf(),
            source,
        })?;

        let set = IntervalSet::from_reader(reader).map_err(|e| e.with_path(value))?;
        log::debug!(
            "Loaded {} intervals ({} merged, {} bp) from {}",
            set.len(),
            set.merged_len(),
            set.coverage_length(),
            value.display()
        );

        Ok(set)
    }
}

impl TryFrom<&str> for IntervalSet {
    type Error = IntervalSetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        IntervalSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for IntervalSet {
    type Error = IntervalSetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        IntervalSet::try_from(value.as_path())
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        IntervalSet::new(intervals)
    }
}

impl<'a> Iterator for IntervalSetIterator<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let interval = self.interval_set.raw.get(self.index)?;
        self.index += 1;
        Some(interval)
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = IntervalSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IntervalSetIterator {
            interval_set: self,
            index: 0,
        }
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IntervalSet with {} intervals ({} bp covered).",
            self.len(),
            self.coverage_length()
        )
    }
}

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ParseError;
use crate::models::Span;

///
/// Interval struct, a validated half-open `[start, end)` region on a named chromosome.
///
/// Intervals can only be built through [Interval::new], [Interval::parse] or [FromStr],
/// so every value satisfies `end > start` and has a non-empty chromosome name.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    chr: String,
    start: u64,
    end: u64,
}

impl Interval {
    pub fn new(chr: impl Into<String>, start: u64, end: u64) -> Result<Self, ParseError> {
        let chr = chr.into();
        if chr.is_empty() {
            return Err(ParseError::EmptyChromosome);
        }
        if end <= start {
            return Err(ParseError::EmptyInterval { chr, start, end });
        }
        Ok(Interval { chr, start, end })
    }

    ///
    /// Build an interval from raw, untyped fields.
    ///
    /// # Arguments
    /// - chr: chromosome name
    /// - start: 0-based start coordinate
    /// - end: exclusive end coordinate
    pub fn parse(chr: &str, start: &str, end: &str) -> Result<Self, ParseError> {
        let start = parse_coordinate("start", start)?;
        let end = parse_coordinate("end", end)?;
        Interval::new(chr.trim(), start, end)
    }

    pub fn chr(&self) -> &str {
        &self.chr
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    pub fn width(&self) -> u64 {
        self.end - self.start
    }

    ///
    /// Get BED line of the Interval
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<u64, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingField(field));
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

impl FromStr for Interval {
    type Err = ParseError;

    /// Parse one BED record. Only the first three columns are read.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();

        let chr = fields.next().ok_or(ParseError::MissingField("chromosome"))?;
        let start = fields.next().ok_or(ParseError::MissingField("start"))?;
        let end = fields.next().ok_or(ParseError::MissingField("end"))?;

        Interval::parse(chr, start, end)
    }
}

impl TryFrom<(&str, &str, &str)> for Interval {
    type Error = ParseError;

    fn try_from((chr, start, end): (&str, &str, &str)) -> Result<Self, Self::Error> {
        Interval::parse(chr, start, end)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

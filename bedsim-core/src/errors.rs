use std::path::PathBuf;

use thiserror::Error;

/// A raw interval record that could not be turned into an [Interval](crate::models::Interval).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing {0} field")]
    MissingField(&'static str),

    #[error("Chromosome name is empty")]
    EmptyChromosome,

    #[error("Error parsing {field} position: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Not valid UTF-8")]
    InvalidEncoding,

    #[error("Interval {chr}:{start}-{end} is empty or inverted (end must be greater than start)")]
    EmptyInterval { chr: String, start: u64, end: u64 },

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Attach a 1-based line number to this error.
    pub fn at_line(self, line: usize) -> Self {
        ParseError::Line {
            line,
            source: Box::new(self),
        }
    }
}

/// Failure loading an [IntervalSet](crate::models::IntervalSet) from disk.
#[derive(Error, Debug)]
pub enum IntervalSetError {
    #[error("Can't read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Failure reading BED text from a stream, before a path is attached.
#[derive(Error, Debug)]
pub enum BedReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl BedReadError {
    pub(crate) fn with_path(self, path: &std::path::Path) -> IntervalSetError {
        let path = path.to_path_buf();
        match self {
            BedReadError::Io(source) => IntervalSetError::Io { path, source },
            BedReadError::Parse(source) => IntervalSetError::Parse { path, source },
        }
    }
}

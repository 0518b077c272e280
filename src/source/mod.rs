//! Grid providers.
//!
//! A provider turns some outside representation of an image into a
//! validated [`Grid`]. All input validation happens here: if a provider
//! returns a grid, the encoder can trust it without further checks.

mod manual;
mod pbm;

pub use manual::ManualSource;
pub use pbm::{parse_pbm, PbmSource, MAGIC};

use crate::raster::{Grid, GridError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring a grid.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Unavailable {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Reading an already open stream failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not start with the `P1` magic.
    #[error("missing \"P1\" magic header")]
    MissingMagic,
    /// The dimensions line is missing or not numeric.
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    /// A token that is not an integer.
    #[error("invalid token {0:?} (expected an integer)")]
    InvalidToken(String),
    /// Input ended before the named value was read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },
    /// Fewer pixels than the header announced.
    #[error("truncated pixel data: expected {expected} pixels, found {found}")]
    TruncatedData {
        /// width * height.
        expected: usize,
        /// Pixels present.
        found: usize,
    },
    /// Dimensions or pixel values out of range.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SourceError {
    /// True when the source itself could not be opened or read.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Trait for grid providers.
///
/// This abstraction lets the binary choose between interactive entry and
/// file parsing while the encoder stays agnostic to where a grid came from.
pub trait GridSource {
    /// Reads and validates a grid.
    fn load(&mut self) -> Result<Grid, SourceError>;

    /// Short human-readable name of the source, used in diagnostics.
    fn describe(&self) -> String;
}

/// Parses a whitespace-delimited integer token.
pub(crate) fn parse_int(token: &str) -> Result<i64, SourceError> {
    token
        .parse()
        .map_err(|_| SourceError::InvalidToken(token.to_string()))
}

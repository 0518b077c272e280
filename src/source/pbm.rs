//! Plain (ASCII) portable bitmap reader.
//!
//! Layout: the `P1` magic, a `<width> <height>` line, then `0`/`1` pixels
//! separated by whitespace in row-major order. A `#` starts a comment that
//! runs to the end of the line; blank lines are ignored.

use super::{parse_int, GridSource, SourceError};
use crate::raster::{check_dimensions, pixel_from_value, Grid};
use std::path::{Path, PathBuf};

/// Magic number of the plain PBM format.
pub const MAGIC: &str = "P1";

/// Reads a grid from a plain PBM file.
#[derive(Debug, Clone)]
pub struct PbmSource {
    path: PathBuf,
}

impl PbmSource {
    /// Creates a source for the file at `path`; nothing is read until `load`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GridSource for PbmSource {
    fn load(&mut self) -> Result<Grid, SourceError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| SourceError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        let grid = parse_pbm(&content)?;
        tracing::debug!(path = %self.path.display(), ?grid, "Loaded PBM file");
        Ok(grid)
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }
}

/// Strips the comment from a line and trims it.
fn significant(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

/// Parses plain PBM text into a grid.
///
/// ```
/// use quadtree_encoder::source::parse_pbm;
///
/// let grid = parse_pbm("P1\n# tiny\n3 1\n0 1 0\n").unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 1));
/// ```
pub fn parse_pbm(content: &str) -> Result<Grid, SourceError> {
    let mut lines = content.lines().map(significant).filter(|l| !l.is_empty());

    // The magic may share its line with the dimensions.
    let first = lines.next().ok_or(SourceError::MissingMagic)?;
    let mut first_tokens = first.split_whitespace();
    if first_tokens.next() != Some(MAGIC) {
        return Err(SourceError::MissingMagic);
    }

    let mut tokens = first_tokens.chain(lines.flat_map(str::split_whitespace));

    let mut dimension = |name: &str| -> Result<i64, SourceError> {
        let token = tokens.next().ok_or_else(|| {
            SourceError::MalformedHeader(format!("missing {name}, expected \"<width> <height>\""))
        })?;
        token.parse().map_err(|_| {
            SourceError::MalformedHeader(format!("{name} {token:?} is not an integer"))
        })
    };
    let width = dimension("width")?;
    let height = dimension("height")?;
    let (width, height) = check_dimensions(width, height)?;

    let expected = width * height;
    let mut pixels = Vec::with_capacity(expected);
    for index in 0..expected {
        let token = tokens.next().ok_or(SourceError::TruncatedData {
            expected,
            found: index,
        })?;
        pixels.push(pixel_from_value(parse_int(token)?, index, width)?);
    }

    let extra = tokens.count();
    if extra > 0 {
        tracing::warn!(extra, "Ignoring tokens after the last pixel");
    }

    Ok(Grid::new(width, height, pixels)?)
}

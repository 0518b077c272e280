//! Region uniformity test.

use crate::raster::{Grid, Region};

/// Outcome of scanning a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uniformity {
    /// Every pixel is white.
    White,
    /// Every pixel is black.
    Black,
    /// At least two pixels differ.
    Mixed,
}

/// Determines whether every pixel of `region` has the same value.
///
/// The pixel at `(row_start, col_start)` is the reference; the scan stops
/// at the first pixel that differs from it. The region must lie inside
/// the grid.
pub fn uniformity(grid: &Grid, region: Region) -> Uniformity {
    scan(grid, region).0
}

/// Like [`uniformity`], also returning how many pixels were read,
/// up to and including the first mismatch.
pub(crate) fn scan(grid: &Grid, region: Region) -> (Uniformity, usize) {
    debug_assert!(region.fits(grid), "region {region} outside grid");

    let reference = grid.pixel(region.row_start, region.col_start);
    let mut read = 0;
    for row in region.row_start..=region.row_end {
        let cells = &grid.row(row)[region.col_start..=region.col_end];
        match cells.iter().position(|&pixel| pixel != reference) {
            Some(at) => return (Uniformity::Mixed, read + at + 1),
            None => read += cells.len(),
        }
    }

    let uniform = if reference {
        Uniformity::Black
    } else {
        Uniformity::White
    };
    (uniform, read)
}

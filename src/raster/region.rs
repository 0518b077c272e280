//! Inclusive rectangular regions and their quadrant arithmetic.

use super::Grid;

/// An axis-aligned rectangle over a [`Grid`], all bounds inclusive.
///
/// Invariant: `row_start <= row_end` and `col_start <= col_end`.
/// Regions are never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// First row.
    pub row_start: usize,
    /// First column.
    pub col_start: usize,
    /// Last row (inclusive).
    pub row_end: usize,
    /// Last column (inclusive).
    pub col_end: usize,
}

impl Region {
    /// Creates a region from inclusive bounds.
    pub fn new(row_start: usize, col_start: usize, row_end: usize, col_end: usize) -> Self {
        debug_assert!(row_start <= row_end && col_start <= col_end, "empty region");
        Self {
            row_start,
            col_start,
            row_end,
            col_end,
        }
    }

    /// The region covering an entire grid.
    pub fn full(grid: &Grid) -> Self {
        Self::new(0, 0, grid.height() - 1, grid.width() - 1)
    }

    /// Number of rows in the region.
    #[inline]
    pub fn rows(&self) -> usize {
        self.row_end - self.row_start + 1
    }

    /// Number of columns in the region.
    #[inline]
    pub fn cols(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    /// Number of cells in the region.
    #[inline]
    pub fn area(&self) -> usize {
        self.rows() * self.cols()
    }

    /// True for a single-cell region.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.row_start == self.row_end && self.col_start == self.col_end
    }

    /// True if the region lies inside the grid.
    pub fn fits(&self, grid: &Grid) -> bool {
        self.row_end < grid.height() && self.col_end < grid.width()
    }

    /// First row and column of the bottom/right halves.
    ///
    /// On an odd count the extra row (column) stays in the top (left) half:
    /// `mid = start + ceil(count / 2)`.
    #[inline]
    pub fn split_point(&self) -> (usize, usize) {
        (
            self.row_start + (self.rows() + 1) / 2,
            self.col_start + (self.cols() + 1) / 2,
        )
    }

    /// The non-empty quadrants, in top-left, top-right, bottom-left,
    /// bottom-right order.
    ///
    /// A single row has no bottom half and a single column has no right
    /// half; those quadrants are skipped.
    pub fn quadrants(&self) -> impl Iterator<Item = Region> {
        let (mid_row, mid_col) = self.split_point();
        let has_bottom = mid_row <= self.row_end;
        let has_right = mid_col <= self.col_end;

        let top_left = Some(Region::new(
            self.row_start,
            self.col_start,
            mid_row - 1,
            mid_col - 1,
        ));
        let top_right =
            has_right.then(|| Region::new(self.row_start, mid_col, mid_row - 1, self.col_end));
        let bottom_left =
            has_bottom.then(|| Region::new(mid_row, self.col_start, self.row_end, mid_col - 1));
        let bottom_right = (has_bottom && has_right)
            .then(|| Region::new(mid_row, mid_col, self.row_end, self.col_end));

        [top_left, top_right, bottom_left, bottom_right]
            .into_iter()
            .flatten()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..={}]x[{}..={}]",
            self.row_start, self.row_end, self.col_start, self.col_end
        )
    }
}

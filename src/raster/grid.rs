//! Grid type holding the pixels of a two-color image.

/// Maximum number of rows accepted by any grid provider.
pub const MAX_HEIGHT: usize = 768;

/// Maximum number of columns accepted by any grid provider.
pub const MAX_WIDTH: usize = 1024;

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height outside the supported range.
    #[error("invalid dimensions {width}x{height} (width must be 1-1024, height 1-768)")]
    InvalidDimensions {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// A pixel value other than 0 or 1.
    #[error("invalid pixel {value} at row {row}, column {col} (use 0 or 1)")]
    InvalidPixel {
        /// Value found.
        value: i64,
        /// Row of the pixel.
        row: usize,
        /// Column of the pixel.
        col: usize,
    },

    /// Pixel buffer does not match width * height.
    #[error("expected {expected} pixels, got {actual}")]
    PixelCountMismatch {
        /// width * height.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },

    /// A row shorter or longer than the first one.
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

/// Checks that a parsed width and height fall within the supported range.
///
/// Returns the dimensions as `(width, height)` when valid.
pub(crate) fn check_dimensions(width: i64, height: i64) -> Result<(usize, usize), GridError> {
    let in_range = |value: i64, max: usize| value >= 1 && value <= max as i64;
    if !in_range(width, MAX_WIDTH) || !in_range(height, MAX_HEIGHT) {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok((width as usize, height as usize))
}

/// Converts a parsed integer into a pixel value.
///
/// `index` is the row-major position of the pixel in a grid of the given
/// `width`; it is only used to locate the pixel in the error.
pub fn pixel_from_value(value: i64, index: usize, width: usize) -> Result<bool, GridError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(GridError::InvalidPixel {
            value,
            row: index / width.max(1),
            col: index % width.max(1),
        }),
    }
}

/// A rectangular two-color image.
///
/// `false` is white, `true` is black. Pixels are stored row-major.
/// A grid is immutable once built and always satisfies
/// `1 <= height <= MAX_HEIGHT` and `1 <= width <= MAX_WIDTH`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pixels: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid from row-major pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<bool>) -> Result<Self, GridError> {
        let (width, height) = check_dimensions(width as i64, height as i64)?;
        if pixels.len() != width * height {
            return Err(GridError::PixelCountMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Creates a grid from rows of `0`/`1` values.
    ///
    /// ```
    /// use quadtree_encoder::Grid;
    ///
    /// let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
    /// assert_eq!(grid.width(), 2);
    /// assert!(grid.pixel(0, 1));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let (width, height) = check_dimensions(width as i64, height as i64)?;

        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            for &value in values {
                pixels.push(pixel_from_value(value as i64, pixels.len(), width)?);
            }
        }

        Self::new(width, height, pixels)
    }

    /// Returns the grid width (columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height (rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at `(row, col)`.
    ///
    /// Panics if either coordinate is outside the grid.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        assert!(col < self.width, "column {col} out of bounds");
        self.pixels[row * self.width + col]
    }

    /// Returns one row of pixels.
    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Returns all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Returns the total number of pixels (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Counts the black pixels.
    pub fn black_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("black", &self.black_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 2, vec![false, true, false, true, true, true]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_count(), 6);
        assert_eq!(grid.black_count(), 4);
        assert_eq!(grid.row(1), &[true, true, true]);
        assert!(!grid.pixel(0, 2));
    }

    #[test]
    #[should_panic(expected = "column 2 out of bounds")]
    fn test_pixel_column_out_of_bounds() {
        let grid = Grid::new(2, 2, vec![false, false, true, true]).unwrap();
        grid.pixel(0, 2);
    }

    #[test]
    fn test_pixel_count_mismatch() {
        assert_eq!(
            Grid::new(2, 2, vec![false; 3]),
            Err(GridError::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_dimension_limits() {
        assert!(Grid::new(MAX_WIDTH, MAX_HEIGHT, vec![false; MAX_WIDTH * MAX_HEIGHT]).is_ok());
        assert!(matches!(
            Grid::new(MAX_WIDTH + 1, 1, vec![false; MAX_WIDTH + 1]),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(1, MAX_HEIGHT + 1, vec![false; MAX_HEIGHT + 1]),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(0, 0, Vec::new()),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_bad_pixel() {
        assert_eq!(
            Grid::from_rows(&[[0u8, 1], [2, 0]]),
            Err(GridError::InvalidPixel {
                value: 2,
                row: 1,
                col: 0
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1]];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_pixel_from_value_locates_error() {
        assert_eq!(pixel_from_value(1, 7, 3), Ok(true));
        assert_eq!(
            pixel_from_value(-1, 7, 3),
            Err(GridError::InvalidPixel {
                value: -1,
                row: 2,
                col: 1
            })
        );
    }
}

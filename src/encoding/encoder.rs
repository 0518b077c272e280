//! Recursive region encoder and the whole-image entry point.

use super::symbol::{Symbol, SymbolStream};
use super::uniformity::{scan, Uniformity};
use crate::raster::{Grid, Region};

/// Cumulative statistics over every image an [`Encoder`] has processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Images encoded.
    pub images: u64,
    /// `SPLIT` symbols emitted.
    pub splits: u64,
    /// `WHITE` leaves emitted.
    pub white_leaves: u64,
    /// `BLACK` leaves emitted.
    pub black_leaves: u64,
    /// Pixels read by uniformity tests, including scans that stop early.
    pub cells_scanned: u64,
    /// Deepest recursion level reached (the root is level 1).
    pub max_depth: u32,
    /// Length of the most recent stream.
    pub last_stream_len: usize,
}

impl EncodeStats {
    /// Total symbols emitted.
    pub fn symbols(&self) -> u64 {
        self.splits + self.white_leaves + self.black_leaves
    }
}

/// Quadtree encoder.
///
/// Holds no per-image state between calls; only statistics accumulate.
#[derive(Debug, Default)]
pub struct Encoder {
    stats: EncodeStats,
}

impl Encoder {
    /// Creates an encoder with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes the whole grid, rows `0..=H-1` and columns `0..=W-1`.
    pub fn encode(&mut self, grid: &Grid) -> SymbolStream {
        let mut stream = SymbolStream::new();
        self.encode_region(grid, Region::full(grid), 1, &mut stream);

        self.stats.images += 1;
        self.stats.last_stream_len = stream.len();

        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            symbols = stream.len(),
            "Encoded image"
        );
        stream
    }

    /// Appends the encoding of `region` to `out`.
    fn encode_region(&mut self, grid: &Grid, region: Region, depth: u32, out: &mut SymbolStream) {
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let (result, read) = scan(grid, region);
        self.stats.cells_scanned += read as u64;
        tracing::trace!(%region, depth, ?result, read, "Region scanned");

        match result {
            Uniformity::White => {
                self.stats.white_leaves += 1;
                out.push(Symbol::White);
            }
            Uniformity::Black => {
                self.stats.black_leaves += 1;
                out.push(Symbol::Black);
            }
            Uniformity::Mixed => {
                self.stats.splits += 1;
                out.push(Symbol::Split);
                for quadrant in region.quadrants() {
                    self.encode_region(grid, quadrant, depth + 1, out);
                }
            }
        }
    }

    /// Returns the accumulated statistics.
    pub fn stats(&self) -> &EncodeStats {
        &self.stats
    }

    /// Clears the accumulated statistics.
    pub fn reset(&mut self) {
        self.stats = EncodeStats::default();
    }
}

/// Encodes a grid with a throwaway [`Encoder`].
///
/// ```
/// use quadtree_encoder::{encode, Grid};
///
/// let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
/// assert_eq!(encode(&grid).to_string(), "XBPPB");
/// ```
pub fn encode(grid: &Grid) -> SymbolStream {
    Encoder::new().encode(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(rows: &[Vec<u8>]) -> String {
        encode(&Grid::from_rows(rows).unwrap()).to_string()
    }

    #[test]
    fn test_uniform_white() {
        assert_eq!(encoded(&[vec![0, 0], vec![0, 0]]), "B");
    }

    #[test]
    fn test_uniform_black() {
        let grid = Grid::new(7, 5, vec![true; 35]).unwrap();
        assert_eq!(encode(&grid).to_string(), "P");
    }

    #[test]
    fn test_checkerboard_2x2() {
        assert_eq!(encoded(&[vec![0, 1], vec![1, 0]]), "XBPPB");
    }

    #[test]
    fn test_single_row_odd_width() {
        // left half gets the extra column: [0,1] | [0]
        assert_eq!(encoded(&[vec![0, 1, 0]]), "XXBPB");
    }

    #[test]
    fn test_single_column_odd_height() {
        assert_eq!(encoded(&[vec![1], vec![0], vec![0]]), "XXPBB");
    }

    #[test]
    fn test_3x3_quadrants() {
        // TL rows 0-1 cols 0-1, TR rows 0-1 col 2, BL row 2 cols 0-1, BR (2,2)
        let rows = [vec![1, 1, 0], vec![1, 1, 0], vec![0, 1, 1]];
        assert_eq!(encoded(&rows), "XPBXBPP");
    }

    #[test]
    fn test_single_pixel() {
        assert_eq!(encoded(&[vec![1]]), "P");
        assert_eq!(encoded(&[vec![0]]), "B");
    }

    #[test]
    fn test_idempotent() {
        let rows = [vec![0, 1, 1, 0, 1], vec![1, 1, 0, 0, 0], vec![0, 0, 0, 1, 1]];
        let grid = Grid::from_rows(&rows).unwrap();
        let mut encoder = Encoder::new();
        let first = encoder.encode(&grid);
        let second = encoder.encode(&grid);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_stats_accumulate() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let mut encoder = Encoder::new();
        encoder.encode(&grid);
        encoder.encode(&grid);

        let stats = encoder.stats();
        assert_eq!(stats.images, 2);
        assert_eq!(stats.splits, 2);
        assert_eq!(stats.white_leaves, 4);
        assert_eq!(stats.black_leaves, 4);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.last_stream_len, 5);
        assert_eq!(stats.symbols(), 10);
        // root scan stops at (0,1) after 2 reads, then 4 unit leaves
        assert_eq!(stats.cells_scanned, 12);

        encoder.reset();
        assert_eq!(encoder.stats(), &EncodeStats::default());
    }
}

//! Binary raster images and the rectangular regions inside them.
//!
//! A [`Grid`] is the validated two-color image handed to the encoder.
//! A [`Region`] is an inclusive rectangle over a grid, used as the
//! recursion parameter of the quadtree decomposition.

mod grid;
mod region;

pub(crate) use grid::check_dimensions;
pub use grid::{pixel_from_value, Grid, GridError, MAX_HEIGHT, MAX_WIDTH};
pub use region::Region;

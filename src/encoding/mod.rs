//! Quadtree encoding of binary rasters.
//!
//! Uniform regions become a single `WHITE`/`BLACK` symbol; mixed regions
//! emit `SPLIT` and recurse into their quadrants in top-left, top-right,
//! bottom-left, bottom-right order. The result is a pre-order
//! [`SymbolStream`].

mod encoder;
mod symbol;
mod uniformity;

pub use encoder::{encode, EncodeStats, Encoder};
pub use symbol::{Symbol, SymbolAlphabet, SymbolCounts, SymbolStream};
pub use uniformity::{uniformity, Uniformity};

//! Quadtree Encoder Library
//!
//! Encodes binary (two-color) raster images as a compact string using
//! quadtree decomposition: a uniform region is a single symbol, a mixed
//! region is a split marker followed by the encodings of its four
//! quadrants.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! source (manual entry | PBM file) → raster::Grid → encoding → SymbolStream
//!                                                      ↓
//!                                                   metrics
//! ```
//!
//! Providers in [`source`] validate everything; the encoder trusts any
//! [`Grid`] it is given and has no error path.
//!
//! # Example
//!
//! ```
//! use quadtree_encoder::{encode, source::parse_pbm};
//!
//! let grid = parse_pbm("P1\n3 1\n0 1 0\n").unwrap();
//! assert_eq!(encode(&grid).to_string(), "XXBPB");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod encoding;
pub mod metrics;
pub mod raster;
pub mod source;

// Re-export commonly used types at crate root
pub use config::FileConfig;
pub use encoding::{encode, EncodeStats, Encoder, Symbol, SymbolAlphabet, SymbolStream};
pub use raster::{Grid, GridError, Region};
pub use source::{GridSource, ManualSource, PbmSource, SourceError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Prometheus metrics for quadtree encoding.
//!
//! # Metrics Exposed
//!
//! - `quadtree_images_encoded_total` - Images encoded
//! - `quadtree_split_symbols_total` - `SPLIT` symbols emitted
//! - `quadtree_white_leaves_total` - `WHITE` leaves emitted
//! - `quadtree_black_leaves_total` - `BLACK` leaves emitted
//! - `quadtree_cells_scanned_total` - Pixels read by uniformity scans
//! - `quadtree_max_depth` - Deepest recursion level reached
//! - `quadtree_last_stream_length` - Symbols in the most recent encoding
//!
//! # Example
//!
//! ```
//! use quadtree_encoder::{metrics::MetricsRegistry, Encoder, Grid};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let mut encoder = Encoder::new();
//! encoder.encode(&Grid::from_rows(&[[0u8, 1], [1, 1]]).unwrap());
//!
//! registry.update(encoder.stats());
//! assert!(registry.encode().unwrap().contains("quadtree_images_encoded_total 1"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};

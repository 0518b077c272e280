//! Metrics collection and registry.

use crate::encoding::EncodeStats;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metric creation, registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for encoder statistics.
pub struct MetricsRegistry {
    registry: Registry,

    images_encoded: IntCounter,
    split_symbols: IntCounter,
    white_leaves: IntCounter,
    black_leaves: IntCounter,
    cells_scanned: IntCounter,

    max_depth: IntGauge,
    last_stream_length: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all encoder metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let images_encoded =
            IntCounter::new("quadtree_images_encoded_total", "Total images encoded")?;
        let split_symbols = IntCounter::new(
            "quadtree_split_symbols_total",
            "Total SPLIT symbols emitted for mixed regions",
        )?;
        let white_leaves = IntCounter::new(
            "quadtree_white_leaves_total",
            "Total WHITE symbols emitted for uniform white regions",
        )?;
        let black_leaves = IntCounter::new(
            "quadtree_black_leaves_total",
            "Total BLACK symbols emitted for uniform black regions",
        )?;
        let cells_scanned = IntCounter::new(
            "quadtree_cells_scanned_total",
            "Total pixels read by uniformity scans, including early-stopped ones",
        )?;
        let max_depth = IntGauge::new(
            "quadtree_max_depth",
            "Deepest recursion level reached (root is 1)",
        )?;
        let last_stream_length = IntGauge::new(
            "quadtree_last_stream_length",
            "Number of symbols in the most recent encoding",
        )?;

        registry.register(Box::new(images_encoded.clone()))?;
        registry.register(Box::new(split_symbols.clone()))?;
        registry.register(Box::new(white_leaves.clone()))?;
        registry.register(Box::new(black_leaves.clone()))?;
        registry.register(Box::new(cells_scanned.clone()))?;
        registry.register(Box::new(max_depth.clone()))?;
        registry.register(Box::new(last_stream_length.clone()))?;

        Ok(Self {
            registry,
            images_encoded,
            split_symbols,
            white_leaves,
            black_leaves,
            cells_scanned,
            max_depth,
            last_stream_length,
        })
    }

    /// Updates all metrics from cumulative encoder statistics.
    pub fn update(&self, stats: &EncodeStats) {
        // Counters only move forward: add the difference
        advance(&self.images_encoded, stats.images);
        advance(&self.split_symbols, stats.splits);
        advance(&self.white_leaves, stats.white_leaves);
        advance(&self.black_leaves, stats.black_leaves);
        advance(&self.cells_scanned, stats.cells_scanned);

        self.max_depth.set(i64::from(stats.max_depth));
        self.last_stream_length.set(stats.last_stream_len as i64);
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}

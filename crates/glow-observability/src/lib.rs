//! Observability for GlowCommerce tools.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context
//! - `MetricsCollector` / `QueryMetrics` - Catalog query timings and cache counters

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export SessionId for convenience
pub use glow_commerce::SessionId;

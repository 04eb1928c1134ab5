//! Catalog query timing metrics.

use std::time::{Duration, Instant};

use glow_commerce::search::CacheStats;
use glow_commerce::SessionId;
use serde::{Deserialize, Serialize};

/// Timing for a single catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTiming {
    /// What was queried, e.g. the CLI command.
    pub label: String,
    /// Number of products returned.
    pub matched: usize,
    /// Query duration (microseconds).
    pub duration_us: u64,
}

/// Metrics for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Session ID for correlation.
    pub session_id: String,
    pub queries: Vec<QueryTiming>,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Total session duration (microseconds).
    pub total_duration_us: u64,
}

/// Collector for query metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    session_id: SessionId,
    start: Instant,
    queries: Vec<QueryTiming>,
    cache: CacheStats,
}

impl MetricsCollector {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            start: Instant::now(),
            queries: Vec::new(),
            cache: CacheStats::default(),
        }
    }

    /// Record a finished query.
    pub fn record_query(&mut self, label: &str, matched: usize, duration: Duration) {
        self.queries.push(QueryTiming {
            label: label.to_string(),
            matched,
            duration_us: duration.as_micros() as u64,
        });
    }

    /// Run `f`, recording how long it took and how many products it matched.
    pub fn time<T>(&mut self, label: &str, f: impl FnOnce() -> T, matched: impl Fn(&T) -> usize) -> T {
        let started = Instant::now();
        let value = f();
        self.record_query(label, matched(&value), started.elapsed());
        value
    }

    /// Replace the cache counters with the latest snapshot.
    pub fn record_cache(&mut self, stats: CacheStats) {
        self.cache = stats;
    }

    pub fn query_count(&self) -> usize {
        self.queries.len()
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Finalize and return the metrics.
    pub fn finalize(self) -> QueryMetrics {
        let total_duration_us = self.start.elapsed().as_micros() as u64;
        tracing::debug!(
            queries = self.queries.len(),
            cache_hits = self.cache.hits,
            "metrics finalized"
        );
        QueryMetrics {
            session_id: self.session_id.to_string(),
            queries: self.queries,
            cache_hits: self.cache.hits,
            cache_misses: self.cache.misses,
            total_duration_us,
        }
    }
}

impl QueryMetrics {
    /// Fraction of cache lookups served without recomputing.
    pub fn hit_rate(&self) -> Option<f64> {
        let lookups = self.cache_hits + self.cache_misses;
        (lookups > 0).then(|| self.cache_hits as f64 / lookups as f64)
    }

    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as JSON (pretty printed).
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = vec![format!("Session: {}", self.session_id)];

        if !self.queries.is_empty() {
            lines.push("  Queries:".to_string());
            for q in &self.queries {
                lines.push(format!(
                    "    {}: {} matched in {}us ({:.2}ms)",
                    q.label,
                    q.matched,
                    q.duration_us,
                    q.duration_us as f64 / 1000.0
                ));
            }
        }

        if let Some(rate) = self.hit_rate() {
            lines.push(format!(
                "  Cache: {} hits, {} misses ({:.0}% hit rate)",
                self.cache_hits,
                self.cache_misses,
                rate * 100.0
            ));
        }

        lines.join("\n")
    }
}

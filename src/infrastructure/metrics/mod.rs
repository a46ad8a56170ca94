//! Prometheus metrics for the renderer.
//!
//! This module provides:
//! - Render metrics (documents built, outcome, duration)
//! - Template lookup metrics (hits and misses against the template source)

mod helpers;

pub use helpers::{encode_metrics, RenderMetrics, TemplateMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "mail_composer";

lazy_static! {
    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Documents built, by outcome
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total documents built",
        &["outcome"]
    ).unwrap();

    /// Time spent building a whole document
    pub static ref RENDER_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Document build duration in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]
    ).unwrap();

    // ============================================================================
    // Template Metrics
    // ============================================================================

    /// Template lookups, by outcome
    pub static ref TEMPLATE_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_template_lookups_total", METRIC_PREFIX),
        "Total template lookups",
        &["outcome"]
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registered() {
        RenderMetrics::record_success(0.001);
        TemplateMetrics::record_hit();

        let output = encode_metrics().unwrap();
        assert!(output.contains("mail_composer_renders_total"));
        assert!(output.contains("mail_composer_render_duration_seconds"));
        assert!(output.contains("mail_composer_template_lookups_total"));
    }
}

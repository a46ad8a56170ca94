//! Metrics helper structs for convenient metric recording

use prometheus::{Encoder, TextEncoder};

use super::{RENDERS_TOTAL, RENDER_DURATION_SECONDS, TEMPLATE_LOOKUPS_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording document build metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a completed build
    pub fn record_success(duration_secs: f64) {
        RENDERS_TOTAL.with_label_values(&["success"]).inc();
        RENDER_DURATION_SECONDS.observe(duration_secs);
    }

    /// Record a build aborted by an error
    pub fn record_failure(duration_secs: f64) {
        RENDERS_TOTAL.with_label_values(&["failure"]).inc();
        RENDER_DURATION_SECONDS.observe(duration_secs);
    }
}

/// Helper struct for recording template lookup metrics
pub struct TemplateMetrics;

impl TemplateMetrics {
    /// Record a resolved template
    pub fn record_hit() {
        TEMPLATE_LOOKUPS_TOTAL.with_label_values(&["hit"]).inc();
    }

    /// Record a template that was not registered
    pub fn record_miss() {
        TEMPLATE_LOOKUPS_TOTAL.with_label_values(&["miss"]).inc();
    }
}

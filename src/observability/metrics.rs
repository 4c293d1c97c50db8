//! Metrics collection and exposition.
//!
//! # Metrics
//! - `spa_page_renders_total` (counter): rendered documents by page, status
//! - `spa_render_duration_seconds` (histogram): time to resolve and render
//! - `spa_route_table_reloads_total` (counter): config reloads by outcome

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::pages::Page;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one rendered document.
pub fn record_render(page: Page, status: u16, start: Instant) {
    counter!(
        "spa_page_renders_total",
        "page" => page.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("spa_render_duration_seconds", "page" => page.as_str())
        .record(start.elapsed().as_secs_f64());
}

/// Record a route table reload attempt (`applied` or `rejected`).
pub fn record_reload(outcome: &'static str) {
    counter!("spa_route_table_reloads_total", "outcome" => outcome).increment(1);
}

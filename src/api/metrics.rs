use actix_web::{HttpResponse, Responder};

use crate::metrics::METRICS;

/// Prometheus 指标导出
pub async fn get_metrics() -> impl Responder {
    METRICS.record_request("metrics");

    // 渲染 Prometheus metrics
    match METRICS.render() {
        Ok(metrics_text) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(metrics_text),
        Err(e) => {
            log::error!("Failed to render metrics: {}", e);
            HttpResponse::InternalServerError().body("Failed to render metrics")
        }
    }
}

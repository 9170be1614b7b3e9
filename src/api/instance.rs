use actix_web::{web, HttpResponse, Responder};

use crate::metrics::METRICS;
use crate::models::MemoryUsage;
use crate::services::MemoryCollector;
use crate::state::{iso_timestamp, Instance};

/// 根端点：服务说明与端点清单
pub async fn index(instance: web::Data<Instance>) -> impl Responder {
    METRICS.record_request("index");

    HttpResponse::Ok().json(serde_json::json!({
        "message": "Scaling Probe",
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "endpoints": [
            "/health - Health check",
            "/info - Instance information",
            "/compute - CPU intensive task",
            "/data/{id} - Simulated database query",
            "/batch - Batch processing",
            "/stress - Stress testing endpoint",
            "/metrics - Prometheus metrics"
        ],
        "timestamp": iso_timestamp()
    }))
}

/// 基本信息端点：身份、端口、平台与内存快照
pub async fn info(
    instance: web::Data<Instance>,
    collector: web::Data<MemoryCollector>,
) -> impl Responder {
    METRICS.record_request("info");

    let memory_usage = collector.snapshot().unwrap_or_else(MemoryUsage::empty);

    HttpResponse::Ok().json(serde_json::json!({
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "port": instance.port,
        "version": env!("CARGO_PKG_VERSION"),
        "platform": std::env::consts::OS,
        "memoryUsage": memory_usage,
        "timestamp": iso_timestamp()
    }))
}

pub mod compute;
pub mod data;
pub mod instance;
pub mod metrics;

pub use compute::{compute, stress};
pub use data::{get_data, process_batch};
pub use instance::{index, info};
pub use metrics::get_metrics;

use actix_web::{web, HttpResponse, Responder};

use crate::metrics::METRICS;
use crate::state::{iso_timestamp, Instance};

/// 健康检查端点：无延迟，永不失败
pub async fn health(instance: web::Data<Instance>) -> impl Responder {
    METRICS.record_request("health");

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "timestamp": iso_timestamp(),
        "uptime": instance.uptime_secs()
    }))
}

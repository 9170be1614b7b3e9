use actix_web::{web, HttpResponse, Responder};

use crate::metrics::METRICS;
use crate::models::{ComputeRequest, StressLevel, StressParams};
use crate::services::{timed_burn, Waveform};
use crate::state::{iso_timestamp, Instance};

/// 模拟计算密集型任务
///
/// 循环放到阻塞线程池上执行，HTTP worker 继续接收新请求；
/// 迭代次数不设上限，超大请求会一直算到结束。
pub async fn compute(
    instance: web::Data<Instance>,
    body: Option<web::Json<ComputeRequest>>,
) -> impl Responder {
    METRICS.record_request("compute");

    // 无请求体或解析失败时按默认值处理
    let req = body.map(web::Json::into_inner).unwrap_or_default();
    let iterations = req.iterations;

    let outcome = web::block(move || timed_burn(iterations, Waveform::Sin)).await;

    let (result, duration) = match outcome {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Failed to run compute workload: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Workload execution failed"
            }));
        }
    };

    METRICS.record_workload("compute", iterations);

    HttpResponse::Ok().json(serde_json::json!({
        "result": result,
        "iterations": iterations,
        "duration": duration,
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "timestamp": iso_timestamp()
    }))
}

/// 压力测试端点：与 /compute 同形的负载，按等级选定迭代次数
pub async fn stress(
    instance: web::Data<Instance>,
    query: web::Query<StressParams>,
) -> impl Responder {
    METRICS.record_request("stress");

    // 等级原样回显；无法识别的取值按 medium 的迭代次数执行
    let level = query
        .into_inner()
        .level
        .unwrap_or_else(|| "medium".to_string());
    let iterations = StressLevel::parse(&level).iterations();

    let outcome = web::block(move || timed_burn(iterations, Waveform::Cos)).await;

    let (result, duration) = match outcome {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Failed to run stress workload: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Workload execution failed"
            }));
        }
    };

    METRICS.record_workload("stress", iterations);

    HttpResponse::Ok().json(serde_json::json!({
        "stressLevel": level,
        "iterations": iterations,
        "result": result,
        "duration": duration,
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "timestamp": iso_timestamp()
    }))
}

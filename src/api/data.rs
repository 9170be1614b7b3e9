use actix_web::{web, HttpResponse, Responder};
use rand::{rng, Rng};
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::metrics::METRICS;
use crate::models::{BatchItem, BatchResult};
use crate::state::{iso_timestamp, Instance};

#[derive(Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub items: Vec<BatchItem>,
}

/// 模拟数据库查询：50-150ms 随机延迟后返回伪造数据
///
/// 延迟走异步定时器，不阻塞其他在途请求。
pub async fn get_data(
    instance: web::Data<Instance>,
    path: web::Path<String>,
) -> impl Responder {
    METRICS.record_request("data");

    let id = path.into_inner();

    // 模拟数据库延迟
    let delay_ms: u64 = rng().random_range(50..150);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    HttpResponse::Ok().json(serde_json::json!({
        "id": id,
        "data": format!("Sample data for ID {}", id),
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "timestamp": iso_timestamp()
    }))
}

/// 批量数据处理：同步、保序、逐条翻倍
pub async fn process_batch(
    instance: web::Data<Instance>,
    body: Option<web::Json<BatchRequest>>,
) -> impl Responder {
    METRICS.record_request("batch");

    let items = body.map(|json| json.into_inner().items).unwrap_or_default();

    if items.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No items provided"
        }));
    }

    let total_items = items.len();
    let start = Instant::now();

    let results: Vec<BatchResult> = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.process(index, &instance.id))
        .collect();

    let duration = start.elapsed().as_millis() as u64;

    HttpResponse::Ok().json(serde_json::json!({
        "results": results,
        "totalItems": total_items,
        "duration": duration,
        "instanceId": instance.id,
        "hostname": instance.hostname,
        "timestamp": iso_timestamp()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_data_echoes_id_after_delay() {
        let instance = web::Data::new(Instance::new(3000));
        let app = test::init_service(
            App::new()
                .app_data(instance.clone())
                .route("/data/{id}", web::get().to(get_data)),
        )
        .await;

        let started = Instant::now();
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/data/42").to_request(),
        )
        .await;
        let elapsed = started.elapsed();

        assert!(resp.status().is_success());
        // 上界取决于调度时机，只校验下界
        assert!(elapsed >= Duration::from_millis(50));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], "42");
        assert_eq!(body["data"], "Sample data for ID 42");
        assert_eq!(body["instanceId"], instance.id.as_str());
    }

    #[actix_web::test]
    async fn test_batch_empty_items_is_bad_request() {
        let instance = web::Data::new(Instance::new(3000));
        let app = test::init_service(
            App::new()
                .app_data(instance)
                .route("/batch", web::post().to(process_batch)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/batch")
            .set_json(serde_json::json!({ "items": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No items provided");
    }

    #[actix_web::test]
    async fn test_batch_without_body_is_bad_request() {
        let instance = web::Data::new(Instance::new(3000));
        let app = test::init_service(
            App::new()
                .app_data(instance)
                .route("/batch", web::post().to(process_batch)),
        )
        .await;

        let req = test::TestRequest::post().uri("/batch").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_batch_doubles_values_and_defaults_ids() {
        let instance = web::Data::new(Instance::new(3000));
        let app = test::init_service(
            App::new()
                .app_data(instance.clone())
                .route("/batch", web::post().to(process_batch)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/batch")
            .set_json(serde_json::json!({
                "items": [{ "id": "a", "value": 3 }, { "value": 5 }]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalItems"], 2);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);

        assert_eq!(results[0]["id"], "a");
        assert_eq!(results[0]["processed"], true);
        assert_eq!(results[0]["value"], 6.0);
        assert_eq!(results[0]["instanceId"], instance.id.as_str());

        // 第二个条目缺省 id，回退为位置下标
        assert_eq!(results[1]["id"], 1);
        assert_eq!(results[1]["value"], 10.0);
    }

    #[actix_web::test]
    async fn test_batch_missing_value_becomes_null() {
        let instance = web::Data::new(Instance::new(3000));
        let app = test::init_service(
            App::new()
                .app_data(instance)
                .route("/batch", web::post().to(process_batch)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/batch")
            .set_json(serde_json::json!({ "items": [{ "id": "x" }] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["id"], "x");
        assert_eq!(results[0]["value"], Value::Null);
        assert_eq!(results[0]["processed"], true);
    }
}

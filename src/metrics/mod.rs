use prometheus::{
    Encoder, Gauge, CounterVec, Opts, Registry, TextEncoder,
    register_gauge_with_registry, register_counter_vec_with_registry,
};
use lazy_static::lazy_static;
use std::sync::Arc;

pub struct MetricsRegistry {
    registry: Registry,

    // Counter metrics
    pub http_requests: CounterVec,
    pub workload_iterations: CounterVec,

    // Gauge metrics
    pub start_time: Gauge,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_requests = register_counter_vec_with_registry!(
            Opts::new("probe_http_requests_total", "HTTP requests handled by this instance"),
            &["endpoint"],
            registry
        ).unwrap();

        let workload_iterations = register_counter_vec_with_registry!(
            Opts::new("probe_workload_iterations_total", "Synthetic workload iterations executed by this instance"),
            &["kind"],
            registry
        ).unwrap();

        let start_time = register_gauge_with_registry!(
            Opts::new("probe_start_time_seconds", "Unix timestamp when this instance started"),
            registry
        ).unwrap();

        Self {
            registry,
            http_requests,
            workload_iterations,
            start_time,
        }
    }

    /// 记录一次请求，负载均衡测试按端点核对各实例的分布
    pub fn record_request(&self, endpoint: &str) {
        self.http_requests.with_label_values(&[endpoint]).inc();
    }

    /// 记录一次合成负载执行
    pub fn record_workload(&self, kind: &str, iterations: u64) {
        self.workload_iterations
            .with_label_values(&[kind])
            .inc_by(iterations as f64);
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

lazy_static! {
    pub static ref METRICS: Arc<MetricsRegistry> = Arc::new(MetricsRegistry::new());
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;

mod models;
mod services;
mod state;
mod api;
mod cli;
mod metrics;

use api::{compute, get_data, get_metrics, health, index, info, process_batch, stress};
use cli::CommandArgs;
use metrics::METRICS;
use services::MemoryCollector;
use state::Instance;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);

    // 实例标识：启动时生成一次，注入所有 handler
    let instance = web::Data::new(Instance::new(args.port));
    let collector = web::Data::new(MemoryCollector::new());

    METRICS.start_time.set(chrono::Utc::now().timestamp() as f64);

    print_banner(&args);

    log::info!("📊 Instance ID: {}", instance.id);
    log::info!("🖥️  Hostname: {}", instance.hostname);
    log::info!("⏰ Started at: {}", state::iso_timestamp());

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(instance.clone())
            .app_data(collector.clone())
            .route("/", web::get().to(index))
            .route("/health", web::get().to(health))
            .route("/info", web::get().to(info))
            .route("/compute", web::post().to(compute))
            .route("/data/{id}", web::get().to(get_data))
            .route("/batch", web::post().to(process_batch))
            .route("/stress", web::get().to(stress))
            .route("/metrics", web::get().to(get_metrics))
    })
        .bind(&bind_address)?
        .run()
        .await?;

    // HttpServer 默认监听 SIGINT/SIGTERM，run() 返回即已停止接收新连接
    log::info!("🛑 Shutdown signal received, exiting gracefully");

    Ok(())
}

fn print_banner(args: &CommandArgs) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Scaling Probe v0.1.0                                 ║");
    println!("║      Horizontal Scaling Test Target                       ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    /                - Service overview");
    println!("  GET    /health          - Health check");
    println!("  GET    /info            - Instance information");
    println!("  POST   /compute         - CPU intensive task");
    println!("  GET    /data/{{id}}       - Simulated database query");
    println!("  POST   /batch           - Batch processing");
    println!("  GET    /stress          - Stress testing endpoint");
    println!("  GET    /metrics         - Prometheus metrics");
    println!();
    println!("💡 Features:");
    println!("  • Stable per-instance identity in every response");
    println!("  • Synthetic CPU and I/O workload simulation");
    println!("  • Prometheus metrics export");
    println!("═══════════════════════════════════════════════════════════");
}

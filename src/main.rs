use product_api::{build_router, build_state, config, infrastructure::Logger};
use std::{env, path::PathBuf};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let config_path = match args.get(1).map(String::as_str) {
        None => None,
        Some("--config") => match args.get(2) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                print_usage();
                return Err("--config 需要指定文件路径".into());
            }
        },
        Some(_) => {
            print_usage();
            return Ok(());
        }
    };

    let config = config::load_config(config_path)?;
    Logger::init(&config.logging.level);

    info!("启动产品 CRUD 服务...");

    let state = build_state(&config);
    info!(
        "✅ 已载入 {} 个产品",
        state.product_service.len()?
    );

    let app = build_router(state, &config.http);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("无法绑定到 {}: {}", addr, e);
        e
    })?;

    let prefix = &config.http.route_prefix;
    info!("🚀 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    {}/products      - 获取所有产品", prefix);
    info!("   GET    {}/products/:id  - 获取特定产品", prefix);
    info!("   POST   {}/products      - 创建新产品", prefix);
    info!("   PUT    {}/products/:id  - 更新产品", prefix);
    info!("   DELETE {}/products/:id  - 删除产品", prefix);
    info!("   GET    /health          - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("监听 Ctrl-C 失败: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("监听 SIGTERM 失败: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，正在关闭...");
}

fn print_usage() {
    println!("用法: product_api [--config <path>]");
    println!();
    println!("配置文件查找顺序:");
    println!("  1. --config 指定的路径");
    println!("  2. 环境变量 {}", config::CONFIG_ENV);
    println!("  3. ./config.toml");
    println!("  4. ./config/config.toml");
    println!("  都不存在时使用默认配置");
}

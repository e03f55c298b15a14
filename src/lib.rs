//! # 内存产品 CRUD 服务
//!
//! 在进程内存中维护一组产品记录，通过 HTTP 提供列表、查询、创建、更新、删除五个接口。
//! 数据不做持久化，重启后恢复为预置的两条记录。
//!
//! - `app`：产品处理器、内存仓库与健康检查
//! - `core`：统一错误处理与中间件
//! - `config`：TOML 配置加载与验证
//! - `infrastructure`：日志初始化

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::{request_id_middleware, request_logging_middleware};

pub use app::products::{Product, ProductInput, ProductService};
pub use app::AppState;
pub use config::{Config, ConfigError, HttpConfig};
pub use crate::core::error::CoreError;

/// 组装完整的应用路由
///
/// 产品路由挂载在 `config.route_prefix` 下，`/health` 不带前缀。
pub fn build_router(state: AppState, config: &HttpConfig) -> Router {
    Router::new()
        .nest(&config.route_prefix, app::products::handler::routes())
        .route("/health", get(app::health::health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(config.timeout()))
        .with_state(state)
}

/// 按配置创建产品仓库
pub fn build_state(config: &Config) -> AppState {
    let product_service = if config.store.seed {
        ProductService::with_seed_data()
    } else {
        ProductService::new()
    };
    AppState::new(product_service)
}

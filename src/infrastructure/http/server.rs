//! HTTP Server
//!
//! Axum HTTP 服务器构建与启动
//!
//! `create_app` 只构建 Router，不绑定端口；`HttpServer` 负责监听

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::extract::body_parsing_middleware;
use super::middleware::{
    access_log_middleware, error_logging_middleware, lowercase_path, panic_responder,
    security_headers_middleware,
};
use super::routes::create_routes;
use super::state::AppState;
use crate::config::{AppConfig, ServerConfig};
use crate::infrastructure::memory::SeedUserDirectory;

/// 按配置构建完整的应用 Router（种子用户目录）
pub fn create_app(config: &AppConfig) -> Router {
    let state = AppState::new(&config.environment, SeedUserDirectory::default().arc());
    build_router(Arc::new(state))
}

/// 为给定状态装配中间件链
///
/// 路由前先规范化路径：去掉末尾斜杠并转为小写（查询串不变）
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS 配置 - 允许所有来源的跨域请求
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let verbose = state.is_development();

    let routes = create_routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            body_parsing_middleware,
        ))
        .layer(CatchPanicLayer::custom(panic_responder(verbose)))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors)
        .with_state(state);

    // 外层 Router 先写入 OriginalUri，404 响应与访问日志使用原始路径
    Router::new().fallback_service(
        ServiceBuilder::new()
            .map_request(lowercase_path)
            .layer(NormalizePathLayer::trim_trailing_slash())
            .service(routes),
    )
}

/// HTTP 服务器
pub struct HttpServer {
    config: AppConfig,
    router: Router,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: AppConfig) -> Self {
        let router = create_app(&config);
        Self { config, router }
    }

    fn server_config(&self) -> &ServerConfig {
        &self.config.server
    }

    async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let addr = self.server_config().addr();
        info!("Starting HTTP server on {}", addr);

        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on port {}", self.server_config().port);
        info!("📊 Environment: {}", self.config.environment);
        info!("🔗 Health check: {}", self.server_config().health_url());

        Ok(listener)
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal)
        .await?;

        Ok(())
    }
}

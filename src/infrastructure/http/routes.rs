//! HTTP Routes
//!
//! API Endpoints:
//! - /           GET   服务信息
//! - /health     GET   健康检查
//! - /api/users  GET   列出用户
//! - /api/users  POST  创建用户
//!
//! 其余方法与路径统一返回 404

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users",
        get(handlers::list_users)
            .post(handlers::create_user)
            .fallback(handlers::not_found),
    )
}

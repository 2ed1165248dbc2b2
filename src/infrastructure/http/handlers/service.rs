//! Service Handlers
//!
//! 服务信息与健康检查

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::infrastructure::http::dto::{iso_timestamp, HealthResponse, InfoResponse};
use crate::infrastructure::http::state::AppState;

pub const SERVICE_MESSAGE: &str = "Jenkins CI/CD Demo API";
pub const SERVICE_VERSION: &str = "1.0.0";

/// GET / - 服务信息
pub async fn root(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_MESSAGE,
        version: SERVICE_VERSION,
        timestamp: iso_timestamp(Utc::now()),
        environment: state.environment.clone(),
    })
}

/// GET /health - 存活探针，不检查任何依赖
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: state.uptime_secs(),
        timestamp: iso_timestamp(Utc::now()),
    })
}

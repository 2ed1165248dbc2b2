//! Application State
//!
//! 启动时构造一次，handler 之间只读共享

use std::sync::Arc;
use std::time::Instant;

use crate::application::{CreateUserHandler, ListUsersHandler, UserDirectoryPort};
use crate::config::DEVELOPMENT;

use super::error::ApiError;

/// 应用状态
pub struct AppState {
    /// 部署环境名称
    pub environment: String,
    /// 服务启动时刻，用于计算 uptime
    pub started_at: Instant,

    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,

    // ========== Query Handlers ==========
    pub list_users_handler: ListUsersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(environment: impl Into<String>, directory: Arc<dyn UserDirectoryPort>) -> Self {
        Self {
            environment: environment.into(),
            started_at: Instant::now(),
            create_user_handler: CreateUserHandler::new(),
            list_users_handler: ListUsersHandler::new(directory),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }

    /// 启动以来的秒数（单调时钟）
    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// 构造通用 500 错误，开发环境下保留错误详情
    pub fn internal_error(&self, err: impl std::fmt::Display) -> ApiError {
        ApiError::internal(err, self.is_development())
    }
}

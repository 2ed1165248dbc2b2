//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 500 响应的固定 error 字段
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

/// 非开发环境下替代错误详情的文本
pub const REDACTED_MESSAGE: &str = "Internal server error";

/// 404 响应的固定 error 字段
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            path: None,
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// 未匹配的路由，path 含查询串
    NotFound(String),
    /// verbose 为 true 时 detail 会出现在响应体中
    Internal { detail: String, verbose: bool },
}

impl ApiError {
    pub fn internal(err: impl std::fmt::Display, verbose: bool) -> Self {
        ApiError::Internal {
            detail: err.to_string(),
            verbose,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            ApiError::NotFound(path) => {
                tracing::debug!(path = %path, "Route not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        path: Some(path),
                        ..ErrorResponse::new(ROUTE_NOT_FOUND)
                    },
                )
            }
            ApiError::Internal { detail, verbose } => {
                tracing::error!(error = %detail, "Internal server error");
                let message = if verbose {
                    detail
                } else {
                    REDACTED_MESSAGE.to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: Some(message),
                        ..ErrorResponse::new(SOMETHING_WENT_WRONG)
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}

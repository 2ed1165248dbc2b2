//! Fallback Handler

use axum::extract::OriginalUri;

use crate::infrastructure::http::error::ApiError;

/// 未匹配的方法或路径，path 保留原始查询串
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    ApiError::NotFound(path)
}

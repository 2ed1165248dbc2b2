//! User HTTP Handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::application::ListUsers;
use crate::infrastructure::http::dto::{CreateUserResponse, UsersResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::UserPayload;
use crate::infrastructure::http::state::AppState;

/// GET /api/users - 列出种子用户
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<UsersResponse> {
    let users = state.list_users_handler.handle(ListUsers);
    Json(UsersResponse::from(users))
}

/// POST /api/users - 创建用户（不持久化）
///
/// 请求体已由 `body_parsing_middleware` 解析
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: UserPayload,
) -> Result<(StatusCode, Json<CreateUserResponse>), ApiError> {
    let user = state
        .create_user_handler
        .handle(payload.into_create_user())?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully",
            user: user.into(),
        }),
    ))
}

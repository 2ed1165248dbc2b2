//! Request Body Parsing
//!
//! 中间件按 Content-Type 解析 JSON 或 URL-encoded 请求体，
//! 解析失败在路由之前走通用 500 错误；解析结果存入请求扩展

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequestParts, Request, State},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use super::state::AppState;
use crate::application::CreateUser;

/// 请求体大小上限（100 KiB）
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// 请求体解析错误
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON body must be an object or an array")]
    NotAnObject,

    #[error("Failed to read request body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let mime = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

/// 已解析的请求体字段
///
/// 不支持的 Content-Type 或空请求体得到空字段集
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPayload {
    fields: Map<String, Value>,
}

impl UserPayload {
    pub fn from_json(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Array(_) => Ok(Self::default()),
            _ => Err(PayloadError::NotAnObject),
        }
    }

    pub fn from_form(bytes: &[u8]) -> Self {
        let fields = url::form_urlencoded::parse(bytes)
            .into_owned()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        Self { fields }
    }

    fn parse(kind: BodyKind, bytes: &[u8]) -> Result<Self, PayloadError> {
        match kind {
            BodyKind::Json => Self::from_json(bytes),
            BodyKind::Form => Ok(Self::from_form(bytes)),
            BodyKind::Other => Ok(Self::default()),
        }
    }

    /// 读取字段；缺失或假值（null、false、0、空串）返回 None
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(truthy_text)
    }

    pub fn into_create_user(self) -> CreateUser {
        CreateUser {
            name: self.text("name"),
            role: self.text("role"),
        }
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// 请求体解析中间件
///
/// 对所有请求生效（包括未匹配的路由），请求体缓冲后原样放回
pub async fn body_parsing_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let kind = BodyKind::of(request.headers());
    if kind == BodyKind::Other {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, BODY_LIMIT_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return state
                .internal_error(PayloadError::Body(e.to_string()))
                .into_response()
        }
    };

    let payload = match UserPayload::parse(kind, &bytes) {
        Ok(payload) => payload,
        Err(e) => return state.internal_error(e).into_response(),
    };

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(payload);
    next.run(request).await
}

/// 读取中间件解析好的请求体，没有时为空字段集
#[axum::async_trait]
impl<S> FromRequestParts<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<UserPayload>()
            .cloned()
            .unwrap_or_default())
    }
}

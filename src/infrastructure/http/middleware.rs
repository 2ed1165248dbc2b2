//! HTTP Middleware
//!
//! - 路径小写规范化
//! - 安全响应头
//! - combined 格式访问日志
//! - HTTP 状态码错误日志
//! - panic 转换为通用 500 响应

use std::any::Any;
use std::net::SocketAddr;

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, OriginalUri, Request},
    http::{
        header::{CONTENT_LENGTH, REFERER, USER_AGENT},
        uri::PathAndQuery,
        HeaderMap, HeaderName, HeaderValue, Uri,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

use super::error::ApiError;

/// 路由不区分大小写：路由前把路径转为小写，查询串保持原样
///
/// 原始 URI 记入 `OriginalUri`（已存在时不覆盖）
pub fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri().clone();
    if request.extensions().get::<OriginalUri>().is_none() {
        request.extensions_mut().insert(OriginalUri(uri.clone()));
    }

    let path = uri.path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let mut path_and_query = path.to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.into_parts();
    parts.path_and_query = PathAndQuery::try_from(path_and_query).ok();
    if let Ok(lowered) = Uri::from_parts(parts) {
        *request.uri_mut() = lowered;
    }
    request
}

/// 默认安全响应头（小写名称）
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    (
        "content-security-policy",
        "default-src 'self';base-uri 'self';font-src 'self' https: data:;\
         form-action 'self';frame-ancestors 'self';img-src 'self' data:;\
         object-src 'none';script-src 'self';script-src-attr 'none';\
         style-src 'self' https: 'unsafe-inline';upgrade-insecure-requests",
    ),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// 安全响应头中间件
///
/// 只补充缺失的响应头，handler 显式设置的值保持不变
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for &(name, value) in SECURITY_HEADERS {
        headers
            .entry(HeaderName::from_static(name))
            .or_insert_with(|| HeaderValue::from_static(value));
    }

    response
}

/// 一条访问日志记录
#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub remote_addr: Option<String>,
    pub at: DateTime<Utc>,
    pub method: String,
    pub uri: String,
    pub version: String,
    pub status: u16,
    pub content_length: Option<u64>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl AccessRecord {
    /// Apache combined log format，缺失字段记为 `-`
    pub fn combined(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {}\" {} {} \"{}\" \"{}\"",
            self.remote_addr.as_deref().unwrap_or("-"),
            self.at.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.uri,
            self.version,
            self.status,
            self.content_length
                .map(|len| len.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

fn header_text(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// 访问日志中间件
///
/// 每个请求输出一行 combined 格式日志（target = "access"），不影响响应
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let method = request.method().to_string();
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.to_string())
        .unwrap_or_else(|| request.uri().to_string());
    let version = format!("{:?}", request.version());
    let referer = header_text(request.headers(), REFERER);
    let user_agent = header_text(request.headers(), USER_AGENT);

    let response = next.run(request).await;

    let content_length = response.body().size_hint().exact().or_else(|| {
        header_text(response.headers(), CONTENT_LENGTH).and_then(|v| v.parse().ok())
    });

    let record = AccessRecord {
        remote_addr,
        at: Utc::now(),
        method,
        uri,
        version,
        status: response.status().as_u16(),
        content_length,
        referer,
        user_agent,
    };
    tracing::info!(target: "access", "{}", record.combined());

    response
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 供 `CatchPanicLayer::custom` 使用的 panic 响应
pub fn panic_responder(
    verbose: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |panic: Box<dyn Any + Send + 'static>| {
        let detail = if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "handler panicked".to_string()
        };
        ApiError::internal(detail, verbose).into_response()
    }
}

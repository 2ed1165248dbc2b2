//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 开发环境名称，决定错误详情是否对外暴露
pub const DEVELOPMENT: &str = "development";

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 部署环境名称（development / production / ...）
    #[serde(default = "default_environment")]
    pub environment: String,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

fn default_environment() -> String {
    DEVELOPMENT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            environment: default_environment(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// 是否运行在开发环境
    pub fn is_development(&self) -> bool {
        self.environment == DEVELOPMENT
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 健康检查 URL（用于启动日志）
    pub fn health_url(&self) -> String {
        format!("http://localhost:{}/health", self.port)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

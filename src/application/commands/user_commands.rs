//! User Commands

/// 创建用户命令
///
/// 字段为 None 表示请求中缺失或为假值
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub name: Option<String>,
    pub role: Option<String>,
}

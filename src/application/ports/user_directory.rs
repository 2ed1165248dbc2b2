//! User Directory Port - 出站端口
//!
//! 用户只读目录的抽象接口，进程内实现见 infrastructure::memory

use crate::domain::user::User;

/// 用户目录端口
///
/// 只提供读取；新建用户不会写回目录
pub trait UserDirectoryPort: Send + Sync {
    /// 列出目录中的全部用户
    fn all(&self) -> Vec<User>;
}

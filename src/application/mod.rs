//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（UserDirectory）
//! - commands: 命令及处理器
//! - queries: 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateUserHandler, NAME_AND_ROLE_REQUIRED},
    CreateUser,
};
pub use error::ApplicationError;
pub use ports::UserDirectoryPort;
pub use queries::{handlers::ListUsersHandler, ListUsers};

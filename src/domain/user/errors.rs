//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("用户名称不能为空")]
    EmptyName,

    #[error("用户角色不能为空")]
    EmptyRole,
}

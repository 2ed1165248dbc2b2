//! User Command Handlers

use chrono::Utc;

use crate::application::commands::CreateUser;
use crate::application::error::ApplicationError;
use crate::domain::user::{User, UserName, UserRole};

/// 名称或角色缺失时的固定提示
pub const NAME_AND_ROLE_REQUIRED: &str = "Name and role are required";

/// CreateUser Handler
///
/// 构造新用户并返回，不写入任何存储
#[derive(Debug, Default, Clone)]
pub struct CreateUserHandler;

impl CreateUserHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let (Some(name), Some(role)) = (command.name, command.role) else {
            return Err(ApplicationError::validation(NAME_AND_ROLE_REQUIRED));
        };

        let name = UserName::new(name)
            .map_err(|_| ApplicationError::validation(NAME_AND_ROLE_REQUIRED))?;
        let role = UserRole::new(role)
            .map_err(|_| ApplicationError::validation(NAME_AND_ROLE_REQUIRED))?;

        let user = User::register(name, role, Utc::now());

        tracing::info!(
            user_id = %user.id(),
            name = %user.name(),
            role = %user.role(),
            "User created"
        );

        Ok(user)
    }
}

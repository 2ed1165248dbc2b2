//! User Context - Entity

use chrono::{DateTime, Utc};

use super::{UserId, UserName, UserRole};

/// 用户实体
///
/// 只有通过 `register` 创建的用户带有 `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    role: UserRole,
    created_at: Option<DateTime<Utc>>,
}

impl User {
    /// 种子用户（无创建时间）
    pub fn seed(id: i64, name: UserName, role: UserRole) -> Self {
        Self {
            id: UserId::new(id),
            name,
            role,
            created_at: None,
        }
    }

    /// 新建用户，id 由创建时间派生
    pub fn register(name: UserName, role: UserRole, at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::from_timestamp(at),
            name,
            role,
            created_at: Some(at),
        }
    }

    // Getters
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

//! In-Memory User Directory Implementation

use std::sync::Arc;

use crate::application::ports::UserDirectoryPort;
use crate::domain::user::{seed_users, User};

/// 种子用户目录
///
/// 启动时构造一次，运行期间只读，无需加锁
pub struct SeedUserDirectory {
    users: Vec<User>,
}

impl SeedUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for SeedUserDirectory {
    fn default() -> Self {
        Self::new(seed_users())
    }
}

impl UserDirectoryPort for SeedUserDirectory {
    fn all(&self) -> Vec<User> {
        self.users.clone()
    }
}

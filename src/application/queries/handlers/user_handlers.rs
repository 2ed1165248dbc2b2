//! User Query Handlers

use std::sync::Arc;

use crate::application::ports::UserDirectoryPort;
use crate::application::queries::ListUsers;
use crate::domain::user::User;

/// ListUsers Handler
pub struct ListUsersHandler {
    directory: Arc<dyn UserDirectoryPort>,
}

impl ListUsersHandler {
    pub fn new(directory: Arc<dyn UserDirectoryPort>) -> Self {
        Self { directory }
    }

    pub fn handle(&self, _query: ListUsers) -> Vec<User> {
        self.directory.all()
    }
}

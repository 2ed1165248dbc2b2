//! Command Handlers

mod user_handlers;

pub use user_handlers::{CreateUserHandler, NAME_AND_ROLE_REQUIRED};

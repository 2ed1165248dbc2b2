//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户实体与值对象
//! - 进程启动时的种子用户

mod aggregate;
mod errors;
mod seed;
mod value_objects;

pub use aggregate::User;
pub use errors::UserError;
pub use seed::seed_users;
pub use value_objects::{UserId, UserName, UserRole};

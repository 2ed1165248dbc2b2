//! Domain Layer - 领域层
//!
//! - User Context: 用户实体与种子数据

pub mod user;

//! Demo API - CI/CD 流水线演示服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户实体与种子数据
//!
//! 应用层 (application/):
//! - Ports: UserDirectory
//! - Commands: CreateUser
//! - Queries: ListUsers
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 中间件链
//! - Memory: 种子用户目录

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use infrastructure::http::{create_app, HttpServer};
